use crate::core::{converter, query, scanner};
use crate::domain::model::{
    Classification, ConversionResult, NumberFormat, QuantityDomain, QueryTokens, ResolutionMode,
};
use crate::domain::ports::{ConfigProvider, UnitCatalog};
use crate::utils::error::Result;

/// Resolves free-text conversion queries against a borrowed, read-only catalog.
pub struct QueryEngine<'c, C: UnitCatalog + ?Sized> {
    catalog: &'c C,
    mode: ResolutionMode,
    domains: Vec<QuantityDomain>,
    number_format: NumberFormat,
}

impl<'c, C: UnitCatalog + ?Sized> QueryEngine<'c, C> {
    /// Multi-resolution over every catalog domain, invariant number format.
    pub fn new(catalog: &'c C) -> Self {
        Self {
            catalog,
            mode: ResolutionMode::default(),
            domains: catalog.quantity_domains().to_vec(),
            number_format: NumberFormat::default(),
        }
    }

    pub fn from_config<P: ConfigProvider + ?Sized>(catalog: &'c C, config: &P) -> Self {
        let engine = Self::new(catalog)
            .with_mode(config.resolution_mode())
            .with_number_format(config.number_format());

        let domains = config.quantity_domains();
        if domains.is_empty() {
            engine
        } else {
            engine.with_domains(domains)
        }
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Restricts and orders the scan. Domains the catalog does not know are dropped.
    pub fn with_domains(mut self, domains: Vec<QuantityDomain>) -> Self {
        let catalog = self.catalog;
        let supported = catalog.quantity_domains();
        self.domains = domains
            .into_iter()
            .filter(|domain| {
                let known = supported.contains(domain);
                if !known {
                    tracing::warn!(domain = %domain, "catalog does not support domain, skipping");
                }
                known
            })
            .collect();
        self
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn domains(&self) -> &[QuantityDomain] {
        &self.domains
    }

    /// Runs a query in the configured mode.
    ///
    /// Malformed queries give `Ok(vec![])`; an unparseable amount is an error
    /// raised before any domain is scanned.
    pub fn query(&self, text: &str) -> Result<Vec<ConversionResult>> {
        self.query_with_mode(text, self.mode)
    }

    pub fn query_with_mode(
        &self,
        text: &str,
        mode: ResolutionMode,
    ) -> Result<Vec<ConversionResult>> {
        let Some(tokens) = query::tokenize(text) else {
            tracing::debug!(query = text, "not a four-field conversion query");
            return Ok(Vec::new());
        };
        self.convert_tokens(&tokens, mode)
    }

    pub fn convert_tokens(
        &self,
        tokens: &QueryTokens,
        mode: ResolutionMode,
    ) -> Result<Vec<ConversionResult>> {
        let amount = query::parse_amount(&tokens.amount, &self.number_format)?;

        let matches = match mode {
            ResolutionMode::Single => {
                let classification = self.resolve(tokens);
                if classification.is_match() {
                    vec![classification]
                } else {
                    Vec::new()
                }
            }
            ResolutionMode::Multi => scanner::resolve_all(
                self.catalog,
                &self.domains,
                &tokens.first_unit,
                &tokens.second_unit,
            ),
        };

        let results: Vec<ConversionResult> = matches
            .into_iter()
            .filter_map(|classification| self.convert_match(classification, amount, tokens))
            .collect();

        tracing::debug!(
            first = %tokens.first_unit,
            second = %tokens.second_unit,
            results = results.len(),
            "query resolved"
        );
        Ok(results)
    }

    /// Single-resolution classification: the first domain that accepts both tokens.
    pub fn resolve(&self, tokens: &QueryTokens) -> Classification {
        scanner::resolve_single(
            self.catalog,
            &self.domains,
            &tokens.first_unit,
            &tokens.second_unit,
        )
    }

    fn convert_match(
        &self,
        classification: Classification,
        amount: f64,
        tokens: &QueryTokens,
    ) -> Option<ConversionResult> {
        let (case, domain) = classification.resolved()?;
        let value = converter::invoke(
            self.catalog,
            classification,
            amount,
            &tokens.first_unit,
            &tokens.second_unit,
        );

        let result = ConversionResult {
            value,
            unit: tokens.second_unit.clone(),
            domain,
            case,
        };
        if !result.is_resolved() {
            tracing::warn!(
                domain = %domain,
                case = %case,
                value = %value,
                "conversion of a resolved token pair gave no finite value"
            );
            return None;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticCatalog;
    use crate::domain::model::MatchCase;
    use crate::domain::model::{UnitHandle, UnitInfo};
    use crate::utils::error::UnitQueryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Built-in catalog that counts every lookup the scanner makes.
    struct CountingCatalog {
        inner: StaticCatalog,
        lookups: AtomicUsize,
    }

    impl CountingCatalog {
        fn new() -> Self {
            Self {
                inner: StaticCatalog::new(),
                lookups: AtomicUsize::new(0),
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl UnitCatalog for CountingCatalog {
        fn quantity_domains(&self) -> &[QuantityDomain] {
            self.inner.quantity_domains()
        }

        fn units(&self, domain: QuantityDomain) -> &[UnitInfo] {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.units(domain)
        }

        fn parse_abbreviation(&self, token: &str, domain: QuantityDomain) -> Option<UnitHandle> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.parse_abbreviation(token, domain)
        }

        fn convert(&self, amount: f64, from: UnitHandle, to: UnitHandle) -> Option<f64> {
            self.inner.convert(amount, from, to)
        }
    }

    struct TestConfig {
        mode: ResolutionMode,
        domains: Vec<QuantityDomain>,
        culture: &'static str,
    }

    impl ConfigProvider for TestConfig {
        fn resolution_mode(&self) -> ResolutionMode {
            self.mode
        }

        fn quantity_domains(&self) -> Vec<QuantityDomain> {
            self.domains.clone()
        }

        fn number_format(&self) -> NumberFormat {
            NumberFormat::for_culture(self.culture).unwrap()
        }

        fn precision(&self) -> usize {
            4
        }
    }

    #[test]
    fn test_single_mode_reports_one_result() {
        let catalog = StaticCatalog::new();
        let engine = QueryEngine::new(&catalog).with_mode(ResolutionMode::Single);

        let results = engine.query("10 ft in cm").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].case, MatchCase::BothAbbreviated);
        assert_eq!(results[0].domain, QuantityDomain::Length);
        assert_eq!(results[0].unit, "cm");
    }

    #[test]
    fn test_from_config_applies_locale_and_domains() {
        let catalog = StaticCatalog::new();
        let config = TestConfig {
            mode: ResolutionMode::Multi,
            domains: vec![QuantityDomain::Mass],
            culture: "de-DE",
        };
        let engine = QueryEngine::from_config(&catalog, &config);

        assert_eq!(engine.domains(), &[QuantityDomain::Mass]);
        let results = engine.query("2,5 kg to g").unwrap();
        assert_eq!(results.len(), 1);
        assert!((results[0].value - 2500.0).abs() < 1e-9);

        assert!(engine.query("10 ft in cm").unwrap().is_empty());
    }

    #[test]
    fn test_empty_domain_list_means_every_catalog_domain() {
        let catalog = StaticCatalog::new();
        let config = TestConfig {
            mode: ResolutionMode::Single,
            domains: vec![],
            culture: "en-US",
        };
        let engine = QueryEngine::from_config(&catalog, &config);
        assert_eq!(engine.domains(), catalog.quantity_domains());
        assert_eq!(engine.mode(), ResolutionMode::Single);
    }

    #[test]
    fn test_parse_error_before_scan() {
        let catalog = StaticCatalog::new();
        let engine = QueryEngine::new(&catalog);

        let err = engine.query("abc ft in cm").unwrap_err();
        assert!(matches!(err, UnitQueryError::InvalidAmount { .. }));

        // The amount is parsed even when no domain could ever match.
        assert!(engine.query("abc furlong in parsec").is_err());
    }

    #[test]
    fn test_parse_error_skips_domain_scan() {
        let catalog = CountingCatalog::new();

        for mode in [ResolutionMode::Single, ResolutionMode::Multi] {
            let engine = QueryEngine::new(&catalog).with_mode(mode);
            assert!(engine.query("abc ft in cm").is_err());
            assert_eq!(catalog.lookups(), 0, "{:?}", mode);
        }

        let engine = QueryEngine::new(&catalog);
        assert_eq!(engine.query("10 ft in cm").unwrap().len(), 1);
        assert!(catalog.lookups() > 0);
    }

    #[test]
    fn test_overflowing_conversion_is_dropped() {
        let catalog = StaticCatalog::new();
        let engine = QueryEngine::new(&catalog);

        assert!(engine.query("1e308 mi to nm").unwrap().is_empty());
        assert!(engine
            .query_with_mode("1e308 mi to nm", ResolutionMode::Single)
            .unwrap()
            .is_empty());

        let results = engine.query("1e290 mi to nm").unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].value.is_finite());
    }

    #[test]
    fn test_malformed_query_is_silent() {
        let catalog = StaticCatalog::new();
        let engine = QueryEngine::new(&catalog);
        assert!(engine.query("10 ft cm").unwrap().is_empty());
        assert!(engine.query("abc ft to the cm").unwrap().is_empty());
    }

    #[test]
    fn test_resolve_returns_case_and_domain() {
        let catalog = StaticCatalog::new();
        let engine = QueryEngine::new(&catalog);
        let tokens = query::tokenize("10 feet to cm").unwrap();

        assert_eq!(
            engine.resolve(&tokens),
            Classification::SecondAbbreviatedOnly(QuantityDomain::Length)
        );
    }
}
