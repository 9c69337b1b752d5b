use crate::domain::model::{QuantityDomain, UnitHandle, UnitInfo};
use crate::domain::ports::UnitCatalog;

/// Exact abbreviation lookup, with casing left entirely to the catalog.
pub fn match_abbreviation<C: UnitCatalog + ?Sized>(
    catalog: &C,
    domain: QuantityDomain,
    token: &str,
) -> Option<UnitHandle> {
    catalog.parse_abbreviation(token, domain)
}

/// Canonical-name lookup: token and catalog names are both lower-cased.
pub fn match_canonical_name<'c, C: UnitCatalog + ?Sized>(
    catalog: &'c C,
    domain: QuantityDomain,
    token: &str,
) -> Option<&'c UnitInfo> {
    catalog
        .units(domain)
        .iter()
        .find(|unit| unit.matches_name(token))
}

pub fn is_abbreviation<C: UnitCatalog + ?Sized>(
    catalog: &C,
    domain: QuantityDomain,
    token: &str,
) -> bool {
    match_abbreviation(catalog, domain, token).is_some()
}

pub fn is_canonical_name<C: UnitCatalog + ?Sized>(
    catalog: &C,
    domain: QuantityDomain,
    token: &str,
) -> bool {
    match_canonical_name(catalog, domain, token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticCatalog;

    #[test]
    fn test_abbreviation_matches() {
        let catalog = StaticCatalog::new();
        assert!(is_abbreviation(&catalog, QuantityDomain::Length, "ft"));
        assert!(is_abbreviation(&catalog, QuantityDomain::Length, "cm"));
        assert!(!is_abbreviation(&catalog, QuantityDomain::Length, "feet"));
        assert!(!is_abbreviation(&catalog, QuantityDomain::Mass, "ft"));
    }

    #[test]
    fn test_canonical_name_ignores_case() {
        let catalog = StaticCatalog::new();
        assert!(is_canonical_name(&catalog, QuantityDomain::Length, "feet"));
        assert!(is_canonical_name(&catalog, QuantityDomain::Length, "FEET"));
        assert!(is_canonical_name(&catalog, QuantityDomain::Length, "Centimeter"));

        let unit = match_canonical_name(&catalog, QuantityDomain::Length, "cEnTiMeTeRs").unwrap();
        assert_eq!(unit.name, "Centimeter");
    }

    #[test]
    fn test_canonical_name_is_not_an_abbreviation() {
        let catalog = StaticCatalog::new();
        assert!(!is_canonical_name(&catalog, QuantityDomain::Length, "ft"));
        assert!(!is_canonical_name(&catalog, QuantityDomain::Length, "furlong"));
    }
}
