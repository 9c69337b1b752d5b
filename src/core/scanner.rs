use crate::core::resolver::classify;
use crate::domain::model::{Classification, QuantityDomain};
use crate::domain::ports::UnitCatalog;

/// Lazily classifies the token pair against each domain of the allow-list,
/// in order, yielding only the domains that matched.
pub fn scan<'a, C: UnitCatalog + ?Sized>(
    catalog: &'a C,
    domains: &'a [QuantityDomain],
    first: &'a str,
    second: &'a str,
) -> impl Iterator<Item = Classification> + 'a {
    domains
        .iter()
        .map(move |&domain| {
            let classification = classify(catalog, domain, first, second);
            tracing::debug!(
                domain = %domain,
                first,
                second,
                outcome = ?classification,
                "classified unit tokens"
            );
            classification
        })
        .filter(Classification::is_match)
}

/// First matching domain, or `NoMatch`. Stops scanning at the first hit.
pub fn resolve_single<C: UnitCatalog + ?Sized>(
    catalog: &C,
    domains: &[QuantityDomain],
    first: &str,
    second: &str,
) -> Classification {
    scan(catalog, domains, first, second)
        .next()
        .unwrap_or(Classification::NoMatch)
}

/// Every matching domain, in allow-list order.
pub fn resolve_all<C: UnitCatalog + ?Sized>(
    catalog: &C,
    domains: &[QuantityDomain],
    first: &str,
    second: &str,
) -> Vec<Classification> {
    scan(catalog, domains, first, second).collect()
}
