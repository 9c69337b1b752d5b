//! Abbreviation-pattern resolution for one quantity domain.
//!
//! A domain is accepted only when both unit tokens resolve to some unit in it,
//! by abbreviation or by canonical name, in any combination. Abbreviations are
//! checked first, so a token that is both an abbreviation and a name counts
//! as abbreviated.

use crate::core::classifier::{is_abbreviation, is_canonical_name};
use crate::domain::model::{Classification, QuantityDomain};
use crate::domain::ports::UnitCatalog;

pub fn classify<C: UnitCatalog + ?Sized>(
    catalog: &C,
    domain: QuantityDomain,
    first: &str,
    second: &str,
) -> Classification {
    let first_abbreviated = is_abbreviation(catalog, domain, first);
    let second_abbreviated = is_abbreviation(catalog, domain, second);

    match (first_abbreviated, second_abbreviated) {
        (true, true) => Classification::BothAbbreviated(domain),
        (false, false) => {
            if is_canonical_name(catalog, domain, first) && is_canonical_name(catalog, domain, second)
            {
                Classification::NeitherAbbreviated(domain)
            } else {
                Classification::NoMatch
            }
        }
        (true, false) => {
            if is_canonical_name(catalog, domain, second) {
                Classification::FirstAbbreviatedOnly(domain)
            } else {
                Classification::NoMatch
            }
        }
        (false, true) => {
            if is_canonical_name(catalog, domain, first) {
                Classification::SecondAbbreviatedOnly(domain)
            } else {
                Classification::NoMatch
            }
        }
    }
}
