use crate::core::classifier::{match_abbreviation, match_canonical_name};
use crate::domain::model::Classification;
use crate::domain::ports::UnitCatalog;

/// Converts `amount` from `first` to `second` using the call shape the
/// classification calls for. Tokens keep their original casing.
///
/// Returns `NaN` for `NoMatch` and whenever the catalog cannot complete the
/// conversion; callers must treat that as "no conversion", never as zero.
pub fn invoke<C: UnitCatalog + ?Sized>(
    catalog: &C,
    classification: Classification,
    amount: f64,
    first: &str,
    second: &str,
) -> f64 {
    let converted = match classification {
        Classification::BothAbbreviated(domain) => {
            catalog.convert_by_abbreviation(amount, domain, first, second)
        }
        Classification::NeitherAbbreviated(domain) => {
            catalog.convert_by_name(amount, domain, first, second)
        }
        Classification::FirstAbbreviatedOnly(domain) => {
            match_abbreviation(catalog, domain, first).and_then(|from| {
                let to = match_canonical_name(catalog, domain, second)?.handle;
                catalog.convert(amount, from, to)
            })
        }
        Classification::SecondAbbreviatedOnly(domain) => {
            match_canonical_name(catalog, domain, first).and_then(|from| {
                let to = match_abbreviation(catalog, domain, second)?;
                catalog.convert(amount, from.handle, to)
            })
        }
        Classification::NoMatch => None,
    };

    converted.unwrap_or(f64::NAN)
}
