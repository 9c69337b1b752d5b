//! Built-in unit tables for the quantity domains the launcher ships with.
//!
//! Every unit maps affinely onto its domain's base unit:
//! `base = value * factor + offset`. Only temperatures use a non-zero offset.

use crate::domain::model::{QuantityDomain, UnitHandle, UnitInfo};
use crate::domain::ports::UnitCatalog;
use std::collections::HashMap;

struct UnitDef {
    name: &'static str,
    plural: &'static str,
    abbreviations: &'static [&'static str],
    factor: f64,
    offset: f64,
}

const fn unit(
    name: &'static str,
    plural: &'static str,
    abbreviations: &'static [&'static str],
    factor: f64,
) -> UnitDef {
    UnitDef {
        name,
        plural,
        abbreviations,
        factor,
        offset: 0.0,
    }
}

// base: m/s²
const ACCELERATION: &[UnitDef] = &[
    unit("MeterPerSecondSquared", "MetersPerSecondSquared", &["m/s²", "m/s2"], 1.0),
    unit("CentimeterPerSecondSquared", "CentimetersPerSecondSquared", &["cm/s²", "cm/s2"], 0.01),
    unit("KilometerPerSecondSquared", "KilometersPerSecondSquared", &["km/s²", "km/s2"], 1000.0),
    unit("FootPerSecondSquared", "FeetPerSecondSquared", &["ft/s²", "ft/s2"], 0.3048),
    unit("InchPerSecondSquared", "InchesPerSecondSquared", &["in/s²", "in/s2"], 0.0254),
    unit("StandardGravity", "StandardGravities", &["g"], 9.80665),
];

// base: m
const LENGTH: &[UnitDef] = &[
    unit("Meter", "Meters", &["m"], 1.0),
    unit("Kilometer", "Kilometers", &["km"], 1000.0),
    unit("Decimeter", "Decimeters", &["dm"], 0.1),
    unit("Centimeter", "Centimeters", &["cm"], 0.01),
    unit("Millimeter", "Millimeters", &["mm"], 0.001),
    unit("Micrometer", "Micrometers", &["µm", "um"], 1e-6),
    unit("Nanometer", "Nanometers", &["nm"], 1e-9),
    unit("Inch", "Inches", &["in", "\""], 0.0254),
    unit("Foot", "Feet", &["ft", "'"], 0.3048),
    unit("Yard", "Yards", &["yd"], 0.9144),
    unit("Mile", "Miles", &["mi"], 1609.344),
    unit("NauticalMile", "NauticalMiles", &["nmi", "NM"], 1852.0),
];

// base: kg
const MASS: &[UnitDef] = &[
    unit("Kilogram", "Kilograms", &["kg"], 1.0),
    unit("Gram", "Grams", &["g"], 0.001),
    unit("Milligram", "Milligrams", &["mg"], 1e-6),
    unit("Microgram", "Micrograms", &["µg", "ug"], 1e-9),
    unit("Tonne", "Tonnes", &["t"], 1000.0),
    unit("Pound", "Pounds", &["lb", "lbs"], 0.45359237),
    unit("Ounce", "Ounces", &["oz"], 0.028349523125),
    unit("Stone", "Stones", &["st"], 6.35029318),
    unit("ShortTon", "ShortTons", &["tn"], 907.18474),
];

// base: m/s
const SPEED: &[UnitDef] = &[
    unit("MeterPerSecond", "MetersPerSecond", &["m/s"], 1.0),
    unit("KilometerPerHour", "KilometersPerHour", &["km/h", "kph"], 1.0 / 3.6),
    unit("MilePerHour", "MilesPerHour", &["mph", "mi/h"], 0.44704),
    unit("FootPerSecond", "FeetPerSecond", &["ft/s"], 0.3048),
    unit("Knot", "Knots", &["kn", "kt"], 1852.0 / 3600.0),
];

// base: K
const TEMPERATURE: &[UnitDef] = &[
    unit("Kelvin", "Kelvins", &["K"], 1.0),
    UnitDef {
        name: "Celsius",
        plural: "Celsius",
        abbreviations: &["°C", "degC", "C"],
        factor: 1.0,
        offset: 273.15,
    },
    UnitDef {
        name: "Fahrenheit",
        plural: "Fahrenheit",
        abbreviations: &["°F", "degF", "F"],
        factor: 5.0 / 9.0,
        offset: 459.67 * 5.0 / 9.0,
    },
    unit("Rankine", "Rankine", &["°R", "R"], 5.0 / 9.0),
];

// base: m³
const VOLUME: &[UnitDef] = &[
    unit("CubicMeter", "CubicMeters", &["m³", "m3"], 1.0),
    unit("Liter", "Liters", &["l", "L"], 1e-3),
    unit("Milliliter", "Milliliters", &["ml", "mL"], 1e-6),
    unit("CubicCentimeter", "CubicCentimeters", &["cm³", "cm3", "cc"], 1e-6),
    unit("CubicFoot", "CubicFeet", &["ft³", "ft3"], 0.028316846592),
    unit("CubicInch", "CubicInches", &["in³", "in3"], 1.6387064e-5),
    unit("Gallon", "Gallons", &["gal"], 0.003785411784),
    unit("Quart", "Quarts", &["qt"], 0.000946352946),
    unit("Pint", "Pints", &["pt"], 0.000473176473),
    unit("Cup", "Cups", &["cup"], 0.0002365882365),
    unit("FluidOunce", "FluidOunces", &["floz", "fl.oz"], 2.95735295625e-5),
    unit("Tablespoon", "Tablespoons", &["tbsp"], 1.478676478125e-5),
    unit("Teaspoon", "Teaspoons", &["tsp"], 4.92892159375e-6),
];

fn table(domain: QuantityDomain) -> &'static [UnitDef] {
    match domain {
        QuantityDomain::Acceleration => ACCELERATION,
        QuantityDomain::Length => LENGTH,
        QuantityDomain::Mass => MASS,
        QuantityDomain::Speed => SPEED,
        QuantityDomain::Temperature => TEMPERATURE,
        QuantityDomain::Volume => VOLUME,
    }
}

/// Immutable catalog over the built-in tables. Cheap to share behind `&` or `Arc`.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    domains: Vec<QuantityDomain>,
    units: HashMap<QuantityDomain, Vec<UnitInfo>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        let domains = QuantityDomain::ALL.to_vec();
        let units = domains
            .iter()
            .map(|&domain| {
                let infos = table(domain)
                    .iter()
                    .enumerate()
                    .map(|(ordinal, def)| UnitInfo {
                        handle: UnitHandle {
                            domain,
                            ordinal: ordinal as u16,
                        },
                        name: def.name.to_string(),
                        plural_name: def.plural.to_string(),
                    })
                    .collect();
                (domain, infos)
            })
            .collect();

        Self { domains, units }
    }

    fn def(handle: UnitHandle) -> Option<&'static UnitDef> {
        table(handle.domain).get(handle.ordinal as usize)
    }

    fn handle(domain: QuantityDomain, ordinal: usize) -> UnitHandle {
        UnitHandle {
            domain,
            ordinal: ordinal as u16,
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitCatalog for StaticCatalog {
    fn quantity_domains(&self) -> &[QuantityDomain] {
        &self.domains
    }

    fn units(&self, domain: QuantityDomain) -> &[UnitInfo] {
        self.units.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact-case match wins; otherwise a case-insensitive match is accepted
    /// only when it points at a single unit.
    fn parse_abbreviation(&self, token: &str, domain: QuantityDomain) -> Option<UnitHandle> {
        let units = table(domain);

        if let Some(ordinal) = units
            .iter()
            .position(|def| def.abbreviations.iter().any(|a| *a == token))
        {
            return Some(Self::handle(domain, ordinal));
        }

        let lowered = token.to_lowercase();
        let mut candidates = units.iter().enumerate().filter(|(_, def)| {
            def.abbreviations
                .iter()
                .any(|abbreviation| abbreviation.to_lowercase() == lowered)
        });

        match (candidates.next(), candidates.next()) {
            (Some((ordinal, _)), None) => Some(Self::handle(domain, ordinal)),
            _ => None,
        }
    }

    fn convert(&self, amount: f64, from: UnitHandle, to: UnitHandle) -> Option<f64> {
        if from.domain != to.domain {
            return None;
        }
        let from = Self::def(from)?;
        let to = Self::def(to)?;

        let base = amount * from.factor + from.offset;
        Some((base - to.offset) / to.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::classify;
    use crate::domain::model::Classification;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_exact_case_abbreviation_wins() {
        let catalog = StaticCatalog::new();
        let liter = catalog.parse_abbreviation("L", QuantityDomain::Volume).unwrap();
        let milli = catalog.parse_abbreviation("mL", QuantityDomain::Volume).unwrap();
        assert_eq!(catalog.units(QuantityDomain::Volume)[liter.ordinal as usize].name, "Liter");
        assert_eq!(
            catalog.units(QuantityDomain::Volume)[milli.ordinal as usize].name,
            "Milliliter"
        );
    }

    #[test]
    fn test_case_insensitive_fallback_when_unambiguous() {
        let catalog = StaticCatalog::new();
        assert_eq!(
            catalog.parse_abbreviation("FT", QuantityDomain::Length),
            catalog.parse_abbreviation("ft", QuantityDomain::Length)
        );
        assert_eq!(
            catalog.parse_abbreviation("c", QuantityDomain::Temperature),
            catalog.parse_abbreviation("°C", QuantityDomain::Temperature)
        );
    }

    #[test]
    fn test_unknown_abbreviation() {
        let catalog = StaticCatalog::new();
        assert!(catalog.parse_abbreviation("feet", QuantityDomain::Length).is_none());
        assert!(catalog.parse_abbreviation("cm", QuantityDomain::Mass).is_none());
        assert!(catalog.parse_abbreviation("", QuantityDomain::Length).is_none());
    }

    #[test]
    fn test_convert_by_abbreviation_length() {
        let catalog = StaticCatalog::new();
        let value = catalog
            .convert_by_abbreviation(10.0, QuantityDomain::Length, "ft", "cm")
            .unwrap();
        assert!(close(value, 304.8));
    }

    #[test]
    fn test_convert_by_name_accepts_plural_and_case() {
        let catalog = StaticCatalog::new();
        let value = catalog
            .convert_by_name(1.0, QuantityDomain::Mass, "KILOGRAM", "pounds")
            .unwrap();
        assert!(close(value, 2.2046226218487757));
    }

    #[test]
    fn test_temperature_offsets() {
        let catalog = StaticCatalog::new();
        let f = catalog
            .convert_by_abbreviation(100.0, QuantityDomain::Temperature, "°C", "°F")
            .unwrap();
        assert!(close(f, 212.0));
        let k = catalog
            .convert_by_name(32.0, QuantityDomain::Temperature, "fahrenheit", "kelvin")
            .unwrap();
        assert!(close(k, 273.15));
    }

    #[test]
    fn test_convert_rejects_cross_domain_handles() {
        let catalog = StaticCatalog::new();
        let ft = catalog.parse_abbreviation("ft", QuantityDomain::Length).unwrap();
        let kg = catalog.parse_abbreviation("kg", QuantityDomain::Mass).unwrap();
        assert!(catalog.convert(1.0, ft, kg).is_none());
    }

    #[test]
    fn test_every_abbreviation_pair_is_both_abbreviated_and_affine() {
        let catalog = StaticCatalog::new();
        let amount = 12.5;

        for &domain in catalog.quantity_domains() {
            let units = table(domain);
            for from in units {
                for to in units {
                    for &first in from.abbreviations {
                        for &second in to.abbreviations {
                            assert_eq!(
                                classify(&catalog, domain, first, second),
                                Classification::BothAbbreviated(domain),
                                "{} / {} in {}",
                                first,
                                second,
                                domain
                            );

                            let expected =
                                (amount * from.factor + from.offset - to.offset) / to.factor;
                            let value = catalog
                                .convert_by_abbreviation(amount, domain, first, second)
                                .unwrap();
                            assert!(
                                close(value, expected),
                                "{} {} -> {}: {} != {}",
                                amount,
                                first,
                                second,
                                value,
                                expected
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_abbreviation_resolves_to_its_own_unit() {
        let catalog = StaticCatalog::new();
        for &domain in catalog.quantity_domains() {
            for (ordinal, def) in table(domain).iter().enumerate() {
                for abbreviation in def.abbreviations {
                    let handle = catalog.parse_abbreviation(abbreviation, domain).unwrap();
                    assert_eq!(handle.ordinal as usize, ordinal, "{} in {}", abbreviation, domain);
                }
            }
        }
    }
}
