use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A physical quantity category with its own unit catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityDomain {
    Acceleration,
    Length,
    Mass,
    Speed,
    Temperature,
    Volume,
}

impl QuantityDomain {
    pub const ALL: [QuantityDomain; 6] = [
        QuantityDomain::Acceleration,
        QuantityDomain::Length,
        QuantityDomain::Mass,
        QuantityDomain::Speed,
        QuantityDomain::Temperature,
        QuantityDomain::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuantityDomain::Acceleration => "Acceleration",
            QuantityDomain::Length => "Length",
            QuantityDomain::Mass => "Mass",
            QuantityDomain::Speed => "Speed",
            QuantityDomain::Temperature => "Temperature",
            QuantityDomain::Volume => "Volume",
        }
    }
}

impl fmt::Display for QuantityDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityDomain {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        QuantityDomain::ALL
            .into_iter()
            .find(|domain| domain.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown quantity domain: {}", s))
    }
}

/// Opaque reference to one unit inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitHandle {
    pub domain: QuantityDomain,
    pub ordinal: u16,
}

/// Canonical naming of one catalog unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitInfo {
    pub handle: UnitHandle,
    pub name: String,
    pub plural_name: String,
}

impl UnitInfo {
    /// Lower-cased comparison against both the singular and plural name.
    pub fn matches_name(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.name.to_lowercase() == token || self.plural_name.to_lowercase() == token
    }
}

/// `[amount, first unit, preposition, second unit]`, split positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTokens {
    pub amount: String,
    pub first_unit: String,
    pub preposition: String,
    pub second_unit: String,
}

/// Which of the two unit tokens were recognised as abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCase {
    BothAbbreviated,
    NeitherAbbreviated,
    FirstAbbreviatedOnly,
    SecondAbbreviatedOnly,
}

impl fmt::Display for MatchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchCase::BothAbbreviated => "both_abbreviated",
            MatchCase::NeitherAbbreviated => "neither_abbreviated",
            MatchCase::FirstAbbreviatedOnly => "first_abbreviated_only",
            MatchCase::SecondAbbreviatedOnly => "second_abbreviated_only",
        };
        f.write_str(label)
    }
}

/// Outcome of evaluating one token pair against one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    BothAbbreviated(QuantityDomain),
    NeitherAbbreviated(QuantityDomain),
    FirstAbbreviatedOnly(QuantityDomain),
    SecondAbbreviatedOnly(QuantityDomain),
    NoMatch,
}

impl Classification {
    pub fn domain(&self) -> Option<QuantityDomain> {
        self.resolved().map(|(_, domain)| domain)
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Classification::NoMatch)
    }

    pub fn resolved(&self) -> Option<(MatchCase, QuantityDomain)> {
        match *self {
            Classification::BothAbbreviated(d) => Some((MatchCase::BothAbbreviated, d)),
            Classification::NeitherAbbreviated(d) => Some((MatchCase::NeitherAbbreviated, d)),
            Classification::FirstAbbreviatedOnly(d) => Some((MatchCase::FirstAbbreviatedOnly, d)),
            Classification::SecondAbbreviatedOnly(d) => {
                Some((MatchCase::SecondAbbreviatedOnly, d))
            }
            Classification::NoMatch => None,
        }
    }
}

/// A converted value plus the literal target-unit token used for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: String,
    pub domain: QuantityDomain,
    pub case: MatchCase,
}

impl ConversionResult {
    /// False for NaN and for values that overflowed to infinity.
    pub fn is_resolved(&self) -> bool {
        self.value.is_finite()
    }

    /// `"<value> <unit>"` with at most `precision` decimals and no trailing zeros.
    pub fn display(&self, precision: usize) -> String {
        format!("{} {}", format_value(self.value, precision), self.unit)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(DEFAULT_PRECISION))
    }
}

pub const DEFAULT_PRECISION: usize = 10;

pub fn format_value(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Scan behaviour: stop at the first matching domain, or collect all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ResolutionMode {
    Single,
    #[default]
    Multi,
}

/// Decimal and digit-group separators of the caller's culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl NumberFormat {
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
        group_separator: Some(','),
    };

    /// Presets keyed by culture tag (`en-US`, `de-DE`, ...), matched on the
    /// full tag first and then on the language subtag.
    pub fn for_culture(tag: &str) -> Option<NumberFormat> {
        let tag = tag.trim().replace('_', "-").to_lowercase();
        let comma_decimal = |group| NumberFormat {
            decimal_separator: ',',
            group_separator: group,
        };

        let by_full_tag = match tag.as_str() {
            "" | "invariant" => Some(NumberFormat::INVARIANT),
            "de-ch" | "it-ch" | "fr-ch" => Some(NumberFormat {
                decimal_separator: '.',
                group_separator: Some('\''),
            }),
            _ => None,
        };
        if by_full_tag.is_some() {
            return by_full_tag;
        }

        let language = tag.split('-').next().unwrap_or_default();
        match language {
            "en" | "ja" | "zh" | "ko" | "he" | "th" => Some(NumberFormat::INVARIANT),
            "de" | "es" | "it" | "nl" | "pt" | "id" | "da" | "tr" => {
                Some(comma_decimal(Some('.')))
            }
            // Space-grouped cultures: the group separator can never appear
            // inside a single token.
            "fr" | "ru" | "sv" | "pl" | "fi" | "nb" | "cs" | "uk" => Some(comma_decimal(None)),
            _ => None,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::INVARIANT
    }
}
