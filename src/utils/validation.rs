use crate::utils::error::{Result, UnitQueryError};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(UnitQueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T: Eq + Hash + Display>(field_name: &str, values: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(UnitQueryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UnitQueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Separators must be visible, non-digit characters; a space would be eaten by tokenization.
pub fn validate_separator(field_name: &str, separator: char) -> Result<()> {
    if separator.is_whitespace() || separator.is_ascii_digit() || separator.is_control() {
        return Err(UnitQueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: separator.escape_default().to_string(),
            reason: "Separator must not be whitespace, a digit or a control character"
                .to_string(),
        });
    }
    if matches!(separator, '+' | '-' | 'e' | 'E') {
        return Err(UnitQueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: separator.to_string(),
            reason: "Separator collides with sign or exponent notation".to_string(),
        });
    }
    Ok(())
}
