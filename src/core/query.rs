use crate::domain::model::{NumberFormat, QueryTokens};
use crate::utils::error::{Result, UnitQueryError};

/// Splits on single ASCII spaces. Anything other than exactly four fields,
/// or an empty third field, is not a conversion query.
pub fn tokenize(query: &str) -> Option<QueryTokens> {
    let fields: Vec<&str> = query.split(' ').collect();
    let [amount, first_unit, preposition, second_unit] = fields.as_slice() else {
        return None;
    };
    if preposition.is_empty() {
        return None;
    }

    Some(QueryTokens {
        amount: amount.to_string(),
        first_unit: first_unit.to_string(),
        preposition: preposition.to_string(),
        second_unit: second_unit.to_string(),
    })
}

/// Parses the amount field with the caller's decimal and group separators.
///
/// Accepts `[sign] digits[group digits...] [decimal digits] [e[sign]digits]`.
/// Group separators are only valid between digits of the integer part.
pub fn parse_amount(token: &str, format: &NumberFormat) -> Result<f64> {
    let invalid = || UnitQueryError::InvalidAmount {
        token: token.to_string(),
        decimal_separator: format.decimal_separator,
    };

    let mut normalized = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();

    if let Some(&sign) = chars.peek() {
        if sign == '+' || sign == '-' {
            normalized.push(sign);
            chars.next();
        }
    }

    let mut mantissa_digits = 0usize;
    let mut seen_decimal = false;
    let mut previous_was_digit = false;

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            normalized.push(c);
            mantissa_digits += 1;
            previous_was_digit = true;
        } else if c == format.decimal_separator && !seen_decimal {
            normalized.push('.');
            seen_decimal = true;
            previous_was_digit = false;
        } else if Some(c) == format.group_separator && !seen_decimal && previous_was_digit {
            chars.next();
            if !chars.peek().is_some_and(|next| next.is_ascii_digit()) {
                return Err(invalid());
            }
            continue;
        } else {
            break;
        }
        chars.next();
    }

    if mantissa_digits == 0 {
        return Err(invalid());
    }

    if let Some(&marker) = chars.peek() {
        if marker != 'e' && marker != 'E' {
            return Err(invalid());
        }
        normalized.push('e');
        chars.next();

        if let Some(&sign) = chars.peek() {
            if sign == '+' || sign == '-' {
                normalized.push(sign);
                chars.next();
            }
        }

        let mut exponent_digits = 0usize;
        for c in chars {
            if !c.is_ascii_digit() {
                return Err(invalid());
            }
            normalized.push(c);
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return Err(invalid());
        }
    }

    let value: f64 = normalized.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
