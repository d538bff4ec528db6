use crate::error::{BabelError, Result};
use num_bigint::BigUint;

/// Parse a page number: `[1-9][0-9]*`
pub fn parse_page_number(input: &str) -> Result<BigUint> {
    let input = input.trim();
    let well_formed = input.starts_with(|c: char| matches!(c, '1'..='9'))
        && input.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(BabelError::InvalidPageNumber(format!(
            "{:?} is not a positive decimal number",
            input
        )));
    }
    decimal(input).ok_or_else(|| BabelError::InvalidPageNumber(input.to_string()))
}

/// Parse a raw domain value: `0` or `[1-9][0-9]*`
pub fn parse_value(input: &str) -> Result<BigUint> {
    let input = input.trim();
    let well_formed = input == "0"
        || (input.starts_with(|c: char| matches!(c, '1'..='9'))
            && input.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(BabelError::InvalidNumber(input.to_string()));
    }
    decimal(input).ok_or_else(|| BabelError::InvalidNumber(input.to_string()))
}

fn decimal(input: &str) -> Option<BigUint> {
    BigUint::parse_bytes(input.as_bytes(), 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers() {
        assert_eq!(parse_page_number("1").unwrap(), BigUint::from(1u32));
        assert_eq!(parse_page_number(" 42\n").unwrap(), BigUint::from(42u32));

        let huge = "9".repeat(400);
        assert_eq!(parse_page_number(&huge).unwrap().to_string(), huge);

        for bad in ["", "0", "007", "-3", "+3", "1e5", "12a", "1 2"] {
            assert!(
                matches!(parse_page_number(bad), Err(BabelError::InvalidPageNumber(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_values() {
        assert_eq!(parse_value("0").unwrap(), BigUint::ZERO);
        assert_eq!(parse_value("1234").unwrap(), BigUint::from(1234u32));
        for bad in ["", "00", "01", "-1", "x"] {
            assert!(matches!(parse_value(bad), Err(BabelError::InvalidNumber(_))));
        }
    }
}
