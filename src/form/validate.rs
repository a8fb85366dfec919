//! Length field validation.

use thiserror::Error;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    #[error("Length is required")]
    Required,

    #[error("Length must be a number")]
    NotANumber,

    #[error("Should be min of {} characters", MIN_LENGTH)]
    TooShort,

    #[error("maximum {} characters", MAX_LENGTH)]
    TooLong,
}

/// Parse the length field text, checking it is present, numeric and within
/// `MIN_LENGTH..=MAX_LENGTH`. Signed and oversized integers are numbers, so
/// they fail the range check rather than the numeric one.
pub fn validate_length(input: &str) -> Result<usize, LengthError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LengthError::Required);
    }

    let length = match input.parse::<i128>() {
        Ok(n) => n,
        Err(_) if is_integer(input) => {
            return Err(if input.starts_with('-') {
                LengthError::TooShort
            } else {
                LengthError::TooLong
            });
        }
        Err(_) => return Err(LengthError::NotANumber),
    };

    match length {
        n if n < MIN_LENGTH as i128 => Err(LengthError::TooShort),
        n if n > MAX_LENGTH as i128 => Err(LengthError::TooLong),
        n => Ok(n as usize),
    }
}

/// Optional sign followed by at least one digit.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(validate_length("4"), Ok(4));
        assert_eq!(validate_length("16"), Ok(16));
        assert_eq!(validate_length(" 8 "), Ok(8));
    }

    #[test]
    fn required() {
        assert_eq!(validate_length(""), Err(LengthError::Required));
        assert_eq!(validate_length("   "), Err(LengthError::Required));
    }

    #[test]
    fn not_a_number() {
        assert_eq!(validate_length("abc"), Err(LengthError::NotANumber));
        assert_eq!(validate_length("8.5"), Err(LengthError::NotANumber));
        assert_eq!(validate_length("-"), Err(LengthError::NotANumber));
        assert_eq!(validate_length("1e1"), Err(LengthError::NotANumber));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(validate_length("3"), Err(LengthError::TooShort));
        assert_eq!(validate_length("0"), Err(LengthError::TooShort));
        assert_eq!(validate_length("17"), Err(LengthError::TooLong));
    }

    #[test]
    fn signed_and_huge_numbers_fail_the_range_check() {
        assert_eq!(validate_length("-3"), Err(LengthError::TooShort));
        assert_eq!(validate_length("+8"), Ok(8));
        assert_eq!(validate_length("99999999999999999999999"), Err(LengthError::TooLong));
        assert_eq!(
            validate_length("999999999999999999999999999999999999999999"),
            Err(LengthError::TooLong)
        );
        assert_eq!(
            validate_length("-999999999999999999999999999999999999999999"),
            Err(LengthError::TooShort)
        );
    }

    #[test]
    fn messages() {
        assert_eq!(LengthError::Required.to_string(), "Length is required");
        assert_eq!(LengthError::TooShort.to_string(), "Should be min of 4 characters");
        assert_eq!(LengthError::TooLong.to_string(), "maximum 16 characters");
    }
}
