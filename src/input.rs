//! This module provides the checks a front end runs on a candidate string before handing
//! it to the automaton. The automaton itself accepts any string; these rules only keep
//! interactive input within sensible bounds.

use crate::types::{InputError, END_MARKER, MAX_INPUT_LEN, MIN_INPUT_LEN};

/// Validates a candidate string and returns it trimmed.
///
/// The checks run in order and the first failure is returned:
/// the string must be non-empty after trimming, have at least `MIN_INPUT_LEN` and at most
/// `MAX_INPUT_LEN` characters, and must not contain the end marker.
///
/// # Examples
///
/// ```
/// use palpda::input::validate;
/// use palpda::InputError;
///
/// assert_eq!(validate("  racecar "), Ok("racecar"));
/// assert_eq!(validate("a"), Err(InputError::TooShort { min: 2, len: 1 }));
/// ```
pub fn validate(input: &str) -> Result<&str, InputError> {
    let input = input.trim();

    [check_empty, check_min_len, check_max_len, check_reserved]
        .iter()
        .try_for_each(|check| check(input))?;

    Ok(input)
}

fn check_empty(input: &str) -> Result<(), InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(())
}

fn check_min_len(input: &str) -> Result<(), InputError> {
    let len = input.chars().count();
    if len < MIN_INPUT_LEN {
        return Err(InputError::TooShort {
            min: MIN_INPUT_LEN,
            len,
        });
    }
    Ok(())
}

fn check_max_len(input: &str) -> Result<(), InputError> {
    let len = input.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(InputError::TooLong {
            max: MAX_INPUT_LEN,
            len,
        });
    }
    Ok(())
}

fn check_reserved(input: &str) -> Result<(), InputError> {
    if input.contains(END_MARKER) {
        return Err(InputError::ReservedSymbol(END_MARKER));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_is_trimmed() {
        assert_eq!(validate("\tabba\n"), Ok("abba"));
        assert_eq!(validate("ab"), Ok("ab"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate(""), Err(InputError::Empty));
        assert_eq!(validate("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_single_character() {
        let error = validate(" x ").unwrap_err();
        assert_eq!(error, InputError::TooShort { min: 2, len: 1 });
        assert_eq!(error.to_string(), "String must have at least 2 characters.");
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(MAX_INPUT_LEN + 1);
        assert_eq!(
            validate(&input),
            Err(InputError::TooLong {
                max: MAX_INPUT_LEN,
                len: MAX_INPUT_LEN + 1
            })
        );
        assert!(validate(&"a".repeat(MAX_INPUT_LEN)).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        // Two characters, four bytes.
        assert_eq!(validate("éé"), Ok("éé"));
    }

    #[test]
    fn test_reserved_symbol() {
        assert_eq!(
            validate("abεba"),
            Err(InputError::ReservedSymbol(END_MARKER))
        );
    }
}
