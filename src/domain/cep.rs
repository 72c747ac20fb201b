//! CEP (postal code) validation.

use std::fmt;
use std::str::FromStr;

/// Returns true iff `code` is exactly 8 ASCII decimal digits.
///
/// No separators, no surrounding whitespace. Both services apply this check
/// to the raw inbound string before anything touches the network.
pub fn is_valid_cep(code: &str) -> bool {
    code.len() == 8 && code.bytes().all(|b| b.is_ascii_digit())
}

/// A validated 8-digit postal code.
///
/// Constructing one via `FromStr` is the only way to get a `Cep`, so any
/// call site holding one can rely on the digit invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

/// The input string was not exactly 8 decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCep;

impl FromStr for Cep {
    type Err = InvalidCep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_cep(s) {
            Ok(Cep(s.to_string()))
        } else {
            Err(InvalidCep)
        }
    }
}

impl Cep {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_eight_digits() {
        assert!(is_valid_cep("29902555"));
        assert!(is_valid_cep("01001000"));
        assert!(is_valid_cep("00000000"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_cep("2990255"));
        assert!(!is_valid_cep("299025550"));
        assert!(!is_valid_cep(""));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!is_valid_cep("2990255a"));
        assert!(!is_valid_cep("29902-55"));
        assert!(!is_valid_cep(" 2990255"));
        assert!(!is_valid_cep("+9902555"));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // 8 characters, but not ASCII digits
        assert!(!is_valid_cep("١٢٣٤٥٦٧٨"));
    }

    #[test]
    fn cep_parse_round_trips() {
        let cep: Cep = "01001000".parse().unwrap();
        assert_eq!(cep.as_str(), "01001000");
        assert_eq!(cep.to_string(), "01001000");
    }

    #[test]
    fn cep_parse_rejects_invalid() {
        assert_eq!("123".parse::<Cep>(), Err(InvalidCep));
    }
}
