//! Person name

use std::fmt;

use crate::shared::errors::ValidationError;

const MAX_NAME_LEN: usize = 255;

/// A lower-cased name made of letter-only tokens joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Rules are checked on the lower-cased form, so the stored value
    /// always parses back to itself.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidName(raw.to_string());
        let lowered = raw.to_lowercase();

        let len = lowered.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(invalid());
        }

        // Tabs are not separators here, so they end up inside a token and
        // fail the letter check below.
        for token in lowered.split(is_separator) {
            if token.is_empty() || !token.chars().all(char::is_alphabetic) {
                return Err(invalid());
            }
        }

        Ok(Self(lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ASCII whitespace other than tab; `\v` is not ASCII whitespace in Rust.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() && c != '\t'
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cases_valid_names() {
        let name = Name::parse("Húgo Diego Barros").unwrap();
        assert_eq!(name.as_str(), "húgo diego barros");
    }

    #[test]
    fn accepts_non_latin_letters() {
        assert_eq!(Name::parse("张伟").unwrap().as_str(), "张伟");
        assert!(Name::parse("Ольга Петрова").is_ok());
    }

    #[test]
    fn rejects_bad_spacing() {
        for raw in [
            " Húgo Diego Barros",
            "Húgo Diego Barros ",
            "Húgo  Diego  Barros",
            " ",
        ] {
            assert_eq!(
                Name::parse(raw),
                Err(ValidationError::InvalidName(raw.to_string())),
                "{raw:?} accepted"
            );
        }
    }

    #[test]
    fn rejects_tabs_inside_names() {
        assert!(Name::parse("Húgo\tDiego").is_err());
        assert!(Name::parse("Húgo\u{0B}Diego").is_err());
    }

    #[test]
    fn ascii_line_breaks_separate_tokens() {
        assert_eq!(Name::parse("Húgo\nDiego").unwrap().as_str(), "húgo\ndiego");
        assert!(Name::parse("Húgo\n\nDiego").is_err());
        assert!(Name::parse("Húgo\rDiego").is_ok());
    }

    #[test]
    fn unicode_whitespace_is_not_a_separator() {
        for raw in [
            "Húgo\u{A0}Diego",
            "Húgo\u{2003}Diego",
            "Húgo\u{85}Diego",
            "Húgo\u{2028}Diego",
        ] {
            assert_eq!(
                Name::parse(raw),
                Err(ValidationError::InvalidName(raw.to_string())),
                "{raw:?} accepted"
            );
        }
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        assert!(Name::parse("Hugo2").is_err());
        assert!(Name::parse("Hugo D. Barros").is_err());
        assert!(Name::parse("O'Neil").is_err());
    }

    #[test]
    fn enforces_length_bounds() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse("a").is_ok());
        assert!(Name::parse(&"é".repeat(MAX_NAME_LEN)).is_ok());
        assert!(Name::parse(&"é".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn revalidation_is_idempotent() {
        for raw in ["Alexandre Ferreira", "ÉLODIE ÜNAL", "ΣΟΦΊΑ ΠΑΠΑΣ", "Ðórr"] {
            let name = Name::parse(raw).unwrap();
            assert_eq!(Name::parse(name.as_str()).unwrap(), name, "{raw:?}");
        }
    }

    #[test]
    fn rejects_names_whose_lower_case_is_not_letters_only() {
        // "İ" lower-cases to "i" plus a combining dot, which is not a letter
        assert_eq!(
            Name::parse("İbrahim"),
            Err(ValidationError::InvalidName("İbrahim".into()))
        );
        let raw = "İ".repeat(MAX_NAME_LEN);
        assert!(Name::parse(&raw).is_err());
    }
}
