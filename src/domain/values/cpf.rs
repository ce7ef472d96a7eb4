//! CPF: Brazilian individual taxpayer ID

use std::fmt;

use crate::shared::errors::ValidationError;

const CPF_LEN: usize = 11;

/// A checksum-valid 11-digit CPF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf(String);

impl Cpf {
    /// Validates `raw` and returns it unchanged on success.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidCpf(raw.to_string());

        if raw.len() != CPF_LEN {
            return Err(invalid());
        }

        let mut digits = [0u32; CPF_LEN];
        for (slot, c) in digits.iter_mut().zip(raw.chars()) {
            *slot = c.to_digit(10).ok_or_else(invalid)?;
        }

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(invalid());
        }
        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return Err(invalid());
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Weights the prefix by `len + 1` down to 2 and folds the sum mod 11.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    ((sum * 10) % 11) % 10
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
