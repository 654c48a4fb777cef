//! Shareholder model
//!
//! A cotista: someone holding shares (cotas) in the operation. Identified by
//! tax id (CPF), which is only checked for presence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A shareholder row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shareholder {
    /// Full name
    pub name: String,

    /// Tax identifier, unique within the roster
    pub tax_id: String,

    /// Number of shares held
    pub shares: u32,

    /// Capital contributed per share
    pub value_per_share: Money,
}

impl Shareholder {
    /// Create a new shareholder; name and tax id are trimmed
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        shares: u32,
        value_per_share: Money,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            tax_id: tax_id.into().trim().to_string(),
            shares,
            value_per_share,
        }
    }

    /// Capital contributed by this shareholder (shares × value per share)
    pub fn capital(&self) -> Money {
        self.value_per_share.times(self.shares)
    }

    /// Validate the shareholder
    pub fn validate(&self) -> Result<(), ShareholderValidationError> {
        if self.name.trim().is_empty() {
            return Err(ShareholderValidationError::EmptyName);
        }

        if self.tax_id.trim().is_empty() {
            return Err(ShareholderValidationError::EmptyTaxId);
        }

        if self.shares == 0 {
            return Err(ShareholderValidationError::NoShares);
        }

        if self.value_per_share.is_negative() {
            return Err(ShareholderValidationError::NegativeValue(
                self.value_per_share,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Shareholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tax_id)
    }
}

/// Validation errors for shareholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareholderValidationError {
    EmptyName,
    EmptyTaxId,
    NoShares,
    NegativeValue(Money),
}

impl fmt::Display for ShareholderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Shareholder name cannot be empty"),
            Self::EmptyTaxId => write!(f, "Shareholder tax id cannot be empty"),
            Self::NoShares => write!(f, "Shareholder must hold at least one share"),
            Self::NegativeValue(value) => {
                write!(f, "Value per share cannot be negative (got {})", value)
            }
        }
    }
}

impl std::error::Error for ShareholderValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_identity_fields() {
        let s = Shareholder::new("  Ana Souza ", " 111 ", 10, Money::from_cents(100000));
        assert_eq!(s.name, "Ana Souza");
        assert_eq!(s.tax_id, "111");
    }

    #[test]
    fn test_capital() {
        let s = Shareholder::new("Ana", "111", 10, Money::from_cents(100000));
        assert_eq!(s.capital(), Money::from_cents(1000000));
    }

    #[test]
    fn test_validation() {
        let mut s = Shareholder::new("Ana", "111", 1, Money::zero());
        assert!(s.validate().is_ok());

        s.shares = 0;
        assert_eq!(s.validate(), Err(ShareholderValidationError::NoShares));

        s.shares = 1;
        s.value_per_share = Money::from_cents(-1);
        assert!(matches!(
            s.validate(),
            Err(ShareholderValidationError::NegativeValue(_))
        ));

        let nameless = Shareholder::new("   ", "111", 1, Money::zero());
        assert_eq!(
            nameless.validate(),
            Err(ShareholderValidationError::EmptyName)
        );

        let no_id = Shareholder::new("Ana", "", 1, Money::zero());
        assert_eq!(no_id.validate(), Err(ShareholderValidationError::EmptyTaxId));
    }
}
