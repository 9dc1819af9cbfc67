use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Store-assigned product identifier. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Result<Self, ProductError> {
        if id <= 0 {
            return Err(ProductError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Constructor for identifiers read back from the repository (no validation).
    pub fn from_repository(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProductError::InvalidId);
        }
        let id = s.parse::<i64>().map_err(|_| ProductError::InvalidId)?;
        Self::new(id)
    }
}

/// Units in stock. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, ProductError> {
        if value < 0 {
            return Err(ProductError::QuantityNegative);
        }
        Ok(Self(value))
    }

    /// Constructor for quantities read back from the repository (no validation).
    pub fn from_repository(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
