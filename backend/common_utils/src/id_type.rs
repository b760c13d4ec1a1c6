//! Common ID types

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Gateway-side customer identifier. Guaranteed non-empty after trimming.
#[derive(Debug, Clone, Serialize, Hash, PartialEq, Eq)]
pub struct CustomerId(String);

/// The error type for customer id construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("customer id is empty or blank")]
pub struct InvalidCustomerIdError;

impl CustomerId {
    /// Creates a new customer id from a string by applying validation checks
    pub fn new(input_string: impl Into<String>) -> Result<Self, InvalidCustomerIdError> {
        let input_string = input_string.into();
        if input_string.trim().is_empty() {
            return Err(InvalidCustomerIdError);
        }
        Ok(Self(input_string))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let deserialized_string = String::deserialize(deserializer)?;
        Self::new(deserialized_string).map_err(serde::de::Error::custom)
    }
}

impl FromStr for CustomerId {
    type Err = InvalidCustomerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
