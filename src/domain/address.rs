use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The role an address plays for a customer. A customer holds at most one
/// address per type; adding a second address of the same type replaces the
/// first one.
///
/// The `default` address is special: the moment a customer has one, the
/// account is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Default,
    Billing,
    Shipping,
}

impl FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "billing" => Ok(Self::Billing),
            "shipping" => Ok(Self::Shipping),
            other => Err(format!("unknown address type: {}", other)),
        }
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Billing => write!(f, "billing"),
            Self::Shipping => write!(f, "shipping"),
        }
    }
}

/// A validated postal address. Only the address validation capability
/// produces these; once constructed the value never changes.
///
/// The zip code is opaque text rather than a number - postal codes are not
/// integers everywhere (leading zeros, letters, dashes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zip: zip.into(),
            country: country.into(),
        }
    }
}
