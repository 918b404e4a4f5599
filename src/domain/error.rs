use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CustomerId;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerError {
    #[error("Customer {0} not found")]
    NotFound(CustomerId),
}

/// Business-level invalidity reported by the address validation capability.
/// The concrete variants belong to the validating adapter; the workflow only
/// cares that the batch must abort.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressError {
    #[error("Country is not supported: {0}")]
    UnsupportedCountry(String),
    #[error("Zip code {zip} is not valid for {country}")]
    MalformedZip { zip: String, country: String },
    #[error("Address rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateError {
    Customer(CustomerError),
    Address(AddressError),
}

impl Display for UpdateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateError::Customer(e) => e.fmt(f),
            UpdateError::Address(e) => e.fmt(f),
        }
    }
}

impl From<CustomerError> for UpdateError {
    fn from(e: CustomerError) -> Self {
        UpdateError::Customer(e)
    }
}

impl From<AddressError> for UpdateError {
    fn from(e: AddressError) -> Self {
        UpdateError::Address(e)
    }
}
