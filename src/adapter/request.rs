use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{AddAddressCommand, AddressType, Credential, Customer, CustomerId};

const CREDENTIAL_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";
const CREDENTIAL_MIN_LEN: usize = 8;

/// One structurally invalid field of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Structural rejection of a request before the workflow runs. Carries every
/// failing field, not just the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub errors: Vec<FieldError>,
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid request: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Raw address-add row as it arrives at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct AddAddressRequest {
    pub customer: u64,
    #[serde(rename = "type")]
    pub address_type: String,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

impl AddAddressRequest {
    /// Structural pre-validation: non-blank address fields, known type tag.
    /// A request that fails here never reaches the workflow - no load, no
    /// validator call, no upsert.
    pub fn into_command(self) -> Result<(CustomerId, AddAddressCommand), RequestError> {
        let mut errors = Vec::new();

        let address_type = match AddressType::from_str(&self.address_type) {
            Ok(t) => Some(t),
            Err(message) => {
                errors.push(FieldError::new("type", message));
                None
            }
        };

        for (field, value) in [
            ("street", &self.street),
            ("city", &self.city),
            ("zip", &self.zip),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "must not be blank"));
            }
        }

        if !errors.is_empty() {
            return Err(RequestError { errors });
        }

        let command = AddAddressCommand {
            // checked above when errors is empty
            address_type: address_type.unwrap(),
            street: self.street,
            city: self.city,
            zip: self.zip,
            country: self.country,
        };

        Ok((CustomerId(self.customer), command))
    }
}

/// Raw registration row for the seed boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCustomerRequest {
    pub customer: u64,
    pub name: String,
    pub credential: String,
    pub birthdate: String,
}

impl RegisterCustomerRequest {
    /// Structural pre-validation for registration: non-blank name, parseable
    /// birth date, credential policy. Produces an empty, inactive aggregate.
    pub fn into_customer(self) -> Result<Customer, RequestError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "must not be blank"));
        }

        let birth_date = match NaiveDate::parse_from_str(self.birthdate.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new("birthdate", "expected YYYY-MM-DD"));
                None
            }
        };

        if let Err(message) = check_credential(&self.credential) {
            errors.push(FieldError::new("credential", message));
        }

        if !errors.is_empty() {
            return Err(RequestError { errors });
        }

        Ok(Customer::register(
            CustomerId(self.customer),
            self.name,
            Credential::new(self.credential),
            birth_date.unwrap(),
        ))
    }
}

/// Credential policy applied at the registration boundary. The workflow
/// itself never looks at credentials.
///
/// A credential is acceptable iff it has at least eight characters, at least
/// one digit, one lowercase letter, one uppercase letter, one special
/// character, and no whitespace.
pub fn check_credential(raw: &str) -> Result<(), String> {
    if raw.chars().count() < CREDENTIAL_MIN_LEN {
        return Err(format!("at least {} characters required", CREDENTIAL_MIN_LEN));
    }
    if raw.chars().any(char::is_whitespace) {
        return Err("whitespace is not allowed".to_string());
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err("a digit must occur at least once".to_string());
    }
    if !raw.chars().any(|c| c.is_lowercase()) {
        return Err("a lowercase letter must occur at least once".to_string());
    }
    if !raw.chars().any(|c| c.is_uppercase()) {
        return Err("an uppercase letter must occur at least once".to_string());
    }
    if !raw.chars().any(|c| CREDENTIAL_SPECIALS.contains(c)) {
        return Err(format!(
            "a special character must occur at least once (one of {})",
            CREDENTIAL_SPECIALS
        ));
    }
    Ok(())
}
