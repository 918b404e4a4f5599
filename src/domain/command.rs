use serde::{Deserialize, Serialize};

use crate::domain::AddressType;

/// Instruction to add one address of a given type to a customer.
///
/// The type tag is already resolved: the request boundary turns free text
/// into [`AddressType`] before the workflow runs, so a malformed tag is a
/// structural error and never reaches the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressCommand {
    pub address_type: AddressType,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

/// The raw tuple handed to the address validation capability. The type tag
/// is not the validator's business, so it is stripped here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAddress {
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

impl From<&AddAddressCommand> for ValidateAddress {
    fn from(command: &AddAddressCommand) -> Self {
        Self {
            street: command.street.clone(),
            city: command.city.clone(),
            zip: command.zip.clone(),
            country: command.country.clone(),
        }
    }
}
