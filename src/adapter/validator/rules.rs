use crate::{
    domain::{Address, AddressError, UpdateError, ValidateAddress},
    port::AddressValidator,
};
use async_trait::async_trait;
use std::collections::HashSet;

/// Countries whose postal codes are exactly five digits.
const FIVE_DIGIT_ZIP_COUNTRIES: [&str; 5] = ["germany", "france", "spain", "italy", "united states"];

const SUPPORTED_COUNTRIES: [&str; 8] = [
    "germany",
    "austria",
    "france",
    "spain",
    "italy",
    "netherlands",
    "united kingdom",
    "united states",
];

/// Rule-table address validator.
///
/// Stands in for a real postal lookup: it normalizes whitespace on every
/// field, checks the country against a supported set and the zip against the
/// country's postal format. The criteria are deliberately local to this
/// adapter - the workflow only sees the port contract.
pub struct RuleBasedAddressValidator {
    supported_countries: HashSet<&'static str>,
}

impl RuleBasedAddressValidator {
    pub fn new() -> Self {
        Self {
            supported_countries: SUPPORTED_COUNTRIES.into_iter().collect(),
        }
    }

    /// Trim and collapse interior whitespace.
    fn normalize(field: &str) -> String {
        field.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn zip_ok(country: &str, zip: &str) -> bool {
        if FIVE_DIGIT_ZIP_COUNTRIES.contains(&country) {
            zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())
        } else {
            let significant = zip.chars().filter(|c| !c.is_whitespace()).count();
            (3..=10).contains(&significant)
                && zip.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
        }
    }
}

#[async_trait]
impl AddressValidator for RuleBasedAddressValidator {
    async fn validate(&self, request: ValidateAddress) -> Result<Address, UpdateError> {
        let street = Self::normalize(&request.street);
        let city = Self::normalize(&request.city);
        let zip = Self::normalize(&request.zip);
        let country = Self::normalize(&request.country);

        if street.is_empty() || city.is_empty() {
            return Err(AddressError::Rejected("street and city are required".to_string()).into());
        }

        let country_key = country.to_lowercase();
        if !self.supported_countries.contains(country_key.as_str()) {
            return Err(AddressError::UnsupportedCountry(country).into());
        }

        if !Self::zip_ok(&country_key, &zip) {
            return Err(AddressError::MalformedZip { zip, country }.into());
        }

        Ok(Address::new(street, city, zip, country))
    }
}

impl Default for RuleBasedAddressValidator {
    fn default() -> Self {
        Self::new()
    }
}
