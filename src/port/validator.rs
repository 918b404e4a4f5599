use crate::domain::{Address, UpdateError, ValidateAddress};
use async_trait::async_trait;

/// External capability that judges whether a raw address tuple is a real,
/// deliverable address and returns it in validated (possibly normalized)
/// form.
///
/// What "valid" means belongs entirely to the implementation - postal
/// lookup, geocoding, a rule table. The workflow only relies on the
/// contract: a validated [`Address`] or the invalid-address condition.
#[async_trait]
pub trait AddressValidator: Send + Sync {
    async fn validate(&self, request: ValidateAddress) -> Result<Address, UpdateError>;
}
