use crate::domain::{AddAddressCommand, CustomerId, UpdateError, ValidateAddress};
use crate::port::{AddAddressUseCase, AddressValidator, CustomerRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// The address update workflow: load, validate each command, merge, persist.
///
/// Stateless between invocations - all state lives behind the repository
/// port. Concurrent calls for the same customer are not coordinated; the
/// later upsert wins.
pub struct AddressService {
    repository: Arc<dyn CustomerRepository>,
    validator: Arc<dyn AddressValidator>,
}

impl AddressService {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        validator: Arc<dyn AddressValidator>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl AddAddressUseCase for AddressService {
    /// Exactly one load and at most one upsert per call; one validator call
    /// per command, in command order, short-circuited on the first failure.
    /// Nothing is persisted unless every command validated.
    async fn add_addresses(
        &self,
        customer_id: CustomerId,
        commands: Vec<AddAddressCommand>,
    ) -> Result<(), UpdateError> {
        let customer = self.repository.find_by_id(customer_id).await?;

        let mut validated = Vec::with_capacity(commands.len());
        for command in &commands {
            tracing::debug!(
                customer = %customer_id,
                address_type = %command.address_type,
                "validating address"
            );
            let address = self.validator.validate(ValidateAddress::from(command)).await?;
            validated.push((command.address_type, address));
        }

        let updated = customer.merge_addresses(validated);

        tracing::info!(
            customer = %customer_id,
            addresses = updated.addresses.len(),
            active = updated.active,
            "persisting customer"
        );

        self.repository.upsert(updated).await
    }
}
