use crate::domain::{AddAddressCommand, CustomerId, UpdateError};
use async_trait::async_trait;

/// Inbound surface of the address update workflow. Drivers (the CSV
/// orchestrator here, an HTTP adapter in a fuller deployment) depend on this
/// trait, not on the concrete service.
#[async_trait]
pub trait AddAddressUseCase: Send + Sync {
    /// Apply a batch of address-add commands to one customer.
    ///
    /// All-or-nothing: the first failure (unknown customer, invalid address)
    /// aborts the whole batch before anything is persisted, and the error is
    /// propagated unchanged. Commands are validated in sequence order.
    async fn add_addresses(
        &self,
        customer_id: CustomerId,
        commands: Vec<AddAddressCommand>,
    ) -> Result<(), UpdateError>;
}
