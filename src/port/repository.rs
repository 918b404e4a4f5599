use crate::domain::{Customer, CustomerId, UpdateError};
use async_trait::async_trait;

/// CustomerRepository is the storage boundary for the customer aggregate.
/// The aggregate is always loaded and stored whole - there is no field-level
/// patching.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Load the aggregate for an id.
    ///
    /// Fails with the not-found condition when no customer exists for the id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Customer, UpdateError>;

    /// Insert or fully replace the stored aggregate.
    ///
    /// Idempotent when called twice with an identical aggregate.
    async fn upsert(&self, customer: Customer) -> Result<(), UpdateError>;
}
