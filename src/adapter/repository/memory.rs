use crate::{
    domain::{Customer, CustomerError, CustomerId, UpdateError},
    port::CustomerRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory customer store
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Snapshot of every stored aggregate. Used by the batch driver for its
    /// final readout; not part of the repository port.
    pub async fn all(&self) -> HashMap<CustomerId, Customer> {
        self.customers.read().await.clone()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Customer, UpdateError> {
        let customers = self.customers.read().await;
        customers
            .get(&id)
            .cloned()
            .ok_or(UpdateError::Customer(CustomerError::NotFound(id)))
    }

    async fn upsert(&self, customer: Customer) -> Result<(), UpdateError> {
        let mut customers = self.customers.write().await;
        customers.insert(customer.id, customer);
        Ok(())
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}
