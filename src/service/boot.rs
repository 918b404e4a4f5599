use crate::adapter::{InMemoryCustomerRepository, RuleBasedAddressValidator};
use crate::port::AddressValidator;
use crate::service::AddressService;
use std::sync::Arc;

/// The wired customer system: the workflow service plus the repository
/// handle the batch driver reads final states from.
pub struct CustomerSystem {
    pub repository: Arc<InMemoryCustomerRepository>,
    pub service: Arc<AddressService>,
}

/// Set up the customer system and return the wired handle.
///
/// This is the composition root - the one place where concrete adapters are
/// chosen and injected:
/// - InMemoryCustomerRepository (aggregate store)
/// - RuleBasedAddressValidator (address validation capability)
/// - AddressService (the workflow, over the two ports)
pub async fn boot() -> CustomerSystem {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let validator: Arc<dyn AddressValidator> = Arc::new(RuleBasedAddressValidator::new());
    let service = Arc::new(AddressService::new(repository.clone(), validator));

    tracing::info!("Customer system initialized");

    CustomerSystem {
        repository,
        service,
    }
}
