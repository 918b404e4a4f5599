use crate::adapter::{AddAddressRequest, RegisterCustomerRequest};
use crate::domain::{Customer, CustomerId, OrchestratorMode};
use crate::port::{AddAddressUseCase, CustomerRepository};
use crate::service::CustomerSystem;
use std::collections::HashMap;
use std::fs::File;

/// CSV batch driver over the customer system.
///
/// Seeds customers from one file, then feeds address updates through the
/// request boundary into the workflow, one-command batches in row order. A
/// bad row is reported and skipped; it never affects other rows.
pub struct Orchestrator {
    system: CustomerSystem,
    mode: OrchestratorMode,
}

impl Orchestrator {
    pub async fn new(mode: OrchestratorMode) -> Self {
        let system = super::boot().await;
        Self { system, mode }
    }

    /// Create an Orchestrator over an already-wired system.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_system(system: CustomerSystem, mode: OrchestratorMode) -> Self {
        Self { system, mode }
    }

    pub async fn process(
        self,
    ) -> Result<HashMap<CustomerId, Customer>, Box<dyn std::error::Error>> {
        let OrchestratorMode::Csv {
            customers_file,
            updates_file,
        } = self.mode.clone();
        self.process_csv(&customers_file, &updates_file).await
    }

    async fn process_csv(
        self,
        customers_file: &str,
        updates_file: &str,
    ) -> Result<HashMap<CustomerId, Customer>, Box<dyn std::error::Error>> {
        self.seed_customers(customers_file).await?;
        self.apply_updates(updates_file).await?;
        Ok(self.system.repository.all().await)
    }

    /// Registration boundary: every row passes structural validation and the
    /// credential policy before an empty, inactive aggregate is stored.
    async fn seed_customers(&self, file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let request: RegisterCustomerRequest = match result {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("Error reading customer line {}: {}", line_num, e);
                    continue;
                }
            };

            match request.into_customer() {
                Ok(customer) => self.system.repository.upsert(customer).await?,
                Err(e) => eprintln!("Rejected customer line {}: {}", line_num, e),
            }
        }

        Ok(())
    }

    /// Each accepted row is submitted as a one-command batch, mirroring a
    /// request-per-address driver. Workflow errors (unknown customer,
    /// invalid address) are reported per row and processing continues.
    async fn apply_updates(&self, file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let request: AddAddressRequest = match result {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("Error reading update line {}: {}", line_num, e);
                    continue;
                }
            };

            let (customer_id, command) = match request.into_command() {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("Rejected update line {}: {}", line_num, e);
                    continue;
                }
            };

            match self
                .system
                .service
                .add_addresses(customer_id, vec![command])
                .await
            {
                Ok(_) => {}
                Err(e) => eprintln!("Error processing update line {}: {}", line_num, e),
            }
        }

        Ok(())
    }

    /// Output final customer states as CSV to stdout.
    /// Writes one row per customer, sorted by customer id.
    pub fn output_csv(
        states: &HashMap<CustomerId, Customer>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["customer", "name", "active", "addresses"])?;

        // Sort by customer id for deterministic output
        let mut customer_ids: Vec<_> = states.keys().collect();
        customer_ids.sort();

        for customer_id in customer_ids {
            let customer = &states[customer_id];

            let mut entries: Vec<_> = customer.addresses.iter().collect();
            entries.sort_by_key(|(address_type, _)| **address_type);

            let addresses = entries
                .iter()
                .map(|(address_type, address)| {
                    format!(
                        "{}:{}|{}|{}|{}",
                        address_type, address.street, address.city, address.zip, address.country
                    )
                })
                .collect::<Vec<_>>()
                .join(";");

            wtr.write_record([
                &customer_id.to_string(),
                &customer.name,
                &customer.active.to_string(),
                &addresses,
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
