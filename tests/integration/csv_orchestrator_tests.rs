use customer::domain::{AddressType, CustomerId, OrchestratorMode};
use customer::service::{boot, Orchestrator};
use std::io::Write;
use tempfile::NamedTempFile;

async fn run(customers: &NamedTempFile, updates: &NamedTempFile) -> Vec<customer::domain::Customer> {
    let system = boot().await;
    let orchestrator = Orchestrator::with_system(
        system,
        OrchestratorMode::Csv {
            customers_file: customers.path().to_str().unwrap().to_string(),
            updates_file: updates.path().to_str().unwrap().to_string(),
        },
    );

    let states = orchestrator.process().await.unwrap();
    let mut customers: Vec<_> = states.into_values().collect();
    customers.sort_by_key(|c| c.id);
    customers
}

#[tokio::test]
async fn test_csv_processing_end_to_end() {
    let mut customers_file = NamedTempFile::new().unwrap();
    writeln!(customers_file, "customer,name,credential,birthdate").unwrap();
    writeln!(customers_file, "1,hans,Str0ngPw!,1980-01-01").unwrap();
    writeln!(customers_file, "2,erika,S3cur3Pw?,1975-06-15").unwrap();
    customers_file.flush().unwrap();

    let mut updates_file = NamedTempFile::new().unwrap();
    writeln!(updates_file, "customer,type,street,city,zip,country").unwrap();
    writeln!(updates_file, "1,billing,Parkring,Garching,85748,Germany").unwrap();
    writeln!(updates_file, "2,default,Marienplatz 8,Munich,80331,Germany").unwrap();
    updates_file.flush().unwrap();

    let states = run(&customers_file, &updates_file).await;
    assert_eq!(states.len(), 2);

    let hans = &states[0];
    assert_eq!(hans.id, CustomerId(1));
    assert!(!hans.active);
    assert_eq!(hans.addresses[&AddressType::Billing].street, "Parkring");

    let erika = &states[1];
    assert!(erika.active);
    assert_eq!(erika.addresses[&AddressType::Default].city, "Munich");
}

#[tokio::test]
async fn test_bad_rows_are_skipped_without_affecting_others() {
    let mut customers_file = NamedTempFile::new().unwrap();
    writeln!(customers_file, "customer,name,credential,birthdate").unwrap();
    writeln!(customers_file, "1,hans,Str0ngPw!,1980-01-01").unwrap();
    // weak credential - rejected at the seed boundary
    writeln!(customers_file, "2,erika,weakpw,1975-06-15").unwrap();
    customers_file.flush().unwrap();

    let mut updates_file = NamedTempFile::new().unwrap();
    writeln!(updates_file, "customer,type,street,city,zip,country").unwrap();
    // blank city - rejected at the request boundary
    writeln!(updates_file, "1,billing,Parkring,,85748,Germany").unwrap();
    // unsupported country - rejected by the validator
    writeln!(updates_file, "1,shipping,Parkring,Garching,85748,Atlantis").unwrap();
    // customer 2 was never seeded - not-found
    writeln!(updates_file, "2,default,Marienplatz 8,Munich,80331,Germany").unwrap();
    // valid row
    writeln!(updates_file, "1,default,Parkring,Garching,85748,Germany").unwrap();
    updates_file.flush().unwrap();

    let states = run(&customers_file, &updates_file).await;
    assert_eq!(states.len(), 1);

    let hans = &states[0];
    assert_eq!(hans.addresses.len(), 1);
    assert!(hans.addresses.contains_key(&AddressType::Default));
    assert!(hans.active);
}

#[tokio::test]
async fn test_later_row_replaces_earlier_address_of_same_type() {
    let mut customers_file = NamedTempFile::new().unwrap();
    writeln!(customers_file, "customer,name,credential,birthdate").unwrap();
    writeln!(customers_file, "1,hans,Str0ngPw!,1980-01-01").unwrap();
    customers_file.flush().unwrap();

    let mut updates_file = NamedTempFile::new().unwrap();
    writeln!(updates_file, "customer,type,street,city,zip,country").unwrap();
    writeln!(updates_file, "1,billing,Parkring,Garching,85748,Germany").unwrap();
    writeln!(updates_file, "1,billing,Marienplatz 8,Munich,80331,Germany").unwrap();
    updates_file.flush().unwrap();

    let states = run(&customers_file, &updates_file).await;
    let hans = &states[0];

    assert_eq!(hans.addresses.len(), 1);
    assert_eq!(hans.addresses[&AddressType::Billing].city, "Munich");
    assert!(!hans.active);
}

#[tokio::test]
async fn test_validator_normalization_reaches_storage() {
    let mut customers_file = NamedTempFile::new().unwrap();
    writeln!(customers_file, "customer,name,credential,birthdate").unwrap();
    writeln!(customers_file, "1,hans,Str0ngPw!,1980-01-01").unwrap();
    customers_file.flush().unwrap();

    let mut updates_file = NamedTempFile::new().unwrap();
    writeln!(updates_file, "customer,type,street,city,zip,country").unwrap();
    writeln!(
        updates_file,
        "1,billing,Parkring   4,Garching,85748,Germany"
    )
    .unwrap();
    updates_file.flush().unwrap();

    let states = run(&customers_file, &updates_file).await;
    let hans = &states[0];

    assert_eq!(hans.addresses[&AddressType::Billing].street, "Parkring 4");
}
