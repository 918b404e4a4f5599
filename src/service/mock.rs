use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::fs::File;

const STREETS: [&str; 6] = [
    "Parkring 4",
    "Leopoldstrasse 27",
    "Hauptstrasse 1",
    "Marienplatz 8",
    "Sendlinger Strasse 12",
    "Am Anger 3",
];

const CITIES: [(&str, &str, &str); 5] = [
    ("Garching", "85748", "Germany"),
    ("Munich", "80331", "Germany"),
    ("Vienna", "1010", "Austria"),
    ("Amsterdam", "1012", "Netherlands"),
    ("London", "SW1A 1AA", "United Kingdom"),
];

/// Generate a coherent pair of mock CSV files: a customer seed file and an
/// address update file. Used to exercise the customer system end to end.
///
/// A sprinkling of rows is deliberately broken (weak credentials, blank
/// cities, unsupported countries) so the rejection paths get traffic too.
pub fn generator(
    customers_output: &str,
    updates_output: &str,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    let customers_file = File::create(customers_output)?;
    let mut customers_wtr = csv::Writer::from_writer(customers_file);
    customers_wtr.write_record(["customer", "name", "credential", "birthdate"])?;

    let num_customers = count.max(1);

    for customer_id in 1..=num_customers {
        let name = format!("customer{}", customer_id);
        // Every seventh credential violates the policy; the seed boundary
        // should drop those rows.
        let credential = if customer_id % 7 == 0 {
            "weakpw".to_string()
        } else {
            format!("Pa5sword!{}", customer_id)
        };
        let birthdate = format!(
            "19{:02}-{:02}-{:02}",
            rng.random_range(50..100),
            rng.random_range(1..13),
            rng.random_range(1..29)
        );

        customers_wtr.write_record([
            &customer_id.to_string(),
            &name,
            &credential,
            &birthdate,
        ])?;
    }
    customers_wtr.flush()?;

    let updates_file = File::create(updates_output)?;
    let mut updates_wtr = csv::Writer::from_writer(updates_file);
    updates_wtr.write_record(["customer", "type", "street", "city", "zip", "country"])?;

    let mut all_updates = Vec::new();

    for customer_id in 1..=num_customers {
        let num_addresses = rng.random_range(1..=3);

        for i in 0..num_addresses {
            let address_type = match i {
                0 if customer_id % 4 == 0 => "default",
                0 => "billing",
                1 => "shipping",
                _ => "default",
            };

            let street = STREETS.choose(&mut rng).unwrap().to_string();
            let (mut city, mut zip, mut country) = {
                let (c, z, k) = CITIES.choose(&mut rng).unwrap();
                (c.to_string(), z.to_string(), k.to_string())
            };

            // Structurally broken row (blank city)
            if customer_id % 9 == 0 && i == 0 {
                city = String::new();
            }
            // Business-invalid row (country outside the supported set)
            if customer_id % 11 == 0 && i == 0 {
                country = "Atlantis".to_string();
                zip = "12345".to_string();
            }

            all_updates.push((
                customer_id.to_string(),
                address_type.to_string(),
                street,
                city,
                zip,
                country,
            ));
        }
    }

    all_updates.shuffle(&mut rng);

    for (customer, address_type, street, city, zip, country) in &all_updates {
        updates_wtr.write_record([customer, address_type, street, city, zip, country])?;
    }
    updates_wtr.flush()?;

    println!(
        "✓ Generated {} customers to {} and {} address updates to {}",
        num_customers,
        customers_output,
        all_updates.len(),
        updates_output
    );
    Ok(())
}
