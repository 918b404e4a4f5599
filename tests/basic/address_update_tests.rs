use crate::{assert_accepted, assert_rejected};
use crate::context::*;
use customer::domain::AddressType;

#[tokio::test]
async fn test_billing_address_is_stored_without_activation() {
    let ctx = TestContext::new();
    ctx.seed(inactive_customer(13)).await;

    assert_accepted!(ctx, 13, vec![parkring(AddressType::Billing)]);

    let stored = ctx.stored(13).await;
    assert_eq!(stored.addresses.len(), 1);
    assert_eq!(
        stored.addresses[&AddressType::Billing],
        address("Parkring", "Garching", "85748", "Germany")
    );
    assert!(!stored.active);
}

#[tokio::test]
async fn test_default_address_activates_customer() {
    let ctx = TestContext::new();
    ctx.seed(inactive_customer(13)).await;

    assert_accepted!(ctx, 13, vec![parkring(AddressType::Default)]);

    let stored = ctx.stored(13).await;
    assert_eq!(
        stored.addresses[&AddressType::Default],
        address("Parkring", "Garching", "85748", "Germany")
    );
    assert!(stored.active);
}

#[tokio::test]
async fn test_new_address_replaces_existing_of_same_type() {
    let ctx = TestContext::new();
    ctx.seed(inactive_customer(13)).await;

    assert_accepted!(ctx, 13, vec![parkring(AddressType::Billing)]);
    assert_accepted!(
        ctx,
        13,
        vec![command(
            AddressType::Billing,
            "Leopoldstrasse 27",
            "Munich",
            "80331",
            "Germany"
        )]
    );

    let stored = ctx.stored(13).await;
    assert_eq!(stored.addresses.len(), 1);
    assert_eq!(
        stored.addresses[&AddressType::Billing],
        address("Leopoldstrasse 27", "Munich", "80331", "Germany")
    );
}

#[tokio::test]
async fn test_batch_merges_all_commands_in_one_upsert() {
    let ctx = TestContext::new();
    ctx.seed(inactive_customer(13)).await;

    assert_accepted!(
        ctx,
        13,
        vec![
            parkring(AddressType::Billing),
            command(
                AddressType::Shipping,
                "Hauptstrasse 1",
                "Vienna",
                "1010",
                "Austria"
            ),
        ]
    );

    let stored = ctx.stored(13).await;
    assert_eq!(stored.addresses.len(), 2);
    assert!(!stored.active);
    assert_eq!(ctx.validator_calls(), 2);
    assert_eq!(ctx.loads(), 1);
    assert_eq!(ctx.upserts(), 1);
}

#[tokio::test]
async fn test_later_command_wins_within_one_batch() {
    let ctx = TestContext::new();
    ctx.seed(inactive_customer(13)).await;

    assert_accepted!(
        ctx,
        13,
        vec![
            parkring(AddressType::Billing),
            command(
                AddressType::Billing,
                "Marienplatz 8",
                "Munich",
                "80331",
                "Germany"
            ),
        ]
    );

    let stored = ctx.stored(13).await;
    assert_eq!(stored.addresses.len(), 1);
    assert_eq!(
        stored.addresses[&AddressType::Billing],
        address("Marienplatz 8", "Munich", "80331", "Germany")
    );
}
