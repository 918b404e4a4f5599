use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Address, AddressType};

/// Opaque stable customer identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl Display for CustomerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Opaque credential carried by the aggregate. The address workflow never
/// inspects, transforms, or logs it; the only code that looks inside is the
/// registration boundary that checked it on the way in.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

// Keeps secrets out of logs and test failure output.
impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(<redacted>)")
    }
}

/// The customer aggregate: one consistency boundary, loaded and persisted as
/// a unit.
///
/// Invariants:
/// - at most one address per [`AddressType`] (the map type enforces this)
/// - `active` is true once a `default` address has been recorded; nothing in
///   this system removes addresses, so the flag never goes back to false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub credential: Credential,
    pub birth_date: NaiveDate,
    pub addresses: HashMap<AddressType, Address>,
    pub active: bool,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        credential: Credential,
        birth_date: NaiveDate,
        addresses: HashMap<AddressType, Address>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            credential,
            birth_date,
            addresses,
            active,
        }
    }

    /// A freshly registered customer: no addresses, not yet active.
    pub fn register(
        id: CustomerId,
        name: impl Into<String>,
        credential: Credential,
        birth_date: NaiveDate,
    ) -> Self {
        Self::new(id, name, credential, birth_date, HashMap::new(), false)
    }

    /// Merge validated addresses into the aggregate. Pure - no I/O, no
    /// failure modes.
    ///
    /// Each pair overwrites any existing entry of its type (last write wins
    /// within the batch too, since pairs are applied in order). Afterwards
    /// the activation flag is recomputed: once a `default` address is
    /// present the customer is active, and activation is never undone.
    pub fn merge_addresses(
        mut self,
        validated: impl IntoIterator<Item = (AddressType, Address)>,
    ) -> Self {
        for (address_type, address) in validated {
            self.addresses.insert(address_type, address);
        }
        self.active = self.active || self.addresses.contains_key(&AddressType::Default);
        self
    }
}
