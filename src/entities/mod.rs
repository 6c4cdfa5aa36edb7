//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub mod booking;
pub mod contract;
pub mod event;
pub mod product;
pub mod service;

// Re-export specific types to avoid conflicts
pub use booking::{Column as BookingColumn, Entity as Booking, Model as BookingModel};
pub use contract::{Column as ContractColumn, Entity as Contract, Model as ContractModel};
pub use event::{Column as EventColumn, Entity as Event, Model as EventModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use service::{Column as ServiceColumn, Entity as Service, Model as ServiceModel};

/// A list of strings persisted as a JSON column.
///
/// Used for service feature lists and event tags/galleries. Serializes as a
/// plain JSON array, so API payloads read and write `["a", "b"]` directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        StringList(items)
    }
}

impl StringList {
    /// Number of entries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
