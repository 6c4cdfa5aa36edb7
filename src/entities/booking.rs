//! Booking entity - Represents a client's request for a service appointment.
//!
//! Bookings are submitted by anonymous site visitors and reviewed by the
//! admin, who either approves or rejects them. The `service` field is free
//! text and is deliberately not linked to the service catalog, so dashboard
//! revenue grouping works over whatever name the client picked at the time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking, stored as its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BookingStatus {
    /// Submitted and awaiting an admin decision
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Accepted by the admin; counts toward revenue
    #[sea_orm(string_value = "Approved")]
    Approved,
    /// Declined by the admin
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

/// Booking database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the booking
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client's full name
    pub client_name: String,
    /// Client email address, stored lowercased
    pub email: String,
    /// Client phone number
    pub phone: String,
    /// Requested service name (free text)
    pub service: String,
    /// Requested appointment date
    pub date: Date,
    /// Current lifecycle state
    pub status: BookingStatus,
    /// Optional notes from the client
    pub notes: Option<String>,
    /// Quoted amount in whole KSH
    pub amount: i64,
    /// When the booking was submitted
    pub created_at: DateTime,
    /// When the booking was last modified
    pub updated_at: DateTime,
}

/// Bookings reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
