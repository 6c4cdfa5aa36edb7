//! Booking business logic - public submission and admin review.
//!
//! Visitors submit booking requests through the public site; the admin later
//! approves or rejects them. Every new booking starts out Pending, and the
//! only way a status changes afterwards is through [`decide_booking`], whose
//! input type has exactly two variants. The storage layer itself stays
//! permissive, so the transition rule lives entirely at this boundary.

use crate::{
    entities::{Booking, booking, booking::BookingStatus},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// A visitor's booking request, as submitted by the public site.
///
/// There is deliberately no status field here; submissions cannot choose
/// their own lifecycle state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Client's full name
    pub client_name: String,
    /// Client email address
    pub email: String,
    /// Client phone number
    pub phone: String,
    /// Requested service name
    pub service: String,
    /// Appointment date, either `YYYY-MM-DD` or a full RFC 3339 timestamp
    pub date: String,
    /// Optional notes from the client
    pub notes: Option<String>,
    /// Quoted amount, as a number or a formatted string like "KSH 15,000"
    #[serde(deserialize_with = "crate::core::money::deserialize_kes")]
    pub amount: i64,
}

/// The two decisions an admin can make about a booking.
///
/// A transition back to Pending is not representable here, which is the
/// whole transition rule: once reviewed, a booking is Approved or Rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum BookingDecision {
    /// Accept the booking; it starts counting toward revenue
    Approved,
    /// Decline the booking
    Rejected,
}

impl From<BookingDecision> for BookingStatus {
    fn from(decision: BookingDecision) -> Self {
        match decision {
            BookingDecision::Approved => BookingStatus::Approved,
            BookingDecision::Rejected => BookingStatus::Rejected,
        }
    }
}

/// Parses the submitted appointment date.
///
/// The public form sends a plain `YYYY-MM-DD`; some clients send the full
/// timestamp instead, in which case only the date part is kept.
fn parse_booking_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }
    Err(Error::Validation {
        message: format!("Unrecognized booking date: {raw:?}"),
    })
}

/// Records a new booking request with status Pending.
///
/// Validates the contact fields, lowercases the email, and parses the
/// appointment date before anything is written. Exactly one record is
/// inserted on success.
///
/// # Errors
/// Returns an error if:
/// - Any of client name, email, phone, or service is empty or whitespace-only
/// - The date cannot be parsed
/// - The amount is negative
/// - The database insert operation fails
pub async fn submit_booking(db: &DatabaseConnection, input: NewBooking) -> Result<booking::Model> {
    // Validate inputs
    let client_name = input.client_name.trim();
    if client_name.is_empty() {
        return Err(Error::validation("Client name cannot be empty"));
    }

    let email = input.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(Error::validation("Email cannot be empty"));
    }

    let phone = input.phone.trim();
    if phone.is_empty() {
        return Err(Error::validation("Phone number cannot be empty"));
    }

    let service = input.service.trim();
    if service.is_empty() {
        return Err(Error::validation("Service cannot be empty"));
    }

    if input.amount < 0 {
        return Err(Error::validation(format!(
            "Booking amount cannot be negative: {}",
            input.amount
        )));
    }

    let date = parse_booking_date(&input.date)?;
    let now = chrono::Utc::now().naive_utc();

    let booking = booking::ActiveModel {
        client_name: Set(client_name.to_string()),
        email: Set(email),
        phone: Set(phone.to_string()),
        service: Set(service.to_string()),
        date: Set(date),
        status: Set(BookingStatus::Pending),
        notes: Set(input.notes),
        amount: Set(input.amount),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    booking.insert(db).await.map_err(Into::into)
}

/// Applies an admin decision to a booking.
///
/// Only the status and the updated timestamp change; every other field is
/// left untouched. The admin may revise an earlier decision, so this works
/// on already-reviewed bookings too.
///
/// # Errors
/// Returns an error if:
/// - No booking exists with the given id
/// - The database update operation fails
pub async fn decide_booking(
    db: &DatabaseConnection,
    booking_id: i64,
    decision: BookingDecision,
) -> Result<booking::Model> {
    let mut booking: booking::ActiveModel = Booking::find_by_id(booking_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "booking",
            id: booking_id,
        })?
        .into();

    booking.status = Set(decision.into());
    booking.updated_at = Set(chrono::Utc::now().naive_utc());

    booking.update(db).await.map_err(Into::into)
}

/// Permanently removes a booking.
///
/// # Errors
/// Returns an error if:
/// - No booking exists with the given id
/// - The database delete operation fails
pub async fn delete_booking(db: &DatabaseConnection, booking_id: i64) -> Result<()> {
    let outcome = Booking::delete_by_id(booking_id).exec(db).await?;
    if outcome.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "booking",
            id: booking_id,
        });
    }
    Ok(())
}

/// Retrieves every booking, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_bookings(db: &DatabaseConnection) -> Result<Vec<booking::Model>> {
    Booking::find()
        .order_by_desc(booking::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
