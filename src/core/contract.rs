//! Contract business logic - signing and status management.
//!
//! The public signing flow creates contracts; nothing is stored unless the
//! payload carries an actual signature. Afterwards the admin moves the
//! contract through its states (signed, payment pending, active, completed)
//! and records deposit payment. Status and deposit flag always travel
//! together in one update so readers never see half of the pair.

use crate::{
    entities::{
        Contract, contract,
        contract::{ContractStatus, PaymentMethod},
    },
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// A signed agreement submitted by the public contract flow.
///
/// Status and deposit flag are absent on purpose: every contract starts out
/// `signed` with the deposit unpaid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    /// Client's full name
    pub client_name: String,
    /// Client email address
    pub email: String,
    /// Client phone number, if provided
    pub phone: Option<String>,
    /// Client's company, if provided
    pub company: Option<String>,
    /// Contracted service name
    pub service: String,
    /// Contract value, as a number or a formatted string like "KSH 50,000"
    #[serde(deserialize_with = "crate::core::money::deserialize_kes")]
    pub amount: i64,
    /// Base64-encoded signature image
    pub signature: String,
    /// Signing timestamp; defaults to now when omitted
    pub signed_date: Option<String>,
    /// Chosen deposit payment method
    pub payment_method: PaymentMethod,
    /// Deposit due, as a number or a formatted string
    #[serde(deserialize_with = "crate::core::money::deserialize_kes")]
    pub deposit_amount: i64,
}

/// Parses a submitted signing timestamp.
///
/// Accepts a full RFC 3339 timestamp or a plain date (taken as midnight).
fn parse_signed_date(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.naive_utc());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    Err(Error::Validation {
        message: format!("Unrecognized signing date: {raw:?}"),
    })
}

/// Stores a freshly signed contract.
///
/// The signature is the gate: a missing or whitespace-only signature fails
/// validation before anything touches the database. New contracts always
/// start as `signed` with the deposit unpaid.
///
/// # Errors
/// Returns an error if:
/// - The signature, client name, email, or service is empty
/// - An amount is negative
/// - The signing date is present but unparseable
/// - The database insert operation fails
pub async fn sign_contract(db: &DatabaseConnection, input: NewContract) -> Result<contract::Model> {
    // Validate inputs
    if input.signature.trim().is_empty() {
        return Err(Error::validation("Contract signature is required"));
    }

    let client_name = input.client_name.trim();
    if client_name.is_empty() {
        return Err(Error::validation("Client name cannot be empty"));
    }

    let email = input.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(Error::validation("Email cannot be empty"));
    }

    let service = input.service.trim();
    if service.is_empty() {
        return Err(Error::validation("Service cannot be empty"));
    }

    if input.amount < 0 {
        return Err(Error::validation(format!(
            "Contract amount cannot be negative: {}",
            input.amount
        )));
    }

    if input.deposit_amount < 0 {
        return Err(Error::validation(format!(
            "Deposit amount cannot be negative: {}",
            input.deposit_amount
        )));
    }

    let now = chrono::Utc::now().naive_utc();
    let signed_date = match input.signed_date.as_deref() {
        Some(raw) => parse_signed_date(raw)?,
        None => now,
    };

    let contract = contract::ActiveModel {
        client_name: Set(client_name.to_string()),
        email: Set(email),
        phone: Set(input.phone),
        company: Set(input.company),
        service: Set(service.to_string()),
        amount: Set(input.amount),
        signature: Set(input.signature),
        signed_date: Set(signed_date),
        payment_method: Set(input.payment_method),
        deposit_amount: Set(input.deposit_amount),
        deposit_paid: Set(false),
        status: Set(ContractStatus::Signed),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    contract.insert(db).await.map_err(Into::into)
}

/// Advances a contract's status and deposit flag in a single update.
///
/// Both fields are written by the same UPDATE statement, so no reader can
/// observe a new status with a stale deposit flag or the other way around.
///
/// # Errors
/// Returns an error if:
/// - No contract exists with the given id
/// - The database update operation fails
pub async fn update_contract_status(
    db: &DatabaseConnection,
    contract_id: i64,
    status: ContractStatus,
    deposit_paid: bool,
) -> Result<contract::Model> {
    let mut contract: contract::ActiveModel = Contract::find_by_id(contract_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "contract",
            id: contract_id,
        })?
        .into();

    contract.status = Set(status);
    contract.deposit_paid = Set(deposit_paid);
    contract.updated_at = Set(chrono::Utc::now().naive_utc());

    contract.update(db).await.map_err(Into::into)
}

/// Retrieves a single contract by id.
///
/// # Errors
/// Returns an error if:
/// - No contract exists with the given id
/// - The database query fails
pub async fn get_contract(db: &DatabaseConnection, contract_id: i64) -> Result<contract::Model> {
    Contract::find_by_id(contract_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "contract",
            id: contract_id,
        })
}

/// Retrieves every contract, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_contracts(db: &DatabaseConnection) -> Result<Vec<contract::Model>> {
    Contract::find()
        .order_by_desc(contract::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
