//! Contract entity - Represents a signed service agreement.
//!
//! Contracts are created by the public signing flow, which submits the
//! client's details together with a drawn signature (a base64 image string).
//! The admin later advances the contract status and records whether the
//! deposit has been paid; both fields are always written together.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress of a contract after signing, stored as a lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Freshly signed, nothing else has happened yet
    #[sea_orm(string_value = "signed")]
    Signed,
    /// Waiting on the deposit payment
    #[sea_orm(string_value = "payment_pending")]
    PaymentPending,
    /// Deposit received, work in progress
    #[sea_orm(string_value = "active")]
    Active,
    /// Work delivered and closed out
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// How the client intends to pay the deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// M-Pesa mobile money
    #[sea_orm(string_value = "mpesa")]
    Mpesa,
    /// Card payment
    #[sea_orm(string_value = "card")]
    Card,
}

/// Contract database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the contract
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Client's full name
    pub client_name: String,
    /// Client email address, stored lowercased
    pub email: String,
    /// Client phone number, if provided
    pub phone: Option<String>,
    /// Client's company, if provided
    pub company: Option<String>,
    /// Contracted service name (free text)
    pub service: String,
    /// Total contract value in whole KSH
    pub amount: i64,
    /// Base64-encoded signature image
    #[sea_orm(column_type = "Text")]
    pub signature: String,
    /// When the contract was signed
    pub signed_date: DateTime,
    /// Chosen deposit payment method
    pub payment_method: PaymentMethod,
    /// Deposit due in whole KSH
    pub deposit_amount: i64,
    /// Whether the deposit has been received
    pub deposit_paid: bool,
    /// Current contract status
    pub status: ContractStatus,
    /// When the contract record was created
    pub created_at: DateTime,
    /// When the contract was last modified
    pub updated_at: DateTime,
}

/// Contracts reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
