//! Shared test utilities for the `SibLore` backend.
//!
//! This module provides common helper functions for setting up test
//! databases, creating records with sensible defaults, and driving the
//! router with ready-made HTTP requests.

#![allow(clippy::unwrap_used)]

use crate::{
    api::AppState,
    config::AuthConfig,
    core::{booking, catalog, contract},
    entities::{
        self, booking::BookingStatus, contract::PaymentMethod, event::EventCategory,
        product::ProductCategory,
    },
    errors::Result,
};
use axum::{Router, body::Body, http::Request};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Bearer token the test router accepts on admin routes.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";
/// Password the test router's login endpoint accepts.
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds the full application router over a fresh in-memory database.
///
/// Admin routes accept [`TEST_ADMIN_TOKEN`]; the login endpoint accepts
/// [`TEST_ADMIN_PASSWORD`]. The connection is returned alongside the
/// router so tests can seed or inspect data directly.
pub async fn setup_test_app() -> Result<(Router, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let state = AppState {
        db: db.clone(),
        auth: AuthConfig {
            token: Some(TEST_ADMIN_TOKEN.to_string()),
            password: Some(TEST_ADMIN_PASSWORD.to_string()),
        },
    };
    Ok((crate::api::router(state), db))
}

/// A naive UTC timestamp the given number of days in the past.
#[must_use]
pub fn days_ago(days: i64) -> NaiveDateTime {
    chrono::Utc::now().naive_utc() - chrono::Duration::days(days)
}

/// Submits a test booking through the normal submission path.
///
/// # Defaults
/// * `client_name`: "Test Client"
/// * `phone`: "+254 700 000000"
/// * `date`: "2026-06-15"
/// * `notes`: None
pub async fn create_test_booking(
    db: &DatabaseConnection,
    email: &str,
    service: &str,
    amount: i64,
) -> Result<entities::BookingModel> {
    booking::submit_booking(
        db,
        booking::NewBooking {
            client_name: "Test Client".to_string(),
            email: email.to_string(),
            phone: "+254 700 000000".to_string(),
            service: service.to_string(),
            date: "2026-06-15".to_string(),
            notes: None,
            amount,
        },
    )
    .await
}

/// Inserts a booking row directly, bypassing submission defaults.
///
/// Use this when a test needs control over the status or the creation
/// timestamp, e.g. for ordering and dashboard-window scenarios.
pub async fn insert_booking_at(
    db: &DatabaseConnection,
    email: &str,
    service: &str,
    status: BookingStatus,
    amount: i64,
    created_at: NaiveDateTime,
) -> Result<entities::BookingModel> {
    let booking = entities::booking::ActiveModel {
        client_name: Set("Test Client".to_string()),
        email: Set(email.to_string()),
        phone: Set("+254 700 000000".to_string()),
        service: Set(service.to_string()),
        date: Set(created_at.date()),
        status: Set(status),
        notes: Set(None),
        amount: Set(amount),
        created_at: Set(created_at),
        updated_at: Set(created_at),
        ..Default::default()
    };
    booking.insert(db).await.map_err(Into::into)
}

/// Signs a test contract through the normal signing path.
///
/// # Defaults
/// * `service`: "Web Development"
/// * `amount`: 50000, `deposit_amount`: 15000
/// * `payment_method`: M-Pesa
pub async fn sign_test_contract(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::ContractModel> {
    contract::sign_contract(
        db,
        contract::NewContract {
            client_name: "Amani Otieno".to_string(),
            email: email.to_string(),
            phone: None,
            company: None,
            service: "Web Development".to_string(),
            amount: 50000,
            signature: "Amani Otieno".to_string(),
            signed_date: None,
            payment_method: PaymentMethod::Mpesa,
            deposit_amount: 15000,
        },
    )
    .await
}

/// A valid service input with sensible defaults.
#[must_use]
pub fn test_service_input() -> catalog::NewService {
    catalog::NewService {
        title: "Web Development".to_string(),
        description: "Custom websites built from scratch".to_string(),
        price: 50000,
        duration: "2-4 weeks".to_string(),
        features: vec!["Custom Design".to_string(), "Responsive Layout".to_string()],
        image: String::new(),
        category: "Web Development".to_string(),
        is_active: true,
    }
}

/// A valid event input with sensible defaults.
#[must_use]
pub fn test_event_input() -> catalog::NewEvent {
    catalog::NewEvent {
        title: "Nairobi Art & Tech Night".to_string(),
        date: "March 14, 2026".to_string(),
        time: "6:00 PM - 9:00 PM".to_string(),
        location: "iHub, Nairobi".to_string(),
        price: 1500,
        image: String::new(),
        category: EventCategory::Workshops,
        max_attendees: 100,
        description: "An evening of demos, lightning talks and networking".to_string(),
        rating: 0.0,
        organizer: "SibLore Events".to_string(),
        organizer_email: "events@siblore.co.ke".to_string(),
        organizer_phone: "+254 700 000001".to_string(),
        tags: vec!["tech".to_string()],
        gallery: Vec::new(),
        is_active: true,
        attendees: 0,
    }
}

/// A valid product input with sensible defaults.
#[must_use]
pub fn test_product_input() -> catalog::NewProduct {
    catalog::NewProduct {
        name: "Branded Hoodie".to_string(),
        category: ProductCategory::Clothing,
        price: 4500,
        image: String::new(),
        description: "Heavyweight hoodie with the embroidered studio logo".to_string(),
        rating: 0.0,
        in_stock: true,
    }
}

fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(
    method: &str,
    uri: &str,
    body: &serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// An unauthenticated GET request.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    bare_request("GET", uri, None)
}

/// An unauthenticated DELETE request.
#[must_use]
pub fn delete(uri: &str) -> Request<Body> {
    bare_request("DELETE", uri, None)
}

/// An unauthenticated JSON POST request.
#[must_use]
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    json_request("POST", uri, body, None)
}

/// An unauthenticated JSON PUT request.
#[must_use]
pub fn put_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    json_request("PUT", uri, body, None)
}

/// A GET request carrying the test admin token.
#[must_use]
pub fn admin_get(uri: &str) -> Request<Body> {
    bare_request("GET", uri, Some(TEST_ADMIN_TOKEN))
}

/// A DELETE request carrying the test admin token.
#[must_use]
pub fn admin_delete(uri: &str) -> Request<Body> {
    bare_request("DELETE", uri, Some(TEST_ADMIN_TOKEN))
}

/// A JSON POST request carrying the test admin token.
#[must_use]
pub fn admin_post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    json_request("POST", uri, body, Some(TEST_ADMIN_TOKEN))
}

/// A JSON PUT request carrying the test admin token.
#[must_use]
pub fn admin_put_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    json_request("PUT", uri, body, Some(TEST_ADMIN_TOKEN))
}
