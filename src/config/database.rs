//! Database configuration module for the `SibLore` backend.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Booking, Contract, Event, Product, Service};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database behind the given connection string.
///
/// The URL normally comes from [`crate::config::settings::AppConfig`], which
/// defaults to a local `SQLite` file created on first run.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for bookings, contracts, services, events, and products.
///
/// # Errors
/// Returns an error if any of the create-table statements fail.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let booking_table = schema.create_table_from_entity(Booking);
    let contract_table = schema.create_table_from_entity(Contract);
    let service_table = schema.create_table_from_entity(Service);
    let event_table = schema.create_table_from_entity(Event);
    let product_table = schema.create_table_from_entity(Product);

    db.execute(builder.build(&booking_table)).await?;
    db.execute(builder.build(&contract_table)).await?;
    db.execute(builder.build(&service_table)).await?;
    db.execute(builder.build(&event_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    Ok(())
}
