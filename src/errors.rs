//! Unified error types for the `SibLore` backend.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants map
//! onto the four caller-visible failure classes (validation, missing record,
//! authorization, aggregation) plus the infrastructure failures underneath
//! them. The HTTP layer translates these into status codes and JSON bodies.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A request payload failed a business rule before any write happened.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description of the violated rule.
        message: String,
    },

    /// A record id did not resolve to a stored record.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "booking" or "contract".
        entity: &'static str,
        /// The id that failed to resolve.
        id: i64,
    },

    /// The caller is not an authenticated admin.
    #[error("Authorization error: {message}")]
    Authorization {
        /// Why the request was refused.
        message: String,
    },

    /// A dashboard read failed; no partial statistics are produced.
    #[error("Dashboard aggregation failed: {source}")]
    Aggregation {
        /// The failed read underneath the aggregation.
        #[source]
        source: sea_orm::DbErr,
    },

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration loading or parsing failure.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration.
        message: String,
    },

    /// I/O failure outside the database, e.g. binding the listen socket.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}
