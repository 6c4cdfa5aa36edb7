/// Booking lifecycle - public submission and admin review
pub mod booking;

/// Catalog management - services, events, and products
pub mod catalog;

/// Contract signing and status updates
pub mod contract;

/// Dashboard statistics aggregation
pub mod dashboard;

/// KSH amount parsing and serde helpers
pub mod money;
