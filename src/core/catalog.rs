//! Catalog business logic - services, events, and products.
//!
//! These three collections share the same shape of admin CRUD: create with
//! validation, partial update (only the provided fields change), hard
//! delete, and public listing. Bookings reference services by name only, so
//! catalog edits never cascade into the booking history.

use crate::{
    entities::{
        Event, Product, Service, StringList, event, event::EventCategory, product,
        product::ProductCategory, service,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

fn default_true() -> bool {
    true
}

/// Validates that a required text field is present after trimming.
fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: format!("{field} cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates that a money field is not negative.
fn require_non_negative(field: &'static str, amount: i64) -> Result<i64> {
    if amount < 0 {
        return Err(Error::Validation {
            message: format!("{field} cannot be negative: {amount}"),
        });
    }
    Ok(amount)
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// A new service catalog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    /// Display title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Price, as a number or a formatted string like "KSH 50,000"
    #[serde(deserialize_with = "crate::core::money::deserialize_kes")]
    pub price: i64,
    /// Expected delivery window
    pub duration: String,
    /// Bullet-point feature list
    #[serde(default)]
    pub features: Vec<String>,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Catalog grouping
    pub category: String,
    /// Whether the service starts out visible
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update for a service; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChanges {
    /// New title, if changing
    pub title: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// New price, if changing
    #[serde(default, deserialize_with = "crate::core::money::deserialize_kes_opt")]
    pub price: Option<i64>,
    /// New delivery window, if changing
    pub duration: Option<String>,
    /// Replacement feature list, if changing
    pub features: Option<Vec<String>>,
    /// New image URL, if changing
    pub image: Option<String>,
    /// New category, if changing
    pub category: Option<String>,
    /// New visibility, if changing
    pub is_active: Option<bool>,
}

/// Creates a new service catalog entry.
///
/// # Errors
/// Returns an error if:
/// - The title or description is empty or whitespace-only
/// - The price is negative
/// - The database insert operation fails
pub async fn create_service(db: &DatabaseConnection, input: NewService) -> Result<service::Model> {
    let title = require("Service title", &input.title)?;
    let description = require("Service description", &input.description)?;
    let price = require_non_negative("Service price", input.price)?;

    let now = chrono::Utc::now().naive_utc();

    let service = service::ActiveModel {
        title: Set(title),
        description: Set(description),
        price: Set(price),
        duration: Set(input.duration),
        features: Set(StringList::from(input.features)),
        image: Set(input.image),
        category: Set(input.category),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    service.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a service.
///
/// Only the fields present in `changes` are written; everything else keeps
/// its stored value. The updated timestamp is always refreshed.
///
/// # Errors
/// Returns an error if:
/// - No service exists with the given id
/// - A provided title is empty or a provided price is negative
/// - The database update operation fails
pub async fn update_service(
    db: &DatabaseConnection,
    service_id: i64,
    changes: ServiceChanges,
) -> Result<service::Model> {
    let mut service: service::ActiveModel = Service::find_by_id(service_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "service",
            id: service_id,
        })?
        .into();

    if let Some(title) = changes.title {
        service.title = Set(require("Service title", &title)?);
    }
    if let Some(description) = changes.description {
        service.description = Set(require("Service description", &description)?);
    }
    if let Some(price) = changes.price {
        service.price = Set(require_non_negative("Service price", price)?);
    }
    if let Some(duration) = changes.duration {
        service.duration = Set(duration);
    }
    if let Some(features) = changes.features {
        service.features = Set(StringList::from(features));
    }
    if let Some(image) = changes.image {
        service.image = Set(image);
    }
    if let Some(category) = changes.category {
        service.category = Set(category);
    }
    if let Some(is_active) = changes.is_active {
        service.is_active = Set(is_active);
    }
    service.updated_at = Set(chrono::Utc::now().naive_utc());

    service.update(db).await.map_err(Into::into)
}

/// Permanently removes a service from the catalog.
///
/// Existing bookings keep their free-text service name, so nothing else
/// changes.
///
/// # Errors
/// Returns an error if:
/// - No service exists with the given id
/// - The database delete operation fails
pub async fn delete_service(db: &DatabaseConnection, service_id: i64) -> Result<()> {
    let outcome = Service::delete_by_id(service_id).exec(db).await?;
    if outcome.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "service",
            id: service_id,
        });
    }
    Ok(())
}

/// Retrieves the full service catalog in insertion order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>> {
    Service::find()
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A new event listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    /// Event title
    pub title: String,
    /// Display date (free text)
    pub date: String,
    /// Display time (free text)
    pub time: String,
    /// Venue or address
    pub location: String,
    /// Ticket price, as a number or a formatted string
    #[serde(deserialize_with = "crate::core::money::deserialize_kes")]
    pub price: i64,
    /// Poster image URL
    #[serde(default)]
    pub image: String,
    /// Listing category
    pub category: EventCategory,
    /// Venue capacity
    pub max_attendees: i32,
    /// Longer description
    pub description: String,
    /// Initial rating
    #[serde(default)]
    pub rating: f64,
    /// Organizer display name
    pub organizer: String,
    /// Organizer contact email
    pub organizer_email: String,
    /// Organizer contact phone
    pub organizer_phone: String,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Additional image URLs
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Whether the listing starts out visible
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Tickets already claimed
    #[serde(default)]
    pub attendees: i32,
}

/// Partial update for an event; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChanges {
    /// New title, if changing
    pub title: Option<String>,
    /// New display date, if changing
    pub date: Option<String>,
    /// New display time, if changing
    pub time: Option<String>,
    /// New venue, if changing
    pub location: Option<String>,
    /// New ticket price, if changing
    #[serde(default, deserialize_with = "crate::core::money::deserialize_kes_opt")]
    pub price: Option<i64>,
    /// New poster image, if changing
    pub image: Option<String>,
    /// New category, if changing
    pub category: Option<EventCategory>,
    /// New capacity, if changing
    pub max_attendees: Option<i32>,
    /// New description, if changing
    pub description: Option<String>,
    /// New rating, if changing
    pub rating: Option<f64>,
    /// New organizer name, if changing
    pub organizer: Option<String>,
    /// New organizer email, if changing
    pub organizer_email: Option<String>,
    /// New organizer phone, if changing
    pub organizer_phone: Option<String>,
    /// Replacement tag list, if changing
    pub tags: Option<Vec<String>>,
    /// Replacement gallery, if changing
    pub gallery: Option<Vec<String>>,
    /// New visibility, if changing
    pub is_active: Option<bool>,
    /// New attendee count, if changing
    pub attendees: Option<i32>,
}

/// Creates a new event listing.
///
/// # Errors
/// Returns an error if:
/// - The title, location, or organizer is empty or whitespace-only
/// - The price is negative or the capacity is negative
/// - The database insert operation fails
pub async fn create_event(db: &DatabaseConnection, input: NewEvent) -> Result<event::Model> {
    let title = require("Event title", &input.title)?;
    let location = require("Event location", &input.location)?;
    let organizer = require("Event organizer", &input.organizer)?;
    let price = require_non_negative("Event price", input.price)?;
    if input.max_attendees < 0 {
        return Err(Error::validation(format!(
            "Event capacity cannot be negative: {}",
            input.max_attendees
        )));
    }

    let now = chrono::Utc::now().naive_utc();

    let event = event::ActiveModel {
        title: Set(title),
        date: Set(input.date),
        time: Set(input.time),
        location: Set(location),
        price: Set(price),
        image: Set(input.image),
        category: Set(input.category),
        max_attendees: Set(input.max_attendees),
        description: Set(input.description),
        rating: Set(input.rating),
        organizer: Set(organizer),
        organizer_email: Set(input.organizer_email),
        organizer_phone: Set(input.organizer_phone),
        tags: Set(StringList::from(input.tags)),
        gallery: Set(StringList::from(input.gallery)),
        is_active: Set(input.is_active),
        attendees: Set(input.attendees),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    event.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an event.
///
/// # Errors
/// Returns an error if:
/// - No event exists with the given id
/// - A provided title is empty or a provided price is negative
/// - The database update operation fails
pub async fn update_event(
    db: &DatabaseConnection,
    event_id: i64,
    changes: EventChanges,
) -> Result<event::Model> {
    let mut event: event::ActiveModel = Event::find_by_id(event_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "event",
            id: event_id,
        })?
        .into();

    if let Some(title) = changes.title {
        event.title = Set(require("Event title", &title)?);
    }
    if let Some(date) = changes.date {
        event.date = Set(date);
    }
    if let Some(time) = changes.time {
        event.time = Set(time);
    }
    if let Some(location) = changes.location {
        event.location = Set(require("Event location", &location)?);
    }
    if let Some(price) = changes.price {
        event.price = Set(require_non_negative("Event price", price)?);
    }
    if let Some(image) = changes.image {
        event.image = Set(image);
    }
    if let Some(category) = changes.category {
        event.category = Set(category);
    }
    if let Some(max_attendees) = changes.max_attendees {
        event.max_attendees = Set(max_attendees);
    }
    if let Some(description) = changes.description {
        event.description = Set(description);
    }
    if let Some(rating) = changes.rating {
        event.rating = Set(rating);
    }
    if let Some(organizer) = changes.organizer {
        event.organizer = Set(require("Event organizer", &organizer)?);
    }
    if let Some(organizer_email) = changes.organizer_email {
        event.organizer_email = Set(organizer_email);
    }
    if let Some(organizer_phone) = changes.organizer_phone {
        event.organizer_phone = Set(organizer_phone);
    }
    if let Some(tags) = changes.tags {
        event.tags = Set(StringList::from(tags));
    }
    if let Some(gallery) = changes.gallery {
        event.gallery = Set(StringList::from(gallery));
    }
    if let Some(is_active) = changes.is_active {
        event.is_active = Set(is_active);
    }
    if let Some(attendees) = changes.attendees {
        event.attendees = Set(attendees);
    }
    event.updated_at = Set(chrono::Utc::now().naive_utc());

    event.update(db).await.map_err(Into::into)
}

/// Permanently removes an event listing.
///
/// # Errors
/// Returns an error if:
/// - No event exists with the given id
/// - The database delete operation fails
pub async fn delete_event(db: &DatabaseConnection, event_id: i64) -> Result<()> {
    let outcome = Event::delete_by_id(event_id).exec(db).await?;
    if outcome.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "event",
            id: event_id,
        });
    }
    Ok(())
}

/// Retrieves a single event by id.
///
/// # Errors
/// Returns an error if:
/// - No event exists with the given id
/// - The database query fails
pub async fn get_event(db: &DatabaseConnection, event_id: i64) -> Result<event::Model> {
    Event::find_by_id(event_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "event",
            id: event_id,
        })
}

/// Retrieves all event listings in insertion order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>> {
    Event::find()
        .order_by_asc(event::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// A new shop product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product display name
    pub name: String,
    /// Shop category
    pub category: ProductCategory,
    /// Price, as a number or a formatted string
    #[serde(deserialize_with = "crate::core::money::deserialize_kes")]
    pub price: i64,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Longer description
    pub description: String,
    /// Initial rating
    #[serde(default)]
    pub rating: f64,
    /// Whether the product starts out orderable
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

/// Partial update for a product; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    /// New name, if changing
    pub name: Option<String>,
    /// New category, if changing
    pub category: Option<ProductCategory>,
    /// New price, if changing
    #[serde(default, deserialize_with = "crate::core::money::deserialize_kes_opt")]
    pub price: Option<i64>,
    /// New image URL, if changing
    pub image: Option<String>,
    /// New description, if changing
    pub description: Option<String>,
    /// New rating, if changing
    pub rating: Option<f64>,
    /// New stock state, if changing
    pub in_stock: Option<bool>,
}

/// Creates a new shop product.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The price is negative
/// - The database insert operation fails
pub async fn create_product(db: &DatabaseConnection, input: NewProduct) -> Result<product::Model> {
    let name = require("Product name", &input.name)?;
    let price = require_non_negative("Product price", input.price)?;

    let now = chrono::Utc::now().naive_utc();

    let product = product::ActiveModel {
        name: Set(name),
        category: Set(input.category),
        price: Set(price),
        image: Set(input.image),
        description: Set(input.description),
        rating: Set(input.rating),
        in_stock: Set(input.in_stock),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a product.
///
/// # Errors
/// Returns an error if:
/// - No product exists with the given id
/// - A provided name is empty or a provided price is negative
/// - The database update operation fails
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    changes: ProductChanges,
) -> Result<product::Model> {
    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "product",
            id: product_id,
        })?
        .into();

    if let Some(name) = changes.name {
        product.name = Set(require("Product name", &name)?);
    }
    if let Some(category) = changes.category {
        product.category = Set(category);
    }
    if let Some(price) = changes.price {
        product.price = Set(require_non_negative("Product price", price)?);
    }
    if let Some(image) = changes.image {
        product.image = Set(image);
    }
    if let Some(description) = changes.description {
        product.description = Set(description);
    }
    if let Some(rating) = changes.rating {
        product.rating = Set(rating);
    }
    if let Some(in_stock) = changes.in_stock {
        product.in_stock = Set(in_stock);
    }
    product.updated_at = Set(chrono::Utc::now().naive_utc());

    product.update(db).await.map_err(Into::into)
}

/// Permanently removes a product.
///
/// # Errors
/// Returns an error if:
/// - No product exists with the given id
/// - The database delete operation fails
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let outcome = Product::delete_by_id(product_id).exec(db).await?;
    if outcome.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "product",
            id: product_id,
        });
    }
    Ok(())
}

/// Retrieves a single product by id.
///
/// # Errors
/// Returns an error if:
/// - No product exists with the given id
/// - The database query fails
pub async fn get_product(db: &DatabaseConnection, product_id: i64) -> Result<product::Model> {
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "product",
            id: product_id,
        })
}

/// Retrieves all products in insertion order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
