//! Event entity - A listed event with ticketing details.
//!
//! Events carry presentation fields straight from the original listing form,
//! including a free-text date (events are promoted with copy like "Every
//! Friday"), organizer contacts, and media galleries.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::StringList;

/// Event listing category, stored as its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EventCategory {
    /// Live music
    #[sea_orm(string_value = "Concerts")]
    Concerts,
    /// Hands-on sessions
    #[sea_orm(string_value = "Workshops")]
    Workshops,
    /// Gaming meetups and tournaments
    #[sea_orm(string_value = "Gaming")]
    Gaming,
    /// Exhibitions and cultural events
    #[sea_orm(string_value = "Arts & Culture")]
    #[serde(rename = "Arts & Culture")]
    ArtsCulture,
}

/// Event database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Event title
    pub title: String,
    /// Display date (free text, e.g. "Sat, 14 Dec")
    pub date: String,
    /// Display time (free text, e.g. "7:00 PM")
    pub time: String,
    /// Venue or address
    pub location: String,
    /// Ticket price in whole KSH
    pub price: i64,
    /// Poster image URL
    pub image: String,
    /// Listing category
    pub category: EventCategory,
    /// Venue capacity
    pub max_attendees: i32,
    /// Longer description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Average rating, 0 when unrated
    pub rating: f64,
    /// Organizer display name
    pub organizer: String,
    /// Organizer contact email
    pub organizer_email: String,
    /// Organizer contact phone
    pub organizer_phone: String,
    /// Search tags
    #[sea_orm(column_type = "Json")]
    pub tags: StringList,
    /// Additional image URLs
    #[sea_orm(column_type = "Json")]
    pub gallery: StringList,
    /// Whether the listing is visible
    pub is_active: bool,
    /// Tickets claimed so far
    pub attendees: i32,
    /// When the event was created
    pub created_at: DateTime,
    /// When the event was last modified
    pub updated_at: DateTime,
}

/// Events reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
