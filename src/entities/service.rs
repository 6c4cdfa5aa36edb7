//! Service entity - An entry in the service catalog shown to site visitors.
//!
//! Services are managed by the admin and seeded from `catalog.toml` on first
//! run. Bookings refer to services by name only, so editing or deleting a
//! catalog entry never touches existing bookings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::StringList;

/// Service database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the service
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display title, e.g. "Web Development"
    pub title: String,
    /// Longer marketing description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Price in whole KSH
    pub price: i64,
    /// Expected delivery window, e.g. "2-4 weeks"
    pub duration: String,
    /// Bullet-point feature list
    #[sea_orm(column_type = "Json")]
    pub features: StringList,
    /// Image URL or upload path
    pub image: String,
    /// Catalog grouping, e.g. "Web Development" or "Consulting"
    pub category: String,
    /// Whether the service is currently offered
    pub is_active: bool,
    /// When the service was created
    pub created_at: DateTime,
    /// When the service was last modified
    pub updated_at: DateTime,
}

/// Services reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
