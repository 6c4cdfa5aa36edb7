//! Product entity - A shop item sold alongside services and events.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product shop category, stored as a lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Apparel and merchandise
    #[sea_orm(string_value = "clothing")]
    Clothing,
    /// Gadgets and hardware
    #[sea_orm(string_value = "electronics")]
    Electronics,
}

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product display name
    pub name: String,
    /// Shop category
    pub category: ProductCategory,
    /// Price in whole KSH
    pub price: i64,
    /// Image URL
    pub image: String,
    /// Longer description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Average rating, 0 when unrated
    pub rating: f64,
    /// Whether the product can currently be ordered
    pub in_stock: bool,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Products reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
