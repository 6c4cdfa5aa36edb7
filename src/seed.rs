//! First-run seeding of the service catalog.
//!
//! A fresh deployment has nothing to show on the public site, so startup
//! loads the default services from `catalog.toml` when the services table is
//! empty. A populated table is never touched, and a missing catalog file
//! only logs a warning; both cases leave the store exactly as it was.

use crate::{
    config::catalog,
    core,
    entities::Service,
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{info, warn};

/// Seeds the default service catalog when the services table is empty.
///
/// # Errors
/// Returns an error if:
/// - The catalog file exists but cannot be parsed
/// - A database query or insert fails
pub async fn seed_default_services(db: &DatabaseConnection, catalog_path: &str) -> Result<()> {
    let existing = Service::find().count(db).await?;
    if existing > 0 {
        info!("Service catalog already has {existing} entries, skipping seed");
        return Ok(());
    }

    if !std::path::Path::new(catalog_path).exists() {
        warn!("No catalog file at {catalog_path}, starting with an empty catalog");
        return Ok(());
    }

    let loaded = catalog::load_catalog(catalog_path)?;
    let count = loaded.services.len();
    for seed in loaded.services {
        core::catalog::create_service(
            db,
            core::catalog::NewService {
                title: seed.title,
                description: seed.description,
                price: seed.price,
                duration: seed.duration,
                features: seed.features,
                image: seed.image,
                category: seed.category,
                is_active: seed.is_active,
            },
        )
        .await?;
    }
    info!("Seeded {count} default services from {catalog_path}");
    Ok(())
}
