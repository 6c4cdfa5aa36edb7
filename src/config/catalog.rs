//! Service catalog loading from catalog.toml
//!
//! This module provides functionality to load the default service catalog
//! from a TOML configuration file. The services defined in catalog.toml are
//! used to seed the database on first run, so a fresh deployment immediately
//! has something to show on the public site.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// List of services to seed
    pub services: Vec<ServiceSeed>,
}

/// Seed definition for a single service
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceSeed {
    /// Display title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Price in whole KSH
    pub price: i64,
    /// Expected delivery window, e.g. "2-4 weeks"
    pub duration: String,
    /// Bullet-point feature list
    pub features: Vec<String>,
    /// Image URL
    pub image: String,
    /// Catalog grouping
    pub category: String,
    /// Whether the service starts out visible (default true)
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Loads the service catalog from a TOML file
///
/// # Arguments
/// * `path` - Path to the catalog.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog.toml: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_service_catalog() {
        let toml_str = r#"
            [[services]]
            title = "Web Development"
            description = "Full-stack web applications"
            price = 50000
            duration = "2-4 weeks"
            features = ["Custom Design", "Responsive Layout"]
            image = "https://example.com/web.png"
            category = "Web Development"

            [[services]]
            title = "UI/UX Design"
            description = "Interface and experience design"
            price = 30000
            duration = "1-2 weeks"
            features = ["Wireframing", "Prototyping"]
            image = "https://example.com/design.png"
            category = "Web Development"
            is_active = false
        "#;

        let catalog: Catalog = toml::from_str(toml_str).unwrap();
        assert_eq!(catalog.services.len(), 2);
        assert_eq!(catalog.services[0].title, "Web Development");
        assert_eq!(catalog.services[0].price, 50000);
        assert_eq!(catalog.services[0].features.len(), 2);
        // is_active defaults to true when omitted
        assert!(catalog.services[0].is_active);
        assert!(!catalog.services[1].is_active);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("definitely/not/here.toml");
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message: _ }
        ));
    }
}
