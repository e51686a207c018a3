//! Static catalog data: vehicle categories and rentable vehicles.
//!
//! A catalog is read once at startup and never mutated afterwards. The
//! built-in sample mirrors the listing screen's data; a catalog file (TOML or
//! JSON) can replace it without touching the search code.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{RentcarError, RentcarResult};

/// A vehicle category card (e.g. "Standard", "SUV")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Number of vehicles available in this category
    pub count: u32,
    #[serde(default)]
    pub is_active: bool,
}

/// A rentable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    pub brand: String,
    pub model: String,
    /// Rental price per billing period
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default)]
    pub is_compact: bool,
}

/// The two read-only lists the search engine filters over
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub vehicles: Vec<Vehicle>,
}

static SAMPLE: Lazy<Catalog> = Lazy::new(|| Catalog {
    categories: vec![
        Category {
            id: 1,
            name: "Standard".to_string(),
            count: 56,
            is_active: true,
        },
        Category {
            id: 2,
            name: "Prestige".to_string(),
            count: 22,
            is_active: false,
        },
        Category {
            id: 3,
            name: "SUV".to_string(),
            count: 34,
            is_active: false,
        },
    ],
    vehicles: vec![
        Vehicle {
            id: 1,
            brand: "Toyota".to_string(),
            model: "Yaris iA".to_string(),
            price: 350.0,
            engine: Some("4-Cyl 1.5 Liter".to_string()),
            is_compact: false,
        },
        Vehicle {
            id: 2,
            brand: "Hyundai".to_string(),
            model: "i20".to_string(),
            price: 250.0,
            engine: None,
            is_compact: true,
        },
    ],
});

impl Catalog {
    pub fn new(categories: Vec<Category>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            categories,
            vehicles,
        }
    }

    /// The built-in sample catalog
    pub fn sample() -> &'static Catalog {
        &SAMPLE
    }

    /// Load a catalog file. `.json` files are parsed as JSON, everything
    /// else as TOML.
    pub fn load(path: &Path) -> RentcarResult<Self> {
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog: Catalog = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        catalog.validate()?;

        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            vehicles = catalog.vehicles.len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    /// Reject duplicate ids and prices that are not positive numbers
    pub fn validate(&self) -> RentcarResult<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(RentcarError::Catalog(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        seen.clear();
        for vehicle in &self.vehicles {
            if !seen.insert(vehicle.id) {
                return Err(RentcarError::Catalog(format!(
                    "duplicate vehicle id {}",
                    vehicle.id
                )));
            }
            if !vehicle.price.is_finite() || vehicle.price <= 0.0 {
                return Err(RentcarError::Catalog(format!(
                    "vehicle {} has invalid price {}",
                    vehicle.id, vehicle.price
                )));
            }
        }

        Ok(())
    }
}
