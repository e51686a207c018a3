//! View model for the vehicle listing.
//!
//! Turns a [`SearchSession`] into what the listing screen shows: the results
//! label, category and vehicle cards with their emphasis, and the no-results
//! notice. Emphasis always comes from the same query that produced the
//! results.

use crate::config::DisplayConfig;
use crate::core::search::FilteredState;
use crate::core::session::SearchSession;
use crate::services::catalog::{Category, Vehicle};
use crate::services::format::{format_price, pluralize};

/// Label shown above the vehicles when no search is applied
pub const AVAILABLE_LABEL: &str = "Available vehicles";

/// Action offered next to the no-results notice; clears the search
pub const SHOW_ALL_LABEL: &str = "Show all items";

/// Results label: "Available vehicles" without a search, "Found N vehicles"
/// when a search matched vehicles, nothing when it matched none.
pub fn results_label(state: &FilteredState) -> Option<String> {
    if !state.active {
        return Some(AVAILABLE_LABEL.to_string());
    }
    if state.vehicles.is_empty() {
        return None;
    }
    Some(format!("Found {}", pluralize(state.vehicle_count(), "vehicle")))
}

/// The vehicle section is hidden only when a search matched no vehicles
pub fn shows_vehicle_section(state: &FilteredState) -> bool {
    !state.active || !state.vehicles.is_empty()
}

/// Shown only when a search matched neither categories nor vehicles
pub fn no_results_message(state: &FilteredState, raw_query: &str) -> Option<String> {
    if state.active && state.is_empty() {
        Some(format!("No results found for \"{}\"", raw_query))
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard<'a> {
    pub category: &'a Category,
    pub highlighted: bool,
}

impl CategoryCard<'_> {
    /// Selected categories and search hits share the same filled style
    pub fn is_emphasized(&self) -> bool {
        self.category.is_active || self.highlighted
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCard<'a> {
    pub vehicle: &'a Vehicle,
    pub brand_highlighted: bool,
    pub model_highlighted: bool,
    pub price_label: String,
}

impl<'a> VehicleCard<'a> {
    pub fn is_emphasized(&self) -> bool {
        self.brand_highlighted || self.model_highlighted
    }

    /// Engine row, only for vehicles that list one
    pub fn engine(&self) -> Option<&'a str> {
        self.vehicle.engine.as_deref()
    }
}

/// Everything the listing screen renders for one search state
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub label: Option<String>,
    pub categories: Vec<CategoryCard<'a>>,
    pub vehicles: Vec<VehicleCard<'a>>,
    pub price_unit: String,
    pub no_results: Option<String>,
}

impl<'a> Listing<'a> {
    pub fn build(session: &SearchSession<'a>, display: &DisplayConfig) -> Self {
        let state = session.results();

        let categories = state
            .categories
            .iter()
            .map(|&category| CategoryCard {
                category,
                highlighted: session.is_highlighted(&category.name),
            })
            .collect();

        let vehicles = if shows_vehicle_section(state) {
            state
                .vehicles
                .iter()
                .map(|&vehicle| VehicleCard {
                    vehicle,
                    brand_highlighted: session.is_highlighted(&vehicle.brand),
                    model_highlighted: session.is_highlighted(&vehicle.model),
                    price_label: format_price(vehicle.price, &display.currency_symbol),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            label: results_label(state),
            categories,
            vehicles,
            price_unit: display.price_unit.clone(),
            no_results: no_results_message(state, session.query()),
        }
    }
}
