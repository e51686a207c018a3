//! rentcar - vehicle catalog search for a car-rental browsing app.
//!
//! The listing screen of the app shows vehicle categories and rentable
//! vehicles, and narrows both as the user types into the search box. This
//! crate holds that search logic, free of any UI framework.
//!
//! # Architecture
//!
//! - [`core`] - query normalization, filtering, highlighting and the
//!   per-screen search session
//! - [`services`] - the static catalog, branch list, listing view model and
//!   formatting
//! - [`config`] - configuration loading and saving
//! - [`cli`] - terminal frontend used by the `rentcar` binary
//!
//! # Example
//!
//! ```
//! use rentcar::{Catalog, SearchEngine};
//!
//! let engine = SearchEngine::new(Catalog::sample());
//! let results = engine.set_query("i2");
//!
//! assert!(results.active);
//! assert_eq!(results.vehicles[0].model, "i20");
//! assert!(SearchEngine::is_highlighted("Hyundai", "hyun"));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod services;

mod error;

pub use crate::config::Config;
pub use crate::core::search::{FilteredState, SearchEngine, SearchQuery, SearchState};
pub use crate::core::session::SearchSession;
pub use crate::error::{RentcarError, RentcarResult};
pub use crate::services::catalog::{Catalog, Category, Vehicle};
