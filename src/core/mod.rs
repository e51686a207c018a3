//! Core search logic, independent of any frontend.
//!
//! - [`search`] - query normalization, filtering and highlighting
//! - [`session`] - per-screen search state held by the presentation layer

pub mod search;
pub mod session;

pub use search::{FilteredState, SearchEngine, SearchQuery, SearchState, Searchable};
pub use session::SearchSession;
