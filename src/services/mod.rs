pub mod branches;
pub mod catalog;
pub mod format;
pub mod listing;

pub use branches::{Availability, Branch};
pub use catalog::{Catalog, Category, Vehicle};
pub use listing::{CategoryCard, Listing, VehicleCard};
