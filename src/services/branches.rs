//! Branch locator data: rental locations, their stock and contact links.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A rental branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    /// Display distance, e.g. "2.5 km"
    pub distance: String,
    pub available_cars: u32,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Stock level of a branch, bucketed from its available car count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// More than 30 cars
    High,
    /// 16 to 30 cars
    Medium,
    Low,
}

impl Availability {
    pub fn from_count(count: u32) -> Self {
        if count > 30 {
            Availability::High
        } else if count > 15 {
            Availability::Medium
        } else {
            Availability::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::High => "high",
            Availability::Medium => "medium",
            Availability::Low => "low",
        }
    }
}

impl Branch {
    pub fn availability(&self) -> Availability {
        Availability::from_count(self.available_cars)
    }

    /// Map link centered on the branch
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.coordinates.lat, self.coordinates.lng
        )
    }

    /// Dial link; whitespace is not allowed inside a tel URI
    pub fn call_url(&self) -> String {
        let number: String = self.phone.split_whitespace().collect();
        format!("tel:{}", number)
    }
}

/// Cars available across all `branches`
pub fn total_available(branches: &[Branch]) -> u32 {
    branches.iter().map(|branch| branch.available_cars).sum()
}

#[allow(clippy::too_many_arguments)]
fn branch(
    id: u32,
    name: &str,
    address: &str,
    phone: &str,
    hours: &str,
    distance: &str,
    available_cars: u32,
    (lat, lng): (f64, f64),
    features: &[&str],
) -> Branch {
    Branch {
        id,
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        hours: hours.to_string(),
        distance: distance.to_string(),
        available_cars,
        coordinates: Coordinates { lat, lng },
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

static SAMPLE_BRANCHES: Lazy<Vec<Branch>> = Lazy::new(|| {
    vec![
        branch(
            1,
            "Downtown Lagos",
            "123 Victoria Island, Lagos State",
            "+234 901 234 5678",
            "Mon-Sun: 8:00 AM - 10:00 PM",
            "2.5 km",
            28,
            (6.4281, 3.4219),
            &["24/7 Support", "Car Wash", "Premium Cars"],
        ),
        branch(
            2,
            "Airport Branch",
            "Murtala Muhammed Airport, Ikeja",
            "+234 901 234 5679",
            "24/7 Service",
            "15.2 km",
            45,
            (6.5774, 3.3211),
            &["Airport Pickup", "24/7 Service", "Express Rental"],
        ),
        branch(
            3,
            "Ikeja City Mall",
            "Obafemi Awolowo Way, Ikeja",
            "+234 901 234 5680",
            "Mon-Sun: 9:00 AM - 9:00 PM",
            "8.7 km",
            22,
            (6.6018, 3.3515),
            &["Mall Parking", "Quick Pickup", "Family Cars"],
        ),
        branch(
            4,
            "Lekki Phase 1",
            "Admiralty Way, Lekki Phase 1",
            "+234 901 234 5681",
            "Mon-Sun: 7:00 AM - 11:00 PM",
            "12.1 km",
            35,
            (6.4328, 3.4536),
            &["Luxury Cars", "Valet Service", "Premium Location"],
        ),
    ]
});

/// The built-in branch list
pub fn sample() -> &'static [Branch] {
    &SAMPLE_BRANCHES
}
