//! Points of interest returned by the discovery providers.

use serde::{Deserialize, Serialize};

use crate::polyline::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalLandmark {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
}

impl CulturalLandmark {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl Place {
    pub fn new(name: &str, category: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}

/// Shown when the explore catalog cannot be reached, so the screen still
/// has something to render. Never cached.
pub fn fallback_places() -> Vec<Place> {
    vec![
        Place::new(
            "Error fetching data",
            "Error",
            "Could not connect to the discovery service. Please check your API key and network connection.",
        ),
        Place::new(
            "Lekki Conservation Centre",
            "Nature",
            "A serene nature reserve known for its long canopy walkway and diverse wildlife.",
        ),
        Place::new(
            "Nike Art Gallery",
            "Culture",
            "A stunning art gallery showcasing contemporary and traditional Nigerian art.",
        ),
    ]
}
