//! Real Lagos locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use eko_navigation::{Coordinate, Polyline, Route};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

// ============================================================================
// Landmarks
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("National Theatre", 6.4766, 3.3677),
    Location::new("Tafawa Balewa Square", 6.4489, 3.3986),
    Location::new("Freedom Park", 6.4501, 3.3932),
    Location::new("Kalakuta Museum", 6.6005, 3.3497),
    Location::new("Nike Art Gallery", 6.4425, 3.4818),
    Location::new("Lekki Conservation Centre", 6.4420, 3.5351),
    Location::new("Cathedral Church of Christ", 6.4531, 3.3917),
    Location::new("Badagry Heritage Museum", 6.4156, 2.8862),
];

pub const LAGOS_CENTER: Location = Location::new("Lagos", 6.5244, 3.3792);
pub const IKEJA: Location = Location::new("Ikeja City Mall", 6.6139, 3.3586);
pub const VICTORIA_ISLAND: Location = Location::new("Eko Hotel", 6.4262, 3.4297);

// ============================================================================
// Route builders
// ============================================================================

/// Evenly spaced polyline between two locations with `points` vertices.
pub fn straight_polyline(from: Coordinate, to: Coordinate, points: usize) -> Polyline {
    let segments = (points.max(2) - 1) as f64;
    Polyline::new(
        (0..points)
            .map(|i| {
                let t = i as f64 / segments;
                Coordinate::new(
                    from.lat + (to.lat - from.lat) * t,
                    from.lon + (to.lon - from.lon) * t,
                )
            })
            .collect(),
    )
}

pub fn route(name: &str, polyline: Polyline, steps: &[&str]) -> Route {
    Route {
        name: name.to_string(),
        summary: format!("{name} through the mainland"),
        distance: "18.2 km".to_string(),
        duration: "35 mins".to_string(),
        polyline,
        steps: steps.iter().map(|step| step.to_string()).collect(),
    }
}

pub fn ikeja_to_vi(name: &str, points: usize, steps: &[&str]) -> Route {
    route(
        name,
        straight_polyline(IKEJA.coords(), VICTORIA_ISLAND.coords(), points),
        steps,
    )
}
