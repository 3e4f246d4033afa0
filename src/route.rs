//! Candidate routes as supplied by a [`RouteProvider`](crate::traits::RouteProvider).

use serde::{Deserialize, Serialize};

use crate::haversine::haversine_m;
use crate::polyline::{Coordinate, Polyline};

pub const FALLBACK_ROUTE_NAME: &str = "Direct Route";
pub const FALLBACK_STEPS: [&str; 2] = ["Head towards your destination", "Proceed to destination"];

/// A provider-supplied path between two points.
///
/// `distance` and `duration` are display strings; nothing in the core
/// parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub summary: String,
    pub distance: String,
    pub duration: String,
    pub polyline: Polyline,
    pub steps: Vec<String>,
}

impl Route {
    /// Straight-line route used whenever the provider fails or returns
    /// unusable geometry.
    pub fn fallback(start: Coordinate, end: Coordinate) -> Self {
        let km = haversine_m(start, end) / 1000.0;
        Self {
            name: FALLBACK_ROUTE_NAME.to_string(),
            summary: "Straight-line route (routing service unavailable)".to_string(),
            distance: format!("{km:.1} km"),
            duration: "N/A".to_string(),
            polyline: Polyline::new(vec![start, end]),
            steps: FALLBACK_STEPS.iter().map(|step| step.to_string()).collect(),
        }
    }

    /// A route can be walked through only with real geometry and at least
    /// one instruction.
    pub fn is_navigable(&self) -> bool {
        self.polyline.len() >= 2 && !self.steps.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Gate a provider response before it reaches route selection.
///
/// One bad candidate poisons the whole set: an empty response or any
/// non-navigable route yields exactly the fallback route.
pub fn validate_candidates(routes: Vec<Route>, start: Coordinate, end: Coordinate) -> Vec<Route> {
    if routes.is_empty() {
        tracing::warn!("route provider returned no candidates, using straight-line fallback");
        return vec![Route::fallback(start, end)];
    }
    if let Some(bad) = routes.iter().find(|route| !route.is_navigable()) {
        tracing::warn!(
            route = %bad.name,
            points = bad.polyline.len(),
            steps = bad.steps.len(),
            "route provider returned an unusable route, using straight-line fallback"
        );
        return vec![Route::fallback(start, end)];
    }
    routes
}
