//! Fetching candidate routes for a start/destination pair.

use crate::polyline::Coordinate;
use crate::route::{Route, validate_candidates};
use crate::traits::{Language, RouteProvider};

/// Ask the provider for routes and make the answer safe to present.
///
/// Never fails: a provider error, an empty answer or any route without
/// usable geometry all collapse to the single straight-line fallback.
pub fn plan_routes<P>(provider: &P, start: Coordinate, end: Coordinate, language: Language) -> Vec<Route>
where
    P: RouteProvider + ?Sized,
{
    tracing::info!(
        start_lat = start.lat,
        start_lon = start.lon,
        end_lat = end.lat,
        end_lon = end.lon,
        %language,
        "planning routes"
    );
    match provider.fetch_routes(start, end, language) {
        Ok(routes) => {
            let routes = validate_candidates(routes, start, end);
            tracing::info!(candidates = routes.len(), "routes planned");
            routes
        }
        Err(err) => {
            tracing::warn!(error = %err, "route provider failed, using straight-line fallback");
            vec![Route::fallback(start, end)]
        }
    }
}
