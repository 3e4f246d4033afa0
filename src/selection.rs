//! Candidate-route selection for one start/destination query.
//!
//! The controller keeps the candidate list and the highlighted route
//! consistent with each other, and tells the map what to do after every
//! change. Fetches are tagged with a [`RequestToken`] so that a slow,
//! superseded response cannot overwrite a newer one.

use crate::polyline::{BoundingBox, Coordinate};
use crate::route::Route;

/// Generation tag for one route fetch. Only the most recently issued token
/// may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Viewport/overlay change the map should perform.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Fit the viewport to the selected route.
    FitBounds(BoundingBox),
    /// Remove route overlays, optionally re-centering on the user.
    ClearRoutes { recenter: Option<Coordinate> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetRoutesOutcome {
    Applied(Option<MapCommand>),
    /// A newer request was issued since this token; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
pub struct RouteSelectionController {
    routes: Vec<Route>,
    selected: Option<usize>,
    generation: u64,
    last_known_location: Option<Coordinate>,
}

impl RouteSelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn selected(&self) -> Option<&Route> {
        self.selected.map(|index| &self.routes[index])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, route: &Route) -> bool {
        self.selected() == Some(route)
    }

    pub fn last_known_location(&self) -> Option<Coordinate> {
        self.last_known_location
    }

    pub fn set_last_known_location(&mut self, location: Coordinate) {
        self.last_known_location = Some(location);
    }

    /// Start a fetch. Any token issued earlier becomes stale.
    pub fn begin_request(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Apply the result of the fetch identified by `token`, unless a newer
    /// fetch has been started or the routes were replaced since.
    pub fn set_routes_for(&mut self, token: RequestToken, routes: Vec<Route>) -> SetRoutesOutcome {
        if !self.is_current(token) {
            tracing::debug!(
                token = token.0,
                current = self.generation,
                "discarding stale route response"
            );
            return SetRoutesOutcome::Stale;
        }
        SetRoutesOutcome::Applied(self.replace(routes))
    }

    /// Replace the candidates and select the first one.
    ///
    /// Counts as the newest result: fetches still in flight become stale.
    pub fn set_routes(&mut self, routes: Vec<Route>) -> Option<MapCommand> {
        self.generation += 1;
        self.replace(routes)
    }

    /// Highlight `route`. Silently ignored unless it is one of the current
    /// candidates.
    pub fn select(&mut self, route: &Route) -> Option<MapCommand> {
        let index = self.routes.iter().position(|candidate| candidate == route)?;
        if self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        self.fit_selected()
    }

    /// Drop all candidates. In-flight fetches become stale.
    pub fn clear(&mut self) -> MapCommand {
        self.generation += 1;
        self.routes.clear();
        self.selected = None;
        MapCommand::ClearRoutes {
            recenter: self.last_known_location,
        }
    }

    fn replace(&mut self, routes: Vec<Route>) -> Option<MapCommand> {
        self.routes = routes;
        if self.routes.is_empty() {
            self.selected = None;
            return Some(MapCommand::ClearRoutes {
                recenter: self.last_known_location,
            });
        }
        self.selected = Some(0);
        self.fit_selected()
    }

    fn fit_selected(&self) -> Option<MapCommand> {
        self.selected()
            .and_then(|route| route.polyline.bounds())
            .map(MapCommand::FitBounds)
    }
}
