//! Contracts for the collaborators the navigation core consumes.
//!
//! The core never talks to an AI backend, a GPS chip or a share sheet
//! directly. Hosts implement these traits (see [`crate::gemini`] for the
//! HTTP adapter) and hand them in.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LocationError, ProviderError, ShareError};
use crate::places::{CulturalLandmark, Place};
use crate::polyline::{BoundingBox, Coordinate};
use crate::route::Route;
use crate::share::SharePayload;

/// Interface language. Providers answer in it and cache keys include it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Yoruba,
    Hausa,
    Igbo,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Yoruba => "Yoruba",
            Language::Hausa => "Hausa",
            Language::Igbo => "Igbo",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces candidate routes between two points.
///
/// Implementations should return one or two routes. Any error, or any route
/// without real geometry, is replaced by the straight-line fallback before
/// it reaches route selection.
pub trait RouteProvider: Send + Sync {
    fn fetch_routes(
        &self,
        start: Coordinate,
        end: Coordinate,
        language: Language,
    ) -> Result<Vec<Route>, ProviderError>;
}

/// Cultural landmarks inside a viewport, plus long-form details per landmark.
pub trait LandmarkProvider: Send + Sync {
    fn cultural_landmarks(
        &self,
        bounds: &BoundingBox,
        language: Language,
    ) -> Result<Vec<CulturalLandmark>, ProviderError>;

    fn landmark_details(&self, name: &str, language: Language) -> Result<String, ProviderError>;
}

/// Autocomplete for the search box.
pub trait SuggestionProvider: Send + Sync {
    fn search_suggestions(&self, query: &str, language: Language) -> Result<Vec<String>, ProviderError>;
}

/// Resolves a place name to coordinates.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, place: &str, language: Language) -> Result<Coordinate, ProviderError>;
}

/// Places to explore for a category such as "Food" or "Culture".
pub trait PlaceCatalog: Send + Sync {
    fn places_by_category(&self, category: &str, language: Language) -> Result<Vec<Place>, ProviderError>;
}

/// Opaque identifier of a live position subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchHandle(pub u64);

/// Requested behaviour of a position subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Oldest cached fix the platform may hand back. Zero means always fresh.
    pub maximum_age: Duration,
    /// How long to wait for a fix before reporting a timeout.
    pub timeout: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            maximum_age: Duration::ZERO,
            timeout: Duration::from_secs(5),
        }
    }
}

impl WatchOptions {
    /// Settings for tracking the start point while planning a route.
    pub fn route_planner() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            ..Self::default()
        }
    }
}

/// A device position stream.
///
/// Fixes and errors are pushed back to the subscriber by the host, tagged
/// with the handle returned here (see
/// [`NavigationSession::on_position`](crate::session::NavigationSession::on_position)).
pub trait LocationWatcher {
    fn watch_position(&mut self, options: &WatchOptions) -> Result<WatchHandle, LocationError>;

    fn clear_watch(&mut self, handle: WatchHandle);
}

impl<W: LocationWatcher + ?Sized> LocationWatcher for &mut W {
    fn watch_position(&mut self, options: &WatchOptions) -> Result<WatchHandle, LocationError> {
        (**self).watch_position(options)
    }

    fn clear_watch(&mut self, handle: WatchHandle) {
        (**self).clear_watch(handle)
    }
}

/// Optional platform share sheet.
pub trait ShareTarget {
    fn is_available(&self) -> bool;

    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}
