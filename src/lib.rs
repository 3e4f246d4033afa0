//! EKO Navigation core
//!
//! Route-option caching and selection, plus the turn-by-turn navigation
//! engine, for a map-based city-navigation app. AI backends, geolocation
//! and the share sheet are consumed through the traits in [`traits`].

pub mod cache;
pub mod config;
pub mod discovery;
pub mod error;
pub mod gemini;
pub mod haversine;
pub mod places;
pub mod planner;
pub mod polyline;
pub mod route;
pub mod selection;
pub mod session;
pub mod share;
pub mod traits;

pub use polyline::{BoundingBox, Coordinate, Polyline};
pub use route::Route;
pub use traits::Language;
