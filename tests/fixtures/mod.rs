//! Test fixtures for eko-navigation.
//!
//! Provides realistic test data and scripted collaborators:
//! - Real Lagos locations (from OpenStreetMap)
//! - Route builders
//! - Counting providers and a recording position watcher

#![allow(dead_code)]

pub mod lagos_locations;
pub mod mocks;

pub use lagos_locations::*;
pub use mocks::*;
