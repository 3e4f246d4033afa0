//! Memoisation of provider responses.
//!
//! Entries live for the whole app session: there is no TTL and no eviction,
//! so memory grows with the number of distinct queries. Only successful
//! provider responses are stored; fallbacks never are.

use std::collections::HashMap;

use crate::places::{CulturalLandmark, Place};
use crate::polyline::{BoundingBox, Coordinate};
use crate::traits::Language;

/// Key builders. The formats are shared with other clients of the same
/// cache layout and must not change.
pub struct CacheKey;

impl CacheKey {
    pub fn suggestions(query: &str, language: Language) -> String {
        format!("{}:{}", query, language)
    }

    /// Viewport bounds are rounded to one decimal (about 11 km) so that
    /// small pans of the map land in the same bucket.
    pub fn landmarks(bounds: &BoundingBox, language: Language) -> String {
        format!(
            "{}:{:.1}:{:.1}:{:.1}:{:.1}",
            language,
            round_tenth(bounds.north_east.lat),
            round_tenth(bounds.north_east.lon),
            round_tenth(bounds.south_west.lat),
            round_tenth(bounds.south_west.lon)
        )
    }

    pub fn landmark_details(name: &str, language: Language) -> String {
        format!("{}:{}", name, language)
    }

    pub fn explore(category: &str, language: Language) -> String {
        format!("{}:{}", category, language)
    }

    pub fn geocode(place: &str, language: Language) -> String {
        format!("{}:{}", place, language)
    }
}

/// Exact halfway values round away from zero; `{:.1}` alone would round
/// them to even. A value sits exactly halfway between tenths only when it is
/// an odd multiple of 0.25, where `v * 10.0` is also exact.
fn round_tenth(v: f64) -> f64 {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (v * 10.0).round() / 10.0
    } else {
        v
    }
}

/// String-keyed response cache for one kind of provider result.
#[derive(Debug, Clone)]
pub struct ResponseCache<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for ResponseCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> ResponseCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: String, value: V) {
        self.entries.insert(key, value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> ResponseCache<V> {
    /// Return the cached value for `key`, or call `fetch` and remember its
    /// result if it succeeded.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: String,
        fetch: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.entries.get(&key) {
            tracing::debug!(%key, "cache hit");
            return Ok(value.clone());
        }
        tracing::debug!(%key, "cache miss");
        let value = fetch()?;
        self.entries.insert(key, value.clone());
        Ok(value)
    }
}

/// Every provider cache the app keeps for one session.
///
/// Owned by the composition root and lent to [`crate::discovery::Discovery`].
#[derive(Debug, Clone, Default)]
pub struct ProviderCache {
    pub suggestions: ResponseCache<Vec<String>>,
    pub geocode: ResponseCache<Coordinate>,
    pub landmarks: ResponseCache<Vec<CulturalLandmark>>,
    pub landmark_details: ResponseCache<String>,
    pub explore: ResponseCache<Vec<Place>>,
}

impl ProviderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_entries(&self) -> usize {
        self.suggestions.len()
            + self.geocode.len()
            + self.landmarks.len()
            + self.landmark_details.len()
            + self.explore.len()
    }
}
