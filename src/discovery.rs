//! Cached, fallback-safe access to the discovery providers.
//!
//! Every lookup here goes through the session's [`ProviderCache`] first and
//! never fails: provider errors are logged and replaced by an empty or
//! placeholder result, which is not cached so the next call retries.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::cache::{CacheKey, ProviderCache};
use crate::places::{CulturalLandmark, Place, fallback_places};
use crate::polyline::{BoundingBox, Coordinate};
use crate::traits::{Geocoder, Language, LandmarkProvider, PlaceCatalog, SuggestionProvider};

/// Queries shorter than this never reach the suggestion provider.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 3;

pub const LANDMARK_DETAILS_UNAVAILABLE: &str =
    "Sorry, more details about this landmark are unavailable right now. Please try again later.";

pub struct Discovery<'a> {
    cache: &'a mut ProviderCache,
    language: Language,
}

impl<'a> Discovery<'a> {
    pub fn new(cache: &'a mut ProviderCache, language: Language) -> Self {
        Self { cache, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn search_suggestions<P>(&mut self, provider: &P, query: &str) -> Vec<String>
    where
        P: SuggestionProvider + ?Sized,
    {
        if query.chars().count() < MIN_SUGGESTION_QUERY_CHARS {
            return Vec::new();
        }
        let language = self.language;
        self.cache
            .suggestions
            .get_or_try_insert_with(CacheKey::suggestions(query, language), || {
                provider.search_suggestions(query, language)
            })
            .unwrap_or_else(|err| {
                tracing::warn!(%query, error = %err, "search suggestions unavailable");
                Vec::new()
            })
    }

    /// `None` means the place could not be resolved; the caller asks for
    /// manual entry.
    pub fn geocode<G>(&mut self, geocoder: &G, place: &str) -> Option<Coordinate>
    where
        G: Geocoder + ?Sized,
    {
        let language = self.language;
        self.cache
            .geocode
            .get_or_try_insert_with(CacheKey::geocode(place, language), || {
                geocoder.geocode(place, language)
            })
            .map_err(|err| tracing::warn!(%place, error = %err, "geocoding failed"))
            .ok()
    }

    pub fn cultural_landmarks<P>(&mut self, provider: &P, bounds: &BoundingBox) -> Vec<CulturalLandmark>
    where
        P: LandmarkProvider + ?Sized,
    {
        let language = self.language;
        self.cache
            .landmarks
            .get_or_try_insert_with(CacheKey::landmarks(bounds, language), || {
                provider.cultural_landmarks(bounds, language)
            })
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "cultural landmarks unavailable");
                Vec::new()
            })
    }

    pub fn landmark_details<P>(&mut self, provider: &P, name: &str) -> String
    where
        P: LandmarkProvider + ?Sized,
    {
        let language = self.language;
        self.cache
            .landmark_details
            .get_or_try_insert_with(CacheKey::landmark_details(name, language), || {
                provider.landmark_details(name, language)
            })
            .unwrap_or_else(|err| {
                tracing::warn!(landmark = %name, error = %err, "landmark details unavailable");
                LANDMARK_DETAILS_UNAVAILABLE.to_string()
            })
    }

    pub fn explore_places<C>(&mut self, catalog: &C, category: &str) -> Vec<Place>
    where
        C: PlaceCatalog + ?Sized,
    {
        let language = self.language;
        self.cache
            .explore
            .get_or_try_insert_with(CacheKey::explore(category, language), || {
                catalog.places_by_category(category, language)
            })
            .unwrap_or_else(|err| {
                tracing::warn!(%category, error = %err, "explore catalog unavailable");
                fallback_places()
            })
    }

    /// Warm the details cache for a batch of landmarks so their detail
    /// sheets open without a round trip.
    ///
    /// Fetches run in parallel; results are written to the cache on the
    /// calling thread. Returns how many new entries were stored.
    pub fn prefetch_landmark_details<P>(&mut self, provider: &P, landmarks: &[CulturalLandmark]) -> usize
    where
        P: LandmarkProvider + ?Sized,
    {
        let language = self.language;
        let mut seen = HashSet::new();
        let pending: Vec<&str> = landmarks
            .iter()
            .map(|landmark| landmark.name.as_str())
            .filter(|name| seen.insert(*name))
            .filter(|name| {
                !self
                    .cache
                    .landmark_details
                    .contains(&CacheKey::landmark_details(name, language))
            })
            .collect();

        let fetched: Vec<(&str, Result<String, _>)> = pending
            .par_iter()
            .map(|name| (*name, provider.landmark_details(name, language)))
            .collect();

        let mut stored = 0;
        for (name, result) in fetched {
            match result {
                Ok(details) => {
                    self.cache
                        .landmark_details
                        .set(CacheKey::landmark_details(name, language), details);
                    stored += 1;
                }
                Err(err) => tracing::debug!(landmark = %name, error = %err, "prefetch skipped"),
            }
        }
        tracing::debug!(requested = pending.len(), stored, "prefetched landmark details");
        stored
    }
}
