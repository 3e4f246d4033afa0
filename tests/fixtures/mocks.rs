//! Scripted collaborators for integration tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use eko_navigation::error::{LocationError, ProviderError};
use eko_navigation::places::{CulturalLandmark, Place};
use eko_navigation::traits::{
    Geocoder, Language, LandmarkProvider, LocationWatcher, PlaceCatalog, RouteProvider,
    SuggestionProvider, WatchHandle, WatchOptions,
};
use eko_navigation::{BoundingBox, Coordinate, Route};

// ============================================================================
// Providers
// ============================================================================

pub enum RouteScript {
    Routes(Vec<Route>),
    Fail(&'static str),
}

pub struct ScriptedRoutes {
    script: RouteScript,
    pub calls: AtomicUsize,
    pub last_language: Mutex<Option<Language>>,
}

impl ScriptedRoutes {
    pub fn new(script: RouteScript) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_language: Mutex::new(None),
        }
    }
}

impl RouteProvider for ScriptedRoutes {
    fn fetch_routes(
        &self,
        _start: Coordinate,
        _end: Coordinate,
        language: Language,
    ) -> Result<Vec<Route>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_language.lock().unwrap() = Some(language);
        match &self.script {
            RouteScript::Routes(routes) => Ok(routes.clone()),
            RouteScript::Fail(reason) => Err(ProviderError::Schema(reason.to_string())),
        }
    }
}

/// Counts every call and fails while `failing` is set.
#[derive(Default)]
pub struct CountingDiscovery {
    pub landmarks: Vec<CulturalLandmark>,
    pub failing: AtomicBool,
    pub suggestion_calls: AtomicUsize,
    pub geocode_calls: AtomicUsize,
    pub landmark_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub explore_calls: AtomicUsize,
}

impl CountingDiscovery {
    pub fn with_landmarks(landmarks: Vec<CulturalLandmark>) -> Self {
        Self {
            landmarks,
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn outcome<T>(&self, counter: &AtomicUsize, value: impl FnOnce() -> T) -> Result<T, ProviderError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(ProviderError::Empty)
        } else {
            Ok(value())
        }
    }
}

impl SuggestionProvider for CountingDiscovery {
    fn search_suggestions(&self, query: &str, _language: Language) -> Result<Vec<String>, ProviderError> {
        self.outcome(&self.suggestion_calls, || {
            vec![format!("{query} Market"), format!("{query} Bus Stop")]
        })
    }
}

impl Geocoder for CountingDiscovery {
    fn geocode(&self, _place: &str, _language: Language) -> Result<Coordinate, ProviderError> {
        self.outcome(&self.geocode_calls, || Coordinate::new(6.5244, 3.3792))
    }
}

impl LandmarkProvider for CountingDiscovery {
    fn cultural_landmarks(
        &self,
        _bounds: &BoundingBox,
        _language: Language,
    ) -> Result<Vec<CulturalLandmark>, ProviderError> {
        self.outcome(&self.landmark_calls, || self.landmarks.clone())
    }

    fn landmark_details(&self, name: &str, language: Language) -> Result<String, ProviderError> {
        self.outcome(&self.detail_calls, || format!("{name} ({language})"))
    }
}

impl PlaceCatalog for CountingDiscovery {
    fn places_by_category(&self, category: &str, _language: Language) -> Result<Vec<Place>, ProviderError> {
        self.outcome(&self.explore_calls, || {
            vec![Place::new("Terra Kulture", category, "Arts centre and restaurant.")]
        })
    }
}

pub fn landmark(name: &str, lat: f64, lon: f64) -> CulturalLandmark {
    CulturalLandmark {
        name: name.to_string(),
        description: format!("{name} description"),
        lat,
        lon,
    }
}

// ============================================================================
// Position watcher
// ============================================================================

#[derive(Debug, Default)]
pub struct WatchLog {
    pub issued: Vec<WatchHandle>,
    pub cleared: Vec<WatchHandle>,
    pub options: Vec<WatchOptions>,
}

impl WatchLog {
    pub fn active(&self) -> Vec<WatchHandle> {
        self.issued
            .iter()
            .filter(|handle| !self.cleared.contains(handle))
            .copied()
            .collect()
    }
}

/// Hands out sequential handles and records every call in a shared log
/// that outlives the watcher.
#[derive(Default)]
pub struct RecordingWatcher {
    pub log: Rc<RefCell<WatchLog>>,
    pub deny: Option<LocationError>,
}

impl RecordingWatcher {
    pub fn new() -> (Self, Rc<RefCell<WatchLog>>) {
        let watcher = Self::default();
        let log = Rc::clone(&watcher.log);
        (watcher, log)
    }

    pub fn denying(error: LocationError) -> (Self, Rc<RefCell<WatchLog>>) {
        let (mut watcher, log) = Self::new();
        watcher.deny = Some(error);
        (watcher, log)
    }
}

impl LocationWatcher for RecordingWatcher {
    fn watch_position(&mut self, options: &WatchOptions) -> Result<WatchHandle, LocationError> {
        if let Some(err) = &self.deny {
            return Err(err.clone());
        }
        let mut log = self.log.borrow_mut();
        let handle = WatchHandle(log.issued.len() as u64 + 1);
        log.issued.push(handle);
        log.options.push(options.clone());
        Ok(handle)
    }

    fn clear_watch(&mut self, handle: WatchHandle) {
        self.log.borrow_mut().cleared.push(handle);
    }
}
