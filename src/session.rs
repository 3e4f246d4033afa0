//! Turn-by-turn navigation over a selected route.
//!
//! A [`NavigationSession`] walks the route's instruction list. The user can
//! step forwards and backwards by hand; while a position subscription is
//! live, the session also advances on its own whenever a fix comes within
//! the arrival radius of the current step's target point (see
//! [`Polyline::step_target`](crate::polyline::Polyline::step_target)).
//!
//! Losing the position stream never ends navigation. The session drops back
//! to manual stepping and exposes the error so the UI can warn the user.

use crate::config::NavigationConfig;
use crate::error::{LocationError, SessionError};
use crate::haversine::haversine_m;
use crate::polyline::Coordinate;
use crate::route::Route;
use crate::traits::{LocationWatcher, WatchHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress(usize),
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextInstruction {
    Step(String),
    Arrived,
}

/// Icon hint derived from an instruction's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    Left,
    Right,
    Straight,
}

impl Maneuver {
    pub fn from_instruction(instruction: &str) -> Self {
        let lower = instruction.to_lowercase();
        if lower.contains("left") {
            Maneuver::Left
        } else if lower.contains("right") {
            Maneuver::Right
        } else {
            Maneuver::Straight
        }
    }
}

/// What the navigation panel shows after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepUpdate {
    pub step_index: usize,
    pub instruction: String,
    pub next: NextInstruction,
    /// Set only on the transition that first reaches the final step.
    pub arrived: bool,
}

impl StepUpdate {
    pub fn maneuver(&self) -> Maneuver {
        Maneuver::from_instruction(&self.instruction)
    }
}

pub struct NavigationSession<W: LocationWatcher> {
    route: Route,
    watcher: W,
    config: NavigationConfig,
    state: SessionState,
    watch: Option<WatchHandle>,
    location_error: Option<LocationError>,
    // Auto-advance already fired for the current step.
    proximity_latched: bool,
    arrival_signalled: bool,
}

impl<W: LocationWatcher> NavigationSession<W> {
    pub fn new(route: Route, watcher: W, config: NavigationConfig) -> Self {
        Self {
            route,
            watcher,
            config,
            state: SessionState::NotStarted,
            watch: None,
            location_error: None,
            proximity_latched: false,
            arrival_signalled: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn watcher(&self) -> &W {
        &self.watcher
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::InProgress(_))
    }

    pub fn current_step(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress(index) => Some(index),
            _ => None,
        }
    }

    /// One-based step counter and total, as shown under the instruction.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current_step()
            .map(|index| (index + 1, self.route.steps.len()))
    }

    /// Whether position fixes can still move the session forward.
    pub fn is_auto_advancing(&self) -> bool {
        self.is_active() && self.watch.is_some()
    }

    /// Last position-stream failure, for the "location unavailable" warning.
    pub fn location_error(&self) -> Option<&LocationError> {
        self.location_error.as_ref()
    }

    /// Point whose proximity completes the current step.
    pub fn current_target(&self) -> Option<Coordinate> {
        let index = self.current_step()?;
        self.route.polyline.step_target(index, self.route.steps.len())
    }

    pub fn start(&mut self) -> Result<StepUpdate, SessionError> {
        match self.state {
            SessionState::NotStarted => {}
            SessionState::InProgress(_) => return Err(SessionError::AlreadyStarted),
            SessionState::Ended => return Err(SessionError::NotInProgress),
        }
        if self.route.steps.is_empty() {
            return Err(SessionError::EmptyRoute);
        }

        self.state = SessionState::InProgress(0);
        tracing::info!(
            route = %self.route.name,
            steps = self.route.steps.len(),
            points = self.route.polyline.len(),
            "navigation started"
        );

        if self.route.polyline.len() < 2 {
            tracing::warn!(route = %self.route.name, "route has no geometry, manual stepping only");
        } else {
            match self.watcher.watch_position(&self.config.watch) {
                Ok(handle) => self.watch = Some(handle),
                Err(err) => {
                    tracing::warn!(error = %err, "position stream unavailable, manual stepping only");
                    self.location_error = Some(err);
                }
            }
        }

        Ok(self.step_changed(0))
    }

    /// Move to the next instruction. `Ok(None)` when already on the last one.
    pub fn advance(&mut self) -> Result<Option<StepUpdate>, SessionError> {
        let index = self.require_in_progress()?;
        let last = self.route.steps.len() - 1;
        if index >= last {
            return Ok(None);
        }
        Ok(Some(self.step_changed(index + 1)))
    }

    /// Move to the previous instruction. `Ok(None)` when on the first one.
    pub fn retreat(&mut self) -> Result<Option<StepUpdate>, SessionError> {
        let index = self.require_in_progress()?;
        if index == 0 {
            return Ok(None);
        }
        Ok(Some(self.step_changed(index - 1)))
    }

    /// Stop navigating and release the position subscription. Calling it
    /// again is harmless.
    pub fn end(&mut self) {
        if self.state == SessionState::Ended {
            return;
        }
        self.release_watch();
        tracing::info!(
            route = %self.route.name,
            step = ?self.current_step(),
            "navigation ended"
        );
        self.state = SessionState::Ended;
    }

    /// Feed a position fix from the subscription identified by `handle`.
    ///
    /// Fixes from a released or foreign subscription are ignored. Returns
    /// the update when the fix triggered an auto-advance.
    pub fn on_position(&mut self, handle: WatchHandle, position: Coordinate) -> Option<StepUpdate> {
        if self.watch != Some(handle) || self.proximity_latched {
            return None;
        }
        let target = self.current_target()?;
        let distance = haversine_m(position, target);
        if distance >= self.config.arrival_radius_m {
            return None;
        }

        tracing::debug!(
            step = ?self.current_step(),
            distance_m = distance,
            "reached step target"
        );
        self.proximity_latched = true;
        // A no-op on the final step; the latch still holds until the step
        // changes by hand.
        self.advance().ok().flatten()
    }

    /// Report a position-stream failure. Auto-advance stops for the rest of
    /// the session; manual stepping keeps working.
    pub fn on_position_error(&mut self, handle: WatchHandle, error: LocationError) {
        if self.watch != Some(handle) {
            return;
        }
        tracing::warn!(error = %error, "position stream failed, falling back to manual stepping");
        self.release_watch();
        self.location_error = Some(error);
    }

    fn require_in_progress(&self) -> Result<usize, SessionError> {
        self.current_step().ok_or(SessionError::NotInProgress)
    }

    fn step_changed(&mut self, index: usize) -> StepUpdate {
        self.state = SessionState::InProgress(index);
        self.proximity_latched = false;

        let last = self.route.steps.len() - 1;
        let next = if index == last {
            NextInstruction::Arrived
        } else {
            NextInstruction::Step(self.route.steps[index + 1].clone())
        };
        let arrived = index == last && !self.arrival_signalled;
        if arrived {
            self.arrival_signalled = true;
            tracing::info!(route = %self.route.name, "arrived at final step");
        }

        StepUpdate {
            step_index: index,
            instruction: self.route.steps[index].clone(),
            next,
            arrived,
        }
    }

    fn release_watch(&mut self) {
        if let Some(handle) = self.watch.take() {
            self.watcher.clear_watch(handle);
        }
    }
}

impl<W: LocationWatcher> Drop for NavigationSession<W> {
    fn drop(&mut self) {
        self.release_watch();
    }
}
