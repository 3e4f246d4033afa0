//! "Share route" payloads.

use serde::Serialize;

use crate::error::ShareError;
use crate::route::Route;
use crate::traits::ShareTarget;

pub const SHARE_TITLE: &str = "EKO Navigation: Route Suggestion";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_route(route: &Route, url: &str) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!(
                "Check out this route I found with EKO Navigation:\n\n*{}*\n- Summary: {}\n- Distance: {}\n- Duration: {}",
                route.name, route.summary, route.distance, route.duration
            ),
            url: url.to_string(),
        }
    }
}

/// Whether to offer the share affordance at all.
pub fn can_share(target: Option<&dyn ShareTarget>) -> bool {
    target.is_some_and(|target| target.is_available())
}

/// Share a route if the device supports it.
///
/// A missing or unavailable share target is not an error for the caller;
/// it simply returns `Ok(false)`. A failed or cancelled share is logged and
/// reported as `Ok(false)` too.
pub fn share_route(target: Option<&dyn ShareTarget>, route: &Route, url: &str) -> Result<bool, ShareError> {
    let Some(target) = target.filter(|target| target.is_available()) else {
        return Ok(false);
    };
    match target.share(&SharePayload::for_route(route, url)) {
        Ok(()) => Ok(true),
        Err(ShareError::Failed(reason)) => {
            tracing::info!(route = %route.name, %reason, "route share did not complete");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
