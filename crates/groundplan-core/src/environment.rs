//! Host environment capabilities.
//!
//! The scanned-environment raycast and the world-lock query are supplied
//! by the host runtime. Both arrive through `EnvironmentRes` as injected
//! trait objects, never through ambient globals, so any driver (host
//! adapter, test fixture) can stand in for the real tracking stack.

use std::sync::Arc;

use bevy::prelude::*;

/// Nearest surface hit of an environment raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Hit point in world space.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Dir3,
}

/// Ray query against the host's live reconstruction of the physical
/// surroundings.
pub trait EnvironmentRaycaster: Send + Sync + 'static {
    /// Returns the nearest surface hit, or `None` when the ray leaves the
    /// scanned volume without touching anything.
    fn raycast(&self, ray: Ray3d) -> Option<RaycastHit>;
}

/// World-lock state of the host's environment-tracking subsystem.
pub trait EnvironmentTracker: Send + Sync + 'static {
    /// True while a persistent shared spatial frame is active, making
    /// per-object anchors redundant.
    fn is_world_lock_active(&self) -> bool;
}

/// Null environment: every ray misses. Used when no tracking subsystem
/// is wired up at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnvironment;

impl EnvironmentRaycaster for NoEnvironment {
    fn raycast(&self, _ray: Ray3d) -> Option<RaycastHit> {
        None
    }
}

/// Intersects rays with the horizontal plane `y = height`.
///
/// Handy as a stand-in floor for headless drivers and tests.
#[derive(Debug, Clone, Copy)]
pub struct PlaneRaycaster {
    /// World-space height of the plane.
    pub height: f32,
}

impl PlaneRaycaster {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl EnvironmentRaycaster for PlaneRaycaster {
    fn raycast(&self, ray: Ray3d) -> Option<RaycastHit> {
        let slope = ray.direction.y;
        if slope.abs() < 1e-6 {
            return None;
        }
        let t = (self.height - ray.origin.y) / slope;
        if t < 0.0 {
            return None;
        }
        Some(RaycastHit {
            point: ray.origin + ray.direction * t,
            normal: Dir3::Y,
        })
    }
}

/// Injected environment capabilities.
///
/// A missing tracker is a normal configuration, not an error: the world
/// lock is then reported inactive and placed objects get their own
/// anchors.
#[derive(Resource, Clone)]
pub struct EnvironmentRes {
    raycaster: Arc<dyn EnvironmentRaycaster>,
    tracker: Option<Arc<dyn EnvironmentTracker>>,
}

impl EnvironmentRes {
    pub fn new(raycaster: Arc<dyn EnvironmentRaycaster>) -> Self {
        Self {
            raycaster,
            tracker: None,
        }
    }

    /// Attaches a world-lock tracker.
    pub fn with_tracker(mut self, tracker: Arc<dyn EnvironmentTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Queries the environment for the nearest surface along `ray`.
    pub fn raycast(&self, ray: Ray3d) -> Option<RaycastHit> {
        self.raycaster.raycast(ray)
    }

    /// True only when a tracker is present and reports an active world
    /// lock; an absent subsystem counts as inactive.
    pub fn world_lock_active(&self) -> bool {
        self.tracker
            .as_ref()
            .is_some_and(|tracker| tracker.is_world_lock_active())
    }
}

impl Default for EnvironmentRes {
    fn default() -> Self {
        Self::new(Arc::new(NoEnvironment))
    }
}
