//! ECS Components for placed objects.
//!
//! The entity spawned by the placement controller is the handle the host
//! scene works with; these components describe what it is and how it is
//! held in physical space.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// An instance placed from a template.
///
/// The host adapter resolves `template` to whatever asset it renders;
/// the core only records which template the instance came from.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Name of the template this instance was created from.
    pub template: String,
}

impl PlacedObject {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

/// Marker for instances pinned to physical space.
///
/// Present only when no world lock was active at placement time; the
/// host adapter backs it with whatever anchoring primitive the tracking
/// runtime provides.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SpatialAnchor;
