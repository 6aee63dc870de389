//! Shared state store for core-host communication.
//!
//! The host render/UI thread polls this store instead of touching the
//! ECS world. A version counter makes change detection cheap: re-read
//! the polyline only when the version moved.

use std::sync::Arc;

use bevy::prelude::Resource;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Summary of one placed instance, for host-side listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSummary {
    /// Template the instance came from.
    pub template: String,
    /// World-space position of the instance.
    pub position: [f32; 3],
    /// Whether a spatial anchor was attached.
    pub anchored: bool,
}

/// Store for the live stroke polyline, confirm notifications, and
/// placement summaries.
#[derive(Resource, Clone, Default)]
pub struct StrokeStore {
    inner: Arc<RwLock<StrokeStoreInner>>,
}

#[derive(Default)]
struct StrokeStoreInner {
    polyline: Vec<[f32; 3]>,
    version: u64,
    confirms: u64,
    placed: Vec<PlacedSummary>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the renderable polyline, in draw order.
    pub fn polyline(&self) -> Vec<[f32; 3]> {
        self.inner.read().polyline.clone()
    }

    /// Version for change detection; bumped whenever the polyline
    /// actually changes.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Total number of confirmed drawings so far.
    pub fn confirm_count(&self) -> u64 {
        self.inner.read().confirms
    }

    /// Summaries of every instance placed so far.
    pub fn placed(&self) -> Vec<PlacedSummary> {
        self.inner.read().placed.clone()
    }

    /// Replace the polyline snapshot (called by the sync systems).
    pub fn set_polyline(&self, points: Vec<[f32; 3]>) {
        let mut inner = self.inner.write();
        if inner.polyline != points {
            inner.polyline = points;
            inner.version += 1;
        }
    }

    /// Record one confirmed drawing.
    pub fn push_confirm(&self) {
        self.inner.write().confirms += 1;
    }

    /// Record one placed instance.
    pub fn push_placed(&self, summary: PlacedSummary) {
        self.inner.write().placed.push(summary);
    }
}
