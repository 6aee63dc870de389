//! Groundplan Core Library
//!
//! Interaction core for mixed-reality building placement: capture a
//! freehand ground-plane drawing from a tracked controller, then place
//! an object instance where a downward probe from the drawing's center
//! meets the scanned environment, anchoring it in physical space when
//! no world lock is active.
//!
//! The crate is engine-glue-free: the host XR runtime talks to it
//! through injected capability traits (`environment`), driver-written
//! input resources, and the shared `StrokeStore` bridge.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod components;
pub mod environment;
pub mod events;
pub mod geometry;
pub mod plugin;
pub mod resources;
pub mod state_store;
pub mod systems;

#[cfg(test)]
mod test_utils;

pub use components::{PlacedObject, SpatialAnchor};
pub use environment::{
    EnvironmentRaycaster, EnvironmentRes, EnvironmentTracker, NoEnvironment, PlaneRaycaster,
    RaycastHit,
};
pub use events::{DrawingConfirmedEvent, ObjectPlacedEvent, PlaceObjectEvent};
pub use geometry::{
    GeometryError, MIN_STROKE_POINTS, align_to_surface, ground_center, stroke_valid,
};
pub use plugin::{GroundplanHeadlessPlugin, GroundplanUnifiedPlugin};
pub use resources::{
    ControllerButton, ControllerPose, DrawPhase, DrawStateRes, PlacementConfig, PlacementTemplate,
};
pub use state_store::{PlacedSummary, StrokeStore};
