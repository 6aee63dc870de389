//! Systems for the draw-to-place interaction.
//!
//! Organized by functionality:
//! - draw: gesture capture (stroke sampling, confirm, input edge reset)
//! - placement: centroid probe, environment raycast, instance spawning
//! - rendering: gizmo rendering of the live stroke and placed markers
//! - state_sync: sync ECS state to the shared host store

pub mod draw;
pub mod placement;
pub mod rendering;
pub mod state_sync;

pub use draw::*;
pub use placement::*;
pub use rendering::*;
pub use state_sync::*;
