//! ECS Events (Messages) for the draw-to-place interaction.
//!
//! These events connect gesture capture, placement, and the host bridge.
//! Note: In Bevy 0.18+, buffered events use the Message trait.

use bevy::prelude::*;

/// Message fired when a drawn stroke passes validation on a confirm
/// press. At most one per press.
#[derive(Message, Debug, Clone)]
pub struct DrawingConfirmedEvent {
    /// Number of samples in the confirmed stroke.
    pub point_count: usize,
}

/// Message requesting a placement attempt from the current stroke.
#[derive(Message, Debug, Clone, Default)]
pub struct PlaceObjectEvent;

/// Message fired when a placement attempt produced an instance.
#[derive(Message, Debug, Clone)]
pub struct ObjectPlacedEvent {
    /// The spawned instance.
    pub entity: Entity,
    /// Template the instance was created from.
    pub template: String,
    /// Surface hit point the instance sits on.
    pub point: Vec3,
    /// Surface normal the instance's up axis is aligned to.
    pub normal: Dir3,
    /// Whether a spatial anchor was attached.
    pub anchored: bool,
}
