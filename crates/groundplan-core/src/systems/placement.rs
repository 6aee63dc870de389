//! Placement controller systems.
//!
//! A `PlaceObjectEvent` probes straight down from the stroke's ground
//! center into the scanned environment and, on a hit, spawns one
//! instance aligned to the surface. Invalid strokes and raycast misses
//! are normal, recoverable outcomes; nothing here can fail fatally.

use bevy::prelude::*;

use crate::components::{PlacedObject, SpatialAnchor};
use crate::environment::{EnvironmentRes, RaycastHit};
use crate::events::{DrawingConfirmedEvent, ObjectPlacedEvent, PlaceObjectEvent};
use crate::geometry::{MIN_STROKE_POINTS, align_to_surface, ground_center, stroke_valid};
use crate::resources::{DrawStateRes, PlacementConfig, PlacementTemplate};

/// System wiring confirmed drawings into placement requests.
///
/// Gated by `PlacementConfig::auto_place_on_confirm`; hosts that want a
/// separate explicit "place" action disable it and send
/// `PlaceObjectEvent` themselves.
pub fn auto_request_placement(
    config: Res<PlacementConfig>,
    mut confirmed: MessageReader<DrawingConfirmedEvent>,
    mut requests: MessageWriter<PlaceObjectEvent>,
) {
    if !config.auto_place_on_confirm {
        confirmed.clear();
        return;
    }

    for _ in confirmed.read() {
        requests.write(PlaceObjectEvent);
    }
}

/// System handling placement requests.
pub fn handle_place_requests(
    mut commands: Commands,
    mut requests: MessageReader<PlaceObjectEvent>,
    mut placed: MessageWriter<ObjectPlacedEvent>,
    draw_state: Res<DrawStateRes>,
    environment: Res<EnvironmentRes>,
    template: Res<PlacementTemplate>,
) {
    for _ in requests.read() {
        if !stroke_valid(&draw_state.points) {
            tracing::warn!(
                "[place] rejected: stroke has {} of {} required points",
                draw_state.points.len(),
                MIN_STROKE_POINTS
            );
            continue;
        }

        // Guarded by the validity gate above, so the stroke is never empty.
        let Ok(center) = ground_center(&draw_state.points) else {
            continue;
        };

        let probe = Ray3d::new(center, Dir3::NEG_Y);
        let Some(hit) = environment.raycast(probe) else {
            // Nothing under the drawing: a normal miss, not an error.
            tracing::debug!("[place] probe from {center:?} found no surface");
            continue;
        };

        let anchored = !environment.world_lock_active();
        let entity = spawn_placed(&mut commands, &template, &hit, anchored);

        tracing::info!(
            "[place] placed '{}' at ({:.2}, {:.2}, {:.2}), anchored: {}",
            template.name,
            hit.point.x,
            hit.point.y,
            hit.point.z,
            anchored
        );

        placed.write(ObjectPlacedEvent {
            entity,
            template: template.name.clone(),
            point: hit.point,
            normal: hit.normal,
            anchored,
        });
    }
}

/// Spawns one instance from `template` on the hit surface.
///
/// The anchor decision is an explicit argument: callers decide whether
/// the instance needs its own pin to physical space.
fn spawn_placed(
    commands: &mut Commands,
    template: &PlacementTemplate,
    hit: &RaycastHit,
    anchor: bool,
) -> Entity {
    let transform = Transform {
        translation: hit.point,
        rotation: align_to_surface(hit.normal),
        scale: Vec3::splat(template.scale),
    };

    let mut entity = commands.spawn((PlacedObject::new(template.name.clone()), transform));
    if anchor {
        entity.insert(SpatialAnchor);
    }
    entity.id()
}
