//! Rendering systems for the draw-to-place interaction.
//!
//! Uses Bevy's Gizmos API for debug-style rendering of the live stroke
//! and placed instances. Hosts with their own renderer read the
//! `StrokeStore` polyline instead and skip these systems entirely.

use bevy::prelude::*;

use crate::components::{PlacedObject, SpatialAnchor};
use crate::resources::DrawStateRes;

/// Gizmo configuration for stroke and marker rendering.
#[derive(Resource)]
pub struct StrokeGizmoConfig {
    /// Color of the live stroke polyline.
    pub stroke_color: Color,
    /// Color for placed instances riding the world lock.
    pub placed_color: Color,
    /// Color for placed instances carrying their own anchor.
    pub anchored_color: Color,
    /// Radius of the placed-instance marker sphere.
    pub marker_radius: f32,
}

impl Default for StrokeGizmoConfig {
    fn default() -> Self {
        Self {
            stroke_color: Color::srgb(0.9, 0.9, 0.2),
            placed_color: Color::srgb(0.2, 0.8, 0.2),
            anchored_color: Color::srgb(0.2, 0.6, 0.9),
            marker_radius: 0.15,
        }
    }
}

/// System drawing the live stroke, one segment per consecutive pair.
pub fn render_stroke(
    draw_state: Res<DrawStateRes>,
    config: Res<StrokeGizmoConfig>,
    mut gizmos: Gizmos,
) {
    for pair in draw_state.display.windows(2) {
        gizmos.line(pair[0], pair[1], config.stroke_color);
    }
}

/// System drawing a marker and up-axis hint for every placed instance.
pub fn render_placed_markers(
    placed: Query<(&Transform, Option<&SpatialAnchor>), With<PlacedObject>>,
    config: Res<StrokeGizmoConfig>,
    mut gizmos: Gizmos,
) {
    for (transform, anchor) in placed.iter() {
        let color = if anchor.is_some() {
            config.anchored_color
        } else {
            config.placed_color
        };
        gizmos.sphere(
            Isometry3d::from_translation(transform.translation),
            config.marker_radius,
            color,
        );
        gizmos.line(
            transform.translation,
            transform.translation + transform.up() * (config.marker_radius * 3.0),
            color,
        );
    }
}
