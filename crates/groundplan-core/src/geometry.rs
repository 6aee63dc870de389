//! Pure stroke geometry helpers.
//!
//! Everything here operates on plain point slices so it can be tested
//! without spinning up an ECS world.

use bevy::prelude::*;
use thiserror::Error;

/// Minimum number of samples needed to bound a non-degenerate area
/// on the ground (X-Z) plane.
pub const MIN_STROKE_POINTS: usize = 3;

/// Errors produced by the stroke geometry helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The stroke contains no points, so no center can be derived.
    #[error("stroke is empty, cannot derive a ground center")]
    EmptyStroke,
}

/// Returns true when the stroke has enough samples to describe an area.
pub fn stroke_valid(points: &[Vec3]) -> bool {
    points.len() >= MIN_STROKE_POINTS
}

/// Ground-plane bounding-box center of a stroke.
///
/// X and Z are the midpoints of the stroke's bounding box on the ground
/// plane; Y is the highest sample seen, so a downward probe from the
/// result starts above every point of the drawing.
pub fn ground_center(points: &[Vec3]) -> Result<Vec3, GeometryError> {
    let Some(first) = points.first() else {
        return Err(GeometryError::EmptyStroke);
    };

    let mut min = *first;
    let mut max = *first;
    for point in &points[1..] {
        min = min.min(*point);
        max = max.max(*point);
    }

    Ok(Vec3::new(
        (min.x + max.x) / 2.0,
        max.y,
        (min.z + max.z) / 2.0,
    ))
}

/// Rotation that maps local +Y onto `normal`, keeping world up as the
/// secondary reference axis.
///
/// When the normal itself is (anti)parallel to world up, world -Z takes
/// over as the reference so a flat floor hit yields the identity
/// orientation.
pub fn align_to_surface(normal: Dir3) -> Quat {
    let up = normal.as_vec3();
    let reference = if up.dot(Vec3::Y).abs() > 0.999 {
        Vec3::NEG_Z
    } else {
        Vec3::Y
    };

    let x_axis = reference.cross(up).normalize();
    let z_axis = x_axis.cross(up);
    Quat::from_mat3(&Mat3::from_cols(x_axis, up, z_axis))
}
