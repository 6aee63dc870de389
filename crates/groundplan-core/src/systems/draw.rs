//! Gesture capture systems.
//!
//! A trigger press starts a fresh stroke; every held tick appends the
//! controller position and mirrors the stroke into the display
//! polyline. The confirm button finishes the drawing: a valid stroke
//! fires `DrawingConfirmedEvent` exactly once per press, and the display
//! polyline is cleared either way while the points stay readable for
//! the placement controller.

use bevy::prelude::*;

use crate::events::DrawingConfirmedEvent;
use crate::geometry::{MIN_STROKE_POINTS, stroke_valid};
use crate::resources::{ControllerButton, ControllerPose, DrawPhase, DrawStateRes};

/// System sampling the controller position into the active stroke.
pub fn sample_stroke(
    mut draw_state: ResMut<DrawStateRes>,
    buttons: Res<ButtonInput<ControllerButton>>,
    pose: Res<ControllerPose>,
) {
    let started = buttons.just_pressed(ControllerButton::Trigger);
    let held = buttons.pressed(ControllerButton::Trigger);
    if !started && !held {
        return;
    }

    let state = draw_state.as_mut();
    if started {
        // A new gesture invalidates the previous cycle's points.
        state.points.clear();
        state.phase = DrawPhase::Drawing;
    }

    state.points.push(pose.position);
    state.display.clear();
    state.display.extend_from_slice(&state.points);
}

/// System finishing the drawing on a confirm press.
pub fn confirm_stroke(
    mut draw_state: ResMut<DrawStateRes>,
    buttons: Res<ButtonInput<ControllerButton>>,
    mut confirmed: MessageWriter<DrawingConfirmedEvent>,
) {
    if !buttons.just_pressed(ControllerButton::Confirm) {
        return;
    }

    let state = draw_state.as_mut();
    if stroke_valid(&state.points) {
        state.phase = DrawPhase::Confirmed;
        confirmed.write(DrawingConfirmedEvent {
            point_count: state.points.len(),
        });
        tracing::info!("[draw] stroke confirmed with {} points", state.points.len());
    } else {
        tracing::debug!(
            "[draw] confirm ignored, stroke has {} of {} required points",
            state.points.len(),
            MIN_STROKE_POINTS
        );
    }

    // The live polyline goes away either way; the points stay so the
    // placement controller can still read them.
    state.display.clear();
}

/// System resetting button edge state at the end of every tick.
///
/// The driver writes presses/releases between ticks; without this reset
/// a press would read as just-pressed forever.
pub fn clear_input_edges(mut buttons: ResMut<ButtonInput<ControllerButton>>) {
    buttons.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestApp;

    #[test]
    fn test_held_trigger_samples_in_order() {
        let mut app = TestApp::new();

        app.set_controller(Vec3::new(0.0, 1.0, 0.0));
        app.press_trigger();
        app.update();
        for i in 1..4 {
            app.set_controller(Vec3::new(i as f32, 1.0, 0.0));
            app.update();
        }
        app.release_trigger();
        app.update();

        let state = app.draw_state();
        assert_eq!(state.points.len(), 4);
        for (i, point) in state.points.iter().enumerate() {
            assert_eq!(*point, Vec3::new(i as f32, 1.0, 0.0));
        }
        assert_eq!(state.phase, DrawPhase::Drawing);
    }

    #[test]
    fn test_new_press_clears_previous_stroke() {
        let mut app = TestApp::new();

        app.draw_points(&[
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ]);
        assert_eq!(app.draw_state().points.len(), 3);

        app.set_controller(Vec3::new(9.0, 1.0, 9.0));
        app.press_trigger();
        app.update();

        let state = app.draw_state();
        assert_eq!(state.points.len(), 1);
        assert_eq!(state.points[0], Vec3::new(9.0, 1.0, 9.0));
    }

    #[test]
    fn test_confirm_fires_once_for_valid_stroke() {
        let mut app = TestApp::new();

        app.draw_points(&[
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        ]);

        app.press_confirm();
        app.update();
        // Held across further ticks: still a single confirm.
        app.update();
        app.update();
        app.release_confirm();

        assert_eq!(app.store().confirm_count(), 1);

        let state = app.draw_state();
        assert_eq!(state.phase, DrawPhase::Confirmed);
        assert!(state.display.is_empty());
        // The points survive the confirm for placement to read.
        assert_eq!(state.points.len(), 3);
    }

    #[test]
    fn test_confirm_ignored_for_short_stroke() {
        let mut app = TestApp::new();

        app.draw_points(&[Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)]);
        assert!(!app.draw_state().display.is_empty());

        app.press_confirm();
        app.update();
        app.release_confirm();

        assert_eq!(app.store().confirm_count(), 0);

        let state = app.draw_state();
        assert_ne!(state.phase, DrawPhase::Confirmed);
        // Display cleared even though nothing was confirmed.
        assert!(state.display.is_empty());
        assert_eq!(state.points.len(), 2);
    }

    #[test]
    fn test_display_mirrors_stroke_while_drawing() {
        let mut app = TestApp::new();

        app.set_controller(Vec3::new(0.5, 1.0, 0.5));
        app.press_trigger();
        app.update();
        app.set_controller(Vec3::new(1.5, 1.0, 0.5));
        app.update();

        let state = app.draw_state();
        assert_eq!(state.display, state.points);
        assert_eq!(state.display.len(), 2);
    }

    #[test]
    fn test_polyline_reaches_store() {
        let mut app = TestApp::new();

        app.set_controller(Vec3::new(2.0, 1.0, 3.0));
        app.press_trigger();
        app.update();

        let store = app.store();
        assert_eq!(store.polyline(), vec![[2.0, 1.0, 3.0]]);
        let version = store.version();
        assert!(version > 0);

        // Idle ticks do not churn the version.
        app.release_trigger();
        app.update();
        app.update();
        assert_eq!(app.store().version(), version);
    }
}
