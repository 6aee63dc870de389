//! Sync ECS state outward to the shared host store.
//!
//! Runs in `PostUpdate`, after the tick's gesture and placement systems
//! have settled.

use bevy::prelude::*;

use crate::events::{DrawingConfirmedEvent, ObjectPlacedEvent};
use crate::resources::DrawStateRes;
use crate::state_store::{PlacedSummary, StrokeStore};

/// System publishing the display polyline to the host store.
pub fn sync_stroke_to_store(draw_state: Res<DrawStateRes>, store: Res<StrokeStore>) {
    if !draw_state.is_changed() {
        return;
    }
    store.set_polyline(draw_state.display.iter().map(|p| p.to_array()).collect());
}

/// System counting confirmed drawings into the host store.
pub fn record_confirms(mut events: MessageReader<DrawingConfirmedEvent>, store: Res<StrokeStore>) {
    for _ in events.read() {
        store.push_confirm();
    }
}

/// System recording placement summaries into the host store.
pub fn record_placements(mut events: MessageReader<ObjectPlacedEvent>, store: Res<StrokeStore>) {
    for event in events.read() {
        store.push_placed(PlacedSummary {
            template: event.template.clone(),
            position: event.point.to_array(),
            anchored: event.anchored,
        });
    }
}
