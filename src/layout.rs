//! Layout geometry: the editor/preview split and the detach gesture.

use eframe::egui::{Pos2, Vec2};

/// Minimum width kept on each side of the resizer.
pub const MIN_PANE_WIDTH: f32 = 200.0;

/// Pointer travel that turns a press on the layout handle into a detach.
pub const DETACH_THRESHOLD: f32 = 50.0;

/// Editor pane width as a fraction of `total`, for a resizer at `x`.
///
/// `x` is clamped so both panes keep [`MIN_PANE_WIDTH`]; a window too narrow
/// for that splits evenly.
pub fn split_fraction(x: f32, total: f32) -> f32 {
    if total < 2.0 * MIN_PANE_WIDTH {
        return 0.5;
    }
    x.clamp(MIN_PANE_WIDTH, total - MIN_PANE_WIDTH) / total
}

/// Outcome of a pointer event on the layout handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing decided yet.
    Pending,
    /// Released without moving past the threshold.
    Click,
    /// Dragged past the threshold.
    Detach,
}

/// Tracks a press on the layout-mode handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachGesture {
    origin: Option<Pos2>,
}

impl DetachGesture {
    pub fn press(&mut self, pos: Pos2) {
        self.origin = Some(pos);
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Pointer moved while pressed. Ends the gesture on detach.
    pub fn drag(&mut self, pos: Pos2) -> GestureOutcome {
        let Some(origin) = self.origin else {
            return GestureOutcome::Pending;
        };
        if exceeds_threshold(pos - origin) {
            self.origin = None;
            return GestureOutcome::Detach;
        }
        GestureOutcome::Pending
    }

    /// Pointer released. A release after no detach is a click.
    pub fn release(&mut self) -> GestureOutcome {
        match self.origin.take() {
            Some(_) => GestureOutcome::Click,
            None => GestureOutcome::Pending,
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

fn exceeds_threshold(delta: Vec2) -> bool {
    delta.x.abs() > DETACH_THRESHOLD || delta.y.abs() > DETACH_THRESHOLD
}
