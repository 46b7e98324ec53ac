//! Leptos Swipe Utilities
//!
//! Horizontal swipe gestures for Leptos using pointer events.
//! Tracks one captured pointer per card and maps release displacement
//! to a left/right direction once it passes a threshold.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Horizontal displacement required on release to register a swipe
/// instead of snapping back.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

/// Rotation applied at full drag range.
const ROTATION_MAX_DEG: f64 = 25.0;
/// Drag range over which rotation and fade-out scale.
const DRAG_RANGE_PX: f64 = 200.0;
/// Displacement at which the feedback overlay reaches full strength.
const OVERLAY_FULL_PX: f64 = 150.0;
const OVERLAY_MAX_ALPHA: f64 = 0.5;
/// Accept/reject overlay colors (green right, red left).
const OVERLAY_RIGHT_RGB: (u8, u8, u8) = (46, 204, 113);
const OVERLAY_LEFT_RGB: (u8, u8, u8) = (231, 76, 60);

/// Which side the card left on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// One in-flight drag: the captured pointer and its horizontal travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTrack {
    pub pointer_id: i32,
    pub start_x: f64,
    pub current_x: f64,
}

impl DragTrack {
    pub fn delta(&self) -> f64 {
        self.current_x - self.start_x
    }
}

/// Gesture state for a single card.
///
/// `Exiting` is terminal: the card no longer reacts to pointer events
/// and the owner unmounts it once its exit animation finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipePhase {
    #[default]
    Idle,
    Dragging(DragTrack),
    Exiting(SwipeDirection),
}

/// Maps a release displacement to a direction, `None` below the threshold.
pub fn direction_for_delta(delta: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta >= threshold {
        Some(SwipeDirection::Right)
    } else if delta <= -threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Starts a drag. Only an idle card accepts a new pointer.
pub fn begin(phase: SwipePhase, pointer_id: i32, x: f64) -> SwipePhase {
    match phase {
        SwipePhase::Idle => SwipePhase::Dragging(DragTrack {
            pointer_id,
            start_x: x,
            current_x: x,
        }),
        other => other,
    }
}

/// Updates the travel of the active drag. Other pointers are ignored.
pub fn track(phase: SwipePhase, pointer_id: i32, x: f64) -> SwipePhase {
    match phase {
        SwipePhase::Dragging(drag) if drag.pointer_id == pointer_id => {
            SwipePhase::Dragging(DragTrack { current_x: x, ..drag })
        }
        other => other,
    }
}

/// Ends the active drag. Past the threshold the card enters `Exiting` and
/// exactly one direction is reported; otherwise it snaps back to `Idle`.
pub fn release(
    phase: SwipePhase,
    pointer_id: i32,
    threshold: f64,
) -> (SwipePhase, Option<SwipeDirection>) {
    match phase {
        SwipePhase::Dragging(drag) if drag.pointer_id == pointer_id => {
            match direction_for_delta(drag.delta(), threshold) {
                Some(direction) => (SwipePhase::Exiting(direction), Some(direction)),
                None => (SwipePhase::Idle, None),
            }
        }
        other => (other, None),
    }
}

/// Aborts the active drag (pointercancel); never reports a direction.
pub fn cancel(phase: SwipePhase, pointer_id: i32) -> SwipePhase {
    match phase {
        SwipePhase::Dragging(drag) if drag.pointer_id == pointer_id => SwipePhase::Idle,
        other => other,
    }
}

/// Swipe state signals for one card
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub phase: ReadSignal<SwipePhase>,
    pub set_phase: WriteSignal<SwipePhase>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (phase, set_phase) = signal(SwipePhase::default());
    SwipeSignals { phase, set_phase }
}

impl SwipeSignals {
    /// Current horizontal displacement, 0 outside a drag. Tracked read.
    pub fn delta(&self) -> f64 {
        match self.phase.get() {
            SwipePhase::Dragging(drag) => drag.delta(),
            _ => 0.0,
        }
    }
}

/// Create pointerdown handler: captures the pointer and starts tracking
pub fn make_on_pointerdown(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        let phase = swipe.phase.get_untracked();
        let next = begin(phase, ev.pointer_id(), ev.client_x() as f64);
        if next != phase {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
            swipe.set_phase.set(next);
        }
    }
}

/// Create pointermove handler: updates the travel of the captured pointer
pub fn make_on_pointermove(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let phase = swipe.phase.get_untracked();
        let next = track(phase, ev.pointer_id(), ev.client_x() as f64);
        if next != phase {
            ev.prevent_default();
            swipe.set_phase.set(next);
        }
    }
}

/// Create pointerup handler: releases the capture and reports the swipe
/// direction, if any, through `on_swipe`
pub fn make_on_pointerup(
    swipe: SwipeSignals,
    on_swipe: Callback<SwipeDirection>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let phase = swipe.phase.get_untracked();
        let (next, direction) = release(phase, ev.pointer_id(), SWIPE_THRESHOLD_PX);
        if next != phase {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(ev.pointer_id());
            }
            swipe.set_phase.set(next);
        }
        if let Some(direction) = direction {
            on_swipe.run(direction);
        }
    }
}

/// Create pointercancel handler: drops the drag without a decision
pub fn make_on_pointercancel(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        let phase = swipe.phase.get_untracked();
        let next = cancel(phase, ev.pointer_id());
        if next != phase {
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(ev.pointer_id());
            }
            swipe.set_phase.set(next);
        }
    }
}

/// Card transform as a continuous function of displacement.
pub fn card_transform(delta: f64) -> String {
    let rotation = (delta / DRAG_RANGE_PX).clamp(-1.0, 1.0) * ROTATION_MAX_DEG;
    format!("transform: translateX({delta:.1}px) rotate({rotation:.2}deg);")
}

/// Card opacity: solid inside the threshold band, fading to 0 at full range.
pub fn card_opacity(delta: f64) -> f64 {
    let travel = delta.abs();
    if travel <= SWIPE_THRESHOLD_PX {
        1.0
    } else {
        ((DRAG_RANGE_PX - travel) / (DRAG_RANGE_PX - SWIPE_THRESHOLD_PX)).clamp(0.0, 1.0)
    }
}

/// Feedback overlay style: green strengthening rightward, red leftward.
pub fn overlay_style(delta: f64) -> String {
    let alpha = (delta.abs() / OVERLAY_FULL_PX).min(1.0) * OVERLAY_MAX_ALPHA;
    if alpha < 0.01 {
        return "background-color: transparent;".to_string();
    }
    let (r, g, b) = if delta > 0.0 {
        OVERLAY_RIGHT_RGB
    } else {
        OVERLAY_LEFT_RGB
    };
    format!("background-color: rgba({r}, {g}, {b}, {alpha:.3});")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(pointer_id: i32, start_x: f64, current_x: f64) -> SwipePhase {
        SwipePhase::Dragging(DragTrack {
            pointer_id,
            start_x,
            current_x,
        })
    }

    #[test]
    fn below_threshold_snaps_back() {
        let (next, direction) = release(dragging(1, 0.0, 80.0), 1, SWIPE_THRESHOLD_PX);
        assert_eq!(next, SwipePhase::Idle);
        assert_eq!(direction, None);
    }

    #[test]
    fn past_threshold_exits_with_one_direction() {
        let (next, direction) = release(dragging(1, 0.0, 120.0), 1, SWIPE_THRESHOLD_PX);
        assert_eq!(next, SwipePhase::Exiting(SwipeDirection::Right));
        assert_eq!(direction, Some(SwipeDirection::Right));

        let (next, direction) = release(dragging(1, 0.0, -120.0), 1, SWIPE_THRESHOLD_PX);
        assert_eq!(next, SwipePhase::Exiting(SwipeDirection::Left));
        assert_eq!(direction, Some(SwipeDirection::Left));
    }

    #[test]
    fn release_at_exact_threshold_counts() {
        assert_eq!(
            direction_for_delta(SWIPE_THRESHOLD_PX, SWIPE_THRESHOLD_PX),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn other_pointers_are_ignored() {
        let phase = dragging(1, 0.0, 50.0);
        assert_eq!(track(phase, 2, 400.0), phase);
        assert_eq!(release(phase, 2, SWIPE_THRESHOLD_PX), (phase, None));
        assert_eq!(cancel(phase, 2), phase);
    }

    #[test]
    fn begin_only_from_idle() {
        let started = begin(SwipePhase::Idle, 1, 10.0);
        assert_eq!(started, dragging(1, 10.0, 10.0));
        // A second pointer cannot steal an active drag.
        assert_eq!(begin(started, 2, 99.0), started);
        // An exiting card is done with input.
        let exiting = SwipePhase::Exiting(SwipeDirection::Left);
        assert_eq!(begin(exiting, 1, 0.0), exiting);
    }

    #[test]
    fn cancel_never_decides() {
        let phase = dragging(1, 0.0, 500.0);
        assert_eq!(cancel(phase, 1), SwipePhase::Idle);
    }

    #[test]
    fn transform_tracks_displacement() {
        assert_eq!(card_transform(0.0), "transform: translateX(0.0px) rotate(0.00deg);");
        assert_eq!(
            card_transform(100.0),
            "transform: translateX(100.0px) rotate(12.50deg);"
        );
        // Rotation saturates at the end of the drag range.
        assert_eq!(
            card_transform(400.0),
            "transform: translateX(400.0px) rotate(25.00deg);"
        );
    }

    #[test]
    fn opacity_fades_past_threshold() {
        assert_eq!(card_opacity(0.0), 1.0);
        assert_eq!(card_opacity(-80.0), 1.0);
        assert_eq!(card_opacity(150.0), 0.5);
        assert_eq!(card_opacity(250.0), 0.0);
    }

    #[test]
    fn overlay_follows_direction_and_strength() {
        assert_eq!(overlay_style(0.0), "background-color: transparent;");
        assert_eq!(overlay_style(75.0), "background-color: rgba(46, 204, 113, 0.250);");
        assert_eq!(overlay_style(-75.0), "background-color: rgba(231, 76, 60, 0.250);");
        // Alpha saturates at full overlay strength.
        assert_eq!(overlay_style(600.0), "background-color: rgba(46, 204, 113, 0.500);");
    }
}
