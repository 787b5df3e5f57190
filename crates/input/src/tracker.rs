use crate::action::CameraAction;
use std::collections::HashSet;

/// Held-action set with edge detection for the projection toggle.
///
/// Key repeat events from the OS look like repeated presses; the tracker
/// treats a press as an edge only when the action was not already held.
#[derive(Debug, Default)]
pub struct InputTracker {
    held: HashSet<CameraAction>,
    toggle_edge: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release transition for a mapped action.
    pub fn set_pressed(&mut self, action: CameraAction, pressed: bool) {
        if pressed {
            let was_held = !self.held.insert(action);
            if action == CameraAction::ToggleProjection && !was_held {
                self.toggle_edge = true;
                tracing::debug!("projection toggle edge");
            }
        } else {
            self.held.remove(&action);
        }
    }

    /// Whether the action is currently held.
    pub fn is_held(&self, action: CameraAction) -> bool {
        self.held.contains(&action)
    }

    /// Actions that should be applied this frame, in no particular order.
    pub fn held_actions(&self) -> impl Iterator<Item = CameraAction> + '_ {
        self.held
            .iter()
            .copied()
            .filter(|a| a.repeats_while_held())
    }

    /// Consume the pending projection-toggle edge, if any. Returns true at
    /// most once per press, however long the key stays down.
    pub fn take_toggle_edge(&mut self) -> bool {
        std::mem::take(&mut self.toggle_edge)
    }
}

/// Cursor position tracker producing screen-space deltas.
///
/// The first event only latches the position and yields a zero delta, so a
/// window whose cursor starts far from center does not jerk the view.
#[derive(Debug, Default)]
pub struct MouseTracker {
    last: Option<(f64, f64)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position; returns the delta from the previous
    /// one. Positive y is downward, matching screen coordinates.
    pub fn update(&mut self, x: f64, y: f64) -> (f32, f32) {
        let delta = match self.last {
            Some((lx, ly)) => ((x - lx) as f32, (y - ly) as f32),
            None => (0.0, 0.0),
        };
        self.last = Some((x, y));
        delta
    }

    /// Forget the latched position (used when the cursor is re-grabbed).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_actions_follow_press_and_release() {
        let mut tracker = InputTracker::new();
        tracker.set_pressed(CameraAction::MoveForward, true);
        tracker.set_pressed(CameraAction::StrafeLeft, true);
        assert!(tracker.is_held(CameraAction::MoveForward));

        tracker.set_pressed(CameraAction::MoveForward, false);
        let held: Vec<_> = tracker.held_actions().collect();
        assert_eq!(held, [CameraAction::StrafeLeft]);
    }

    #[test]
    fn toggle_fires_once_per_press() {
        let mut tracker = InputTracker::new();
        tracker.set_pressed(CameraAction::ToggleProjection, true);

        // Held across many frames: only the first consumption sees the edge.
        let flips: u32 = (0..10).map(|_| tracker.take_toggle_edge() as u32).sum();
        assert_eq!(flips, 1);

        // OS key repeat shows up as extra presses without a release.
        tracker.set_pressed(CameraAction::ToggleProjection, true);
        assert!(!tracker.take_toggle_edge());

        // A release re-arms the edge.
        tracker.set_pressed(CameraAction::ToggleProjection, false);
        tracker.set_pressed(CameraAction::ToggleProjection, true);
        assert!(tracker.take_toggle_edge());
    }

    #[test]
    fn toggle_is_not_a_held_action() {
        let mut tracker = InputTracker::new();
        tracker.set_pressed(CameraAction::ToggleProjection, true);
        assert_eq!(tracker.held_actions().count(), 0);
    }

    #[test]
    fn first_mouse_event_is_a_zero_delta() {
        let mut mouse = MouseTracker::new();
        assert_eq!(mouse.update(400.0, 300.0), (0.0, 0.0));
        assert_eq!(mouse.update(410.0, 290.0), (10.0, -10.0));
    }

    #[test]
    fn reset_relatches_on_the_next_event() {
        let mut mouse = MouseTracker::new();
        mouse.update(100.0, 100.0);
        mouse.reset();
        assert_eq!(mouse.update(500.0, 500.0), (0.0, 0.0));
        assert_eq!(mouse.update(501.0, 502.0), (1.0, 2.0));
    }
}
