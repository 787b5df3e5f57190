/// A camera-level action produced by the shell's key mapping.
///
/// The camera and renderer consume actions, never raw key codes, so the
/// key bindings live entirely in the windowing shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Move along the look direction.
    MoveForward,
    /// Move against the look direction.
    MoveBackward,
    /// Strafe along the negative camera-right vector.
    StrafeLeft,
    /// Strafe along the camera-right vector.
    StrafeRight,
    /// Rise along world up.
    MoveUp,
    /// Sink along world up.
    MoveDown,
    /// Flip between perspective and orthographic projection.
    ToggleProjection,
    /// Request application exit.
    Quit,
}

impl CameraAction {
    /// Whether holding the key should repeat the action every frame.
    /// Toggle and quit are one-shot.
    pub fn repeats_while_held(self) -> bool {
        !matches!(self, CameraAction::ToggleProjection | CameraAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_repeats_while_held() {
        assert!(CameraAction::MoveForward.repeats_while_held());
        assert!(CameraAction::StrafeLeft.repeats_while_held());
        assert!(CameraAction::MoveDown.repeats_while_held());
    }

    #[test]
    fn toggle_and_quit_are_one_shot() {
        assert!(!CameraAction::ToggleProjection.repeats_while_held());
        assert!(!CameraAction::Quit.repeats_while_held());
    }
}
