use super::types::{
    InputEvent,
    MotionAction,
    MotionEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchEvent,
    TouchPhase,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Active {
    Mouse,
    Touch(u64),
}

/// Folds raw input into a single-pointer motion stream.
///
/// Only one contact drives a gesture at a time: the primary mouse button or
/// the first finger down. Other buttons and fingers are ignored until that
/// contact lifts.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Last known cursor position in logical pixels.
    pub pointer_pos: Option<(f64, f64)>,

    active: Option<Active>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.active.is_some()
    }

    /// Applies one input event, returning the motion step it produced, if any.
    pub fn apply_event(&mut self, ev: InputEvent) -> Option<MotionEvent> {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
                (self.active == Some(Active::Mouse)).then(|| MotionEvent::moved(x, y))
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));
                if button != MouseButton::Left {
                    return None;
                }
                match state {
                    MouseButtonState::Pressed if self.active.is_none() => {
                        self.active = Some(Active::Mouse);
                        Some(MotionEvent::down(x, y))
                    }
                    MouseButtonState::Released if self.active == Some(Active::Mouse) => {
                        self.active = None;
                        Some(MotionEvent::up(x, y))
                    }
                    _ => None,
                }
            }

            InputEvent::Touch(TouchEvent { id, phase, x, y }) => self.apply_touch(id, phase, x, y),

            // Leaving the surface does not end a press; the host keeps
            // reporting (possibly negative) coordinates until release.
            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                None
            }

            InputEvent::Focused(focused) => {
                if focused || self.active.is_none() {
                    return None;
                }
                // Focus loss mid-gesture would otherwise leave a stuck press.
                self.active = None;
                let (x, y) = self.pointer_pos.unwrap_or((0.0, 0.0));
                Some(MotionEvent::new(MotionAction::Cancel, x, y))
            }
        }
    }

    fn apply_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<MotionEvent> {
        match phase {
            TouchPhase::Started if self.active.is_none() => {
                self.active = Some(Active::Touch(id));
                Some(MotionEvent::down(x, y))
            }
            _ if self.active != Some(Active::Touch(id)) => None,
            TouchPhase::Started => None,
            TouchPhase::Moved => Some(MotionEvent::moved(x, y)),
            TouchPhase::Ended => {
                self.active = None;
                Some(MotionEvent::up(x, y))
            }
            TouchPhase::Cancelled => {
                self.active = None;
                Some(MotionEvent::new(MotionAction::Cancel, x, y))
            }
        }
    }
}
