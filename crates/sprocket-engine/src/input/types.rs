use crate::coords::Vec2;

/// Phase of a single-pointer gesture stream.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (e.g. a system gesture).
    Cancel,
}

/// One step of a pointer gesture, in surface-local logical pixels.
///
/// Coordinates are raw: they may be negative or beyond the surface when the
/// pointer leaves it mid-gesture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub x: f64,
    pub y: f64,
}

impl MotionEvent {
    #[inline]
    pub const fn new(action: MotionAction, x: f64, y: f64) -> Self {
        Self { action, x, y }
    }

    #[inline]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(MotionAction::Down, x, y)
    }

    #[inline]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(MotionAction::Move, x, y)
    }

    #[inline]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(MotionAction::Up, x, y)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f64,
    pub y: f64,
}

/// Pointer button event.
///
/// Coordinates are included so the tracker does not depend on having seen a
/// prior move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// A finger contact update.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    /// Platform finger id, stable for the lifetime of one contact.
    pub id: u64,
    pub phase: TouchPhase,
    pub x: f64,
    pub y: f64,
}

/// Platform-agnostic pointer input emitted by hosts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    Touch(TouchEvent),

    /// Pointer left the surface.
    PointerLeft,

    /// Surface focus change.
    Focused(bool),
}
