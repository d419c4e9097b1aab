use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Horizontal placement of text relative to its anchor point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor.
    #[default]
    Left,
    Center,
    /// Text ends at the anchor.
    Right,
}

impl TextAlign {
    /// Decodes an interpreter alignment code: 0 normal, 1 center, 2 opposite.
    pub fn from_code(code: i32) -> Option<TextAlign> {
        match code {
            0 => Some(TextAlign::Left),
            1 => Some(TextAlign::Center),
            2 => Some(TextAlign::Right),
            _ => None,
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            TextAlign::Left => 0,
            TextAlign::Center => 1,
            TextAlign::Right => 2,
        }
    }
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Baseline anchor in logical pixels.
    pub origin: Vec2,
    /// Font size in logical pixels.
    pub size: f64,
    pub align: TextAlign,
    /// Degrees counter-clockwise around `origin`.
    pub rotation: f64,
    pub color: Color,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, cmd: TextCmd) {
        self.push(DrawCmd::Text(cmd));
    }
}
