use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};

/// Image blit payload.
///
/// `path` identifies the asset the host already decoded; `rotation` is in
/// degrees counter-clockwise around the center of `dest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub path: String,
    pub dest: Rect,
    pub rotation: f64,
}

impl DrawList {
    /// Records an image blit into `dest`, rotated around its center.
    #[inline]
    pub fn push_image(&mut self, path: impl Into<String>, dest: Rect, rotation: f64) {
        self.push(DrawCmd::Image(ImageCmd { path: path.into(), dest, rotation }));
    }
}
