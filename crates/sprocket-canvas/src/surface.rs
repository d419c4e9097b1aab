/// Drawing surface a canvas reports to.
///
/// The canvas calls [`invalidate`](Self::invalidate) whenever something it
/// would paint has changed; the host schedules a repaint and later calls
/// [`Canvas::paint`](crate::canvas::Canvas::paint).
pub trait Surface {
    fn invalidate(&mut self);
}

/// Surface with no display, counting redraw requests.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    invalidations: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }
}

impl Surface for HeadlessSurface {
    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}
