use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Latest pointer position in viewport (client) coordinates.
///
/// Cloning yields another handle to the same cell. The pointer-move handler
/// writes, the render tick reads; the last write wins and nothing is queued.
/// Coordinates are stored as given, including ones outside the viewport.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    latest: Rc<Cell<Option<Vec2>>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&self, x: f32, y: f32) {
        self.latest.set(Some(Vec2::new(x, y)));
    }

    /// `None` until the first pointer event.
    #[inline]
    pub fn latest(&self) -> Option<Vec2> {
        self.latest.get()
    }
}
