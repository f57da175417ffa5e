//! Redraw invalidation tracking.

use std::fmt;

/// The area of the surface that needs to be redrawn.
///
/// Only whole-surface invalidation is modeled: the region is either empty or
/// covers `(0, 0)` to the surface size at the time it was invalidated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl DirtyRegion {
    pub const fn empty() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        }
    }

    /// Mark the whole `width` x `height` surface dirty.
    pub fn set_full(&mut self, width: u32, height: u32) {
        self.x = 0;
        self.y = 0;
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the region spans a full `width` x `height` surface.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == width && self.height == height
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for DirtyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let region = DirtyRegion::default();
        assert!(region.is_empty());
        assert_eq!(region, DirtyRegion::empty());
    }

    #[test]
    fn test_set_full_replaces_previous() {
        let mut region = DirtyRegion::empty();
        region.set_full(800, 600);
        assert!(region.covers(800, 600));

        region.set_full(20, 10);
        assert!(region.covers(20, 10));
        assert!(!region.covers(800, 600));
    }

    #[test]
    fn test_zero_surface_is_empty() {
        let mut region = DirtyRegion::empty();
        region.set_full(0, 0);
        assert!(region.is_empty());
        assert!(region.covers(0, 0));
    }

    #[test]
    fn test_clear() {
        let mut region = DirtyRegion::empty();
        region.set_full(4, 4);
        region.clear();
        assert!(region.is_empty());
        assert_eq!(region.to_string(), "[0, 0, 0x0]");
    }
}
