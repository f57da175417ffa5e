//! Rectangular bounds in surface coordinates.
//!
//! The y axis points up: `top` is numerically greater than or equal to
//! `bottom`, and `right` is greater than or equal to `left`.
//!
//! Two implementations exist:
//! - [`Rect`], a plain mutable rectangle used by widgets.
//! - [`WindowBounds`], a read-only view computed on every read from the
//!   window's canvas, so it follows resizes without any synchronization.

use std::{cell::RefCell, fmt, rc::Weak};

use vellum_render::Canvas;

use crate::error::{UiError, UiResult};

/// Four integer edges with fallible setters.
///
/// Setters return [`UiError::Unsupported`] on read-only implementations.
pub trait Bounds {
    fn left(&self) -> i32;
    fn top(&self) -> i32;
    fn right(&self) -> i32;
    fn bottom(&self) -> i32;

    fn set_left(&mut self, left: i32) -> UiResult<()>;
    fn set_top(&mut self, top: i32) -> UiResult<()>;
    fn set_right(&mut self, right: i32) -> UiResult<()>;
    fn set_bottom(&mut self, bottom: i32) -> UiResult<()>;

    fn width(&self) -> i32 {
        self.right().saturating_sub(self.left())
    }

    fn height(&self) -> i32 {
        self.top().saturating_sub(self.bottom())
    }

    /// Copy all four edges from `other`.
    fn set(&mut self, other: &dyn Bounds) -> UiResult<()> {
        self.set_left(other.left())?;
        self.set_top(other.top())?;
        self.set_right(other.right())?;
        self.set_bottom(other.bottom())
    }

    /// Snapshot the current edges into a new [`Rect`].
    fn to_rect(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }

    /// Snapshot the current edges into `dst`, reusing its storage.
    fn copy_into<'a>(&self, dst: &'a mut Rect) -> &'a mut Rect {
        *dst = self.to_rect();
        dst
    }
}

/// A mutable rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.top <= self.bottom
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.bottom && y < self.top
    }
}

impl Bounds for Rect {
    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn right(&self) -> i32 {
        self.right
    }

    fn bottom(&self) -> i32 {
        self.bottom
    }

    fn set_left(&mut self, left: i32) -> UiResult<()> {
        self.left = left;
        Ok(())
    }

    fn set_top(&mut self, top: i32) -> UiResult<()> {
        self.top = top;
        Ok(())
    }

    fn set_right(&mut self, right: i32) -> UiResult<()> {
        self.right = right;
        Ok(())
    }

    fn set_bottom(&mut self, bottom: i32) -> UiResult<()> {
        self.bottom = bottom;
        Ok(())
    }
}

const WINDOW_BOUNDS_FIXED: &str = "window bounds cannot be changed";

/// The fixed coordinate frame of a window: `(0, 0)` to `(width, height)`.
///
/// Holds a weak handle to the window's canvas and reads its size on every
/// call. Once the canvas is gone every edge reads as zero.
#[derive(Clone)]
pub struct WindowBounds {
    canvas: Weak<RefCell<dyn Canvas>>,
}

impl WindowBounds {
    pub(crate) fn new(canvas: Weak<RefCell<dyn Canvas>>) -> Self {
        Self { canvas }
    }

    fn read(&self, f: impl FnOnce(&dyn Canvas) -> u32) -> i32 {
        let Some(canvas) = self.canvas.upgrade() else {
            return 0;
        };
        let value = f(&*canvas.borrow());
        i32::try_from(value).unwrap_or(i32::MAX)
    }
}

impl Bounds for WindowBounds {
    fn left(&self) -> i32 {
        0
    }

    fn top(&self) -> i32 {
        self.read(|canvas| canvas.height())
    }

    fn right(&self) -> i32 {
        self.read(|canvas| canvas.width())
    }

    fn bottom(&self) -> i32 {
        0
    }

    fn set_left(&mut self, _left: i32) -> UiResult<()> {
        Err(UiError::unsupported("set_left", WINDOW_BOUNDS_FIXED))
    }

    fn set_top(&mut self, _top: i32) -> UiResult<()> {
        Err(UiError::unsupported("set_top", WINDOW_BOUNDS_FIXED))
    }

    fn set_right(&mut self, _right: i32) -> UiResult<()> {
        Err(UiError::unsupported("set_right", WINDOW_BOUNDS_FIXED))
    }

    fn set_bottom(&mut self, _bottom: i32) -> UiResult<()> {
        Err(UiError::unsupported("set_bottom", WINDOW_BOUNDS_FIXED))
    }
}

impl fmt::Debug for WindowBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowBounds")
            .field("left", &self.left())
            .field("top", &self.top())
            .field("right", &self.right())
            .field("bottom", &self.bottom())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use vellum_render::SoftwareCanvas;

    use super::*;

    fn window_bounds(canvas: &Rc<RefCell<dyn Canvas>>) -> WindowBounds {
        WindowBounds::new(Rc::downgrade(canvas))
    }

    #[test]
    fn test_rect_setters() {
        let mut rect = Rect::ZERO;
        rect.set_left(1).unwrap();
        rect.set_bottom(2).unwrap();
        rect.set_right(11).unwrap();
        rect.set_top(22).unwrap();

        assert_eq!(rect, Rect::new(1, 22, 11, 2));
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 20);
    }

    #[test]
    fn test_rect_empty_and_contains() {
        assert!(Rect::ZERO.is_empty());
        let rect = Rect::new(0, 10, 10, 0);
        assert!(!rect.is_empty());
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 9));
        assert!(!rect.contains(10, 5));
    }

    #[test]
    fn test_copy_into_overwrites_destination() {
        let src = Rect::new(1, 4, 3, 2);
        let mut dst = Rect::new(9, 9, 9, 9);
        src.copy_into(&mut dst);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_window_bounds_track_canvas() {
        let canvas: Rc<RefCell<dyn Canvas>> = Rc::new(RefCell::new(SoftwareCanvas::new(640, 480)));
        let bounds = window_bounds(&canvas);
        assert_eq!(bounds.to_rect(), Rect::new(0, 480, 640, 0));

        canvas.borrow_mut().resize(100, 50);
        assert_eq!(bounds.right(), 100);
        assert_eq!(bounds.top(), 50);
    }

    #[test]
    fn test_window_bounds_snapshot_is_detached() {
        let canvas: Rc<RefCell<dyn Canvas>> = Rc::new(RefCell::new(SoftwareCanvas::new(8, 8)));
        let bounds = window_bounds(&canvas);
        let snapshot = bounds.to_rect();

        canvas.borrow_mut().resize(16, 16);
        assert_eq!(snapshot, Rect::new(0, 8, 8, 0));
        assert_eq!(bounds.to_rect(), Rect::new(0, 16, 16, 0));
    }

    #[test]
    fn test_window_bounds_reject_every_setter() {
        let canvas: Rc<RefCell<dyn Canvas>> = Rc::new(RefCell::new(SoftwareCanvas::new(8, 8)));
        let mut bounds = window_bounds(&canvas);

        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert!(bounds.set_left(value).unwrap_err().is_unsupported());
            assert!(bounds.set_top(value).unwrap_err().is_unsupported());
            assert!(bounds.set_right(value).unwrap_err().is_unsupported());
            assert!(bounds.set_bottom(value).unwrap_err().is_unsupported());
        }
        assert!(bounds.set(&Rect::new(1, 1, 1, 1)).unwrap_err().is_unsupported());
        assert_eq!(bounds.to_rect(), Rect::new(0, 8, 8, 0));
    }

    #[test]
    fn test_window_bounds_after_canvas_dropped() {
        let canvas: Rc<RefCell<dyn Canvas>> = Rc::new(RefCell::new(SoftwareCanvas::new(8, 8)));
        let bounds = window_bounds(&canvas);
        drop(canvas);
        assert_eq!(bounds.to_rect(), Rect::ZERO);
    }
}
