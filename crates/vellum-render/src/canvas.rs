use std::{cell::RefCell, rc::Rc};

use vellum_core::Size;

/// A drawable surface with a pixel size.
///
/// Canvases are shared between a window and, optionally, an external owner.
/// Exactly one of them is responsible for calling [`Canvas::dispose`].
///
/// # Object Safety
///
/// The trait is object-safe so a window can hold `Rc<RefCell<dyn Canvas>>`
/// regardless of which concrete canvas backs it. Construction lives in the
/// separate [`CanvasNew`] trait for that reason.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn dimensions(&self) -> Size<u32> {
        Size::new(self.width(), self.height())
    }

    /// Copy the current dimensions into `dst` without allocating.
    fn dimensions_into<'a>(&self, dst: &'a mut Size<u32>) -> &'a mut Size<u32> {
        dst.set(self.dimensions())
    }

    /// Change the surface size. Contents are not preserved.
    fn resize(&mut self, width: u32, height: u32);

    /// Finish the current frame and flush pending work.
    fn end(&mut self);

    /// Release the backing resources. Further drawing is undefined.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Canvases that a window can create (and therefore own) on its own.
pub trait CanvasNew: Canvas + Sized {
    fn with_size(width: u32, height: u32) -> Self;
}

/// A canvas shared between a window and its external owner.
pub type SharedCanvas<C> = Rc<RefCell<C>>;

/// Wrap a canvas so it can be lent to a window.
pub fn shared<C: Canvas>(canvas: C) -> SharedCanvas<C> {
    Rc::new(RefCell::new(canvas))
}
