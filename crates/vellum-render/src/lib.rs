//! Drawable surfaces for Vellum windows.
//!
//! A [`Canvas`] is the pixel surface a window draws into. The window layer
//! only needs to resize it, end a frame and release it; everything about how
//! pixels are produced lives behind the trait.

pub mod canvas;
pub mod color;
pub mod software;

pub use canvas::{Canvas, CanvasNew, SharedCanvas, shared};
pub use color::Color;
pub use software::SoftwareCanvas;
