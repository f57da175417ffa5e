//! Test utilities for Vellum.
//!
//! The main component is [`MockCanvas`], a [`Canvas`](vellum_render::Canvas)
//! that performs no drawing and records every call it receives so tests can
//! verify how a window drives its surface.
//!
//! # Example
//!
//! ```rust
//! use vellum_render::Canvas;
//! use vellum_test_utils::MockCanvas;
//!
//! let mut canvas = MockCanvas::new(100, 50);
//! let recorder = canvas.recorder();
//!
//! canvas.resize(200, 100);
//! canvas.dispose();
//!
//! // The recorder outlives the canvas
//! drop(canvas);
//! assert_eq!(recorder.count_resizes(), 1);
//! assert_eq!(recorder.count_disposes(), 1);
//! ```

pub mod mock_canvas;

pub use mock_canvas::*;
