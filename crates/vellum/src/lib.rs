//! Vellum - window and widget composition for 2D surfaces
//!
//! This crate re-exports the Vellum sub-crates:
//!
//! - [`vellum_core`]: logging bootstrap, configuration, geometry
//! - [`vellum_render`]: the `Canvas` contract and a software canvas
//! - [`vellum_ui`]: windows, widgets, bounds and dirty tracking
//!
//! # Quick Start
//!
//! ```
//! use vellum::prelude::*;
//!
//! vellum::init_logging();
//!
//! let mut window = Window::new::<SoftwareCanvas>(640, 480)?;
//! window.add_widget(widget_ref(WidgetBase::new()))?;
//! window.draw()?;
//! # Ok::<(), UiError>(())
//! ```

pub use vellum_core;
pub use vellum_render;
pub use vellum_ui;

/// Install the default `tracing` subscriber.
///
/// Returns `false` if one was already installed.
pub fn init_logging() -> bool {
    let installed = vellum_core::logging::init();
    if installed {
        tracing::debug!("Vellum logging initialized");
    }
    installed
}

pub mod prelude {
    pub use vellum_core::{Config, Size};
    pub use vellum_render::{Canvas, CanvasNew, Color, SharedCanvas, SoftwareCanvas, shared};
    pub use vellum_ui::prelude::*;
}
