//! Vellum UI - window and widget composition
//!
//! A [`Window`] owns (or borrows) a drawable [`Canvas`](vellum_render::Canvas),
//! keeps a flat, insertion-ordered list of widgets, shares one [`AttachInfo`]
//! with every widget it adopts and tracks whether the surface needs a redraw.
//!
//! # Quick Start
//!
//! ```
//! use vellum_render::SoftwareCanvas;
//! use vellum_ui::prelude::*;
//!
//! let mut window = Window::new::<SoftwareCanvas>(800, 600)?;
//! let panel = widget_ref(WidgetBase::new().with_name("panel"));
//! window.add_widget(panel.clone())?;
//!
//! if window.needs_redraw() {
//!     window.draw()?;
//! }
//!
//! window.remove_widget(&panel)?;
//! assert!(panel.borrow().parent().is_none());
//! # Ok::<(), vellum_ui::UiError>(())
//! ```
//!
//! # Capabilities
//!
//! - [`WidgetManager`]: add, remove, clear and iterate children
//! - [`WidgetParent`]: parent, layout-request and bounds queries
//!
//! Windows implement both.

pub mod attach;
pub mod bounds;
pub mod dirty;
pub mod error;
pub mod widget;
pub mod window;

pub use attach::AttachInfo;
pub use bounds::{Bounds, Rect, WindowBounds};
pub use dirty::DirtyRegion;
pub use error::{UiError, UiResult};
pub use widget::{
    Children, NodeId, Widget, WidgetBase, WidgetIter, WidgetManager, WidgetParent, WidgetRef,
    same_widget, widget_ref,
};
pub use window::{NoHooks, Window, WindowDescriptor, WindowHooks};

pub mod prelude {
    pub use crate::{
        Bounds, Rect, UiError, UiResult, Widget, WidgetBase, WidgetManager, WidgetParent,
        WidgetRef, Window, WindowDescriptor, WindowHooks, widget_ref,
    };
}
