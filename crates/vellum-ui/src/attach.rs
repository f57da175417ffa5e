use crate::{bounds::WindowBounds, widget::NodeId};

/// Context shared by a window with every widget attached to it.
///
/// Exactly one instance exists per window, created with the window and
/// handed out by `Rc` clone. Widgets compare it with [`Rc::ptr_eq`] to find
/// out whether they live on the same window.
///
/// [`Rc::ptr_eq`]: std::rc::Rc::ptr_eq
#[derive(Debug)]
pub struct AttachInfo {
    window: NodeId,
    bounds: WindowBounds,
}

impl AttachInfo {
    pub(crate) fn new(window: NodeId, bounds: WindowBounds) -> Self {
        Self { window, bounds }
    }

    /// Id of the owning window.
    pub fn window_id(&self) -> NodeId {
        self.window
    }

    /// Live coordinate frame of the owning window.
    pub fn window_bounds(&self) -> &WindowBounds {
        &self.bounds
    }
}
