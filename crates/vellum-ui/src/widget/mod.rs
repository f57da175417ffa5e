//! The widget contract consumed by windows.

mod base;
mod capability;

pub use base::WidgetBase;
pub use capability::{Children, WidgetIter, WidgetManager, WidgetParent};

use std::{
    cell::RefCell,
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    attach::AttachInfo,
    bounds::{Bounds, Rect},
};

/// Process-unique identifier for windows and widgets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A widget that can be attached to a [`Window`](crate::Window).
///
/// The window owns neither the parent relation nor the attach context: it
/// sets both when the widget is added and clears both when it is removed.
/// A detached widget reports `None` for each.
pub trait Widget {
    fn id(&self) -> NodeId;

    /// Get the widget's name for debugging.
    fn debug_name(&self) -> &str {
        "Widget"
    }

    /// Id of the node this widget is attached to.
    fn parent(&self) -> Option<NodeId>;

    fn set_parent(&mut self, parent: Option<NodeId>);

    fn attach_info(&self) -> Option<&Rc<AttachInfo>>;

    fn set_attach_info(&mut self, attach_info: Option<Rc<AttachInfo>>);

    fn bounds(&self) -> &dyn Bounds;

    fn bounds_mut(&mut self) -> &mut dyn Bounds;

    fn is_attached(&self) -> bool {
        self.attach_info().is_some()
    }

    /// Snapshot of the owning window's frame, if attached.
    fn window_bounds(&self) -> Option<Rect> {
        self.attach_info()
            .map(|info| info.window_bounds().to_rect())
    }
}

/// Shared handle to a widget.
///
/// Children are identified by handle identity, not by value.
pub type WidgetRef = Rc<RefCell<dyn Widget>>;

/// Wrap a widget in a [`WidgetRef`].
pub fn widget_ref(widget: impl Widget + 'static) -> WidgetRef {
    Rc::new(RefCell::new(widget))
}

/// Whether two handles point at the same widget.
pub fn same_widget(a: &WidgetRef, b: &WidgetRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
