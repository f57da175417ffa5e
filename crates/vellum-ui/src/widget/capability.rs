//! Capability traits for nodes that hold widgets.
//!
//! A type may implement either trait independently: a [`WidgetManager`]
//! owns an ordered child collection, a [`WidgetParent`] answers hierarchy
//! and geometry queries.

use std::slice;

use crate::{
    bounds::{Bounds, Rect},
    error::UiResult,
};

use super::{NodeId, WidgetRef, same_widget};

/// Read-only iterator over children in insertion order.
pub type WidgetIter<'a> = slice::Iter<'a, WidgetRef>;

/// Capability: node that can add, remove and enumerate widgets.
pub trait WidgetManager {
    /// Append `widget`, make this node its parent and share the attach
    /// context with it.
    fn add_widget(&mut self, widget: WidgetRef) -> UiResult<()>;

    /// Detach `widget` if it is a child.
    ///
    /// Returns `Ok(false)` without touching anything when it is not.
    fn remove_widget(&mut self, widget: &WidgetRef) -> UiResult<bool>;

    /// Detach every child.
    fn clear(&mut self) -> UiResult<()>;

    fn children(&self) -> Children<'_>;

    fn iter(&self) -> WidgetIter<'_> {
        self.children().iter()
    }
}

/// Capability: node in the widget hierarchy with its own bounds.
pub trait WidgetParent {
    fn node_id(&self) -> NodeId;

    fn parent(&self) -> Option<NodeId>;

    fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Ask for a layout pass.
    fn request_layout(&mut self) -> UiResult<()>;

    fn is_layout_requested(&self) -> bool;

    fn bounds(&self) -> &dyn Bounds;

    /// Copy the bounds into `dst` without allocating.
    fn bounds_into<'a>(&self, dst: &'a mut Rect) -> &'a mut Rect {
        self.bounds().copy_into(dst)
    }

    fn set_bounds(&mut self, bounds: &dyn Bounds) -> UiResult<()>;
}

/// Read-only view of a child collection.
///
/// Supports iteration and membership queries only. No mutable access to the
/// underlying collection is ever handed out.
#[derive(Clone, Copy)]
pub struct Children<'a> {
    widgets: &'a [WidgetRef],
}

impl<'a> Children<'a> {
    pub(crate) fn new(widgets: &'a [WidgetRef]) -> Self {
        Self { widgets }
    }

    pub fn iter(&self) -> WidgetIter<'a> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn contains(&self, widget: &WidgetRef) -> bool {
        self.widgets.iter().any(|child| same_widget(child, widget))
    }

    /// Number of entries referring to `widget`.
    pub fn count_of(&self, widget: &WidgetRef) -> usize {
        self.widgets
            .iter()
            .filter(|child| same_widget(child, widget))
            .count()
    }
}

impl<'a> IntoIterator for Children<'a> {
    type Item = &'a WidgetRef;
    type IntoIter = WidgetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.widgets.iter()
    }
}

impl std::fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.widgets.iter().map(|w| w.borrow().id()))
            .finish()
    }
}
