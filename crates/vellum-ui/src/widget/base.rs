use std::rc::Rc;

use crate::{
    attach::AttachInfo,
    bounds::{Bounds, Rect},
};

use super::{NodeId, Widget};

/// Minimal widget: an id, a rectangle and attachment state.
///
/// Richer widgets embed a `WidgetBase` and forward the [`Widget`] methods
/// to it.
#[derive(Debug)]
pub struct WidgetBase {
    id: NodeId,
    name: &'static str,
    parent: Option<NodeId>,
    attach_info: Option<Rc<AttachInfo>>,
    bounds: Rect,
}

impl WidgetBase {
    pub fn new() -> Self {
        Self {
            id: NodeId::next(),
            name: "WidgetBase",
            parent: None,
            attach_info: None,
            bounds: Rect::ZERO,
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Stretch this widget over the whole window it is attached to.
    ///
    /// Returns `false` and leaves the bounds untouched when detached.
    pub fn fill_window(&mut self) -> bool {
        match self.window_bounds() {
            Some(frame) => {
                self.bounds = frame;
                true
            }
            None => false,
        }
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for WidgetBase {
    fn id(&self) -> NodeId {
        self.id
    }

    fn debug_name(&self) -> &str {
        self.name
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    fn attach_info(&self) -> Option<&Rc<AttachInfo>> {
        self.attach_info.as_ref()
    }

    fn set_attach_info(&mut self, attach_info: Option<Rc<AttachInfo>>) {
        self.attach_info = attach_info;
    }

    fn bounds(&self) -> &dyn Bounds {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut dyn Bounds {
        &mut self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_detached() {
        let widget = WidgetBase::new();
        assert_eq!(widget.parent(), None);
        assert!(widget.attach_info().is_none());
        assert!(!widget.is_attached());
        assert_eq!(widget.window_bounds(), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetBase::new();
        let b = WidgetBase::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_bounds_are_mutable() {
        let mut widget = WidgetBase::new().with_name("label");
        widget.bounds_mut().set(&Rect::new(0, 20, 40, 0)).unwrap();
        assert_eq!(widget.bounds().to_rect(), Rect::new(0, 20, 40, 0));
        assert_eq!(widget.debug_name(), "label");
    }

    #[test]
    fn test_fill_window_when_detached() {
        let mut widget = WidgetBase::new().with_bounds(Rect::new(1, 2, 3, 0));
        assert!(!widget.fill_window());
        assert_eq!(widget.bounds().to_rect(), Rect::new(1, 2, 3, 0));
    }
}
