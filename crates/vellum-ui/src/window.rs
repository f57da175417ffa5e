//! The root container that owns a canvas and a flat list of widgets.

use std::{cell::RefCell, fmt, rc::Rc};

use vellum_core::Size;
use vellum_render::{Canvas, CanvasNew, SharedCanvas};

use crate::{
    attach::AttachInfo,
    bounds::{Bounds, WindowBounds},
    dirty::DirtyRegion,
    error::{UiError, UiResult},
    widget::{Children, NodeId, WidgetManager, WidgetParent, WidgetRef, same_widget},
};

/// Descriptor for creating a window that owns its canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub width: u32,
    pub height: u32,
    /// Name used in logs and `Debug` output.
    pub label: Option<String>,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            label: None,
        }
    }
}

/// Extension points called by [`Window`] after its own work is done.
///
/// All methods default to doing nothing.
pub trait WindowHooks {
    /// Called after the canvas was resized and the window invalidated.
    fn on_resize(&mut self, _width: u32, _height: u32) {}

    /// Called after the canvas frame was ended. Draw submission goes here.
    ///
    /// `dirty` is the region invalidated since the previous draw; it is
    /// reset once this returns.
    fn on_draw(&mut self, _dirty: &DirtyRegion) {}

    /// Called once, after the canvas was released (if owned).
    fn on_dispose(&mut self) {}
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl WindowHooks for NoHooks {}

/// Root of a widget composition.
///
/// A window draws into a [`Canvas`] that it either created itself (and
/// disposes) or borrowed from a caller (and never disposes). It has no
/// parent, and its bounds are the live `(0, 0)` to `(width, height)` frame
/// of the canvas.
///
/// # Lifecycle
///
/// Construct, add widgets, [`draw`](Window::draw) every frame, then
/// [`dispose`](Window::dispose). Disposal detaches every child, is idempotent
/// and also happens on drop. After disposal every mutating operation fails
/// with [`UiError::Disposed`]; accessors keep working.
///
/// # Example
///
/// ```
/// use vellum_render::SoftwareCanvas;
/// use vellum_ui::{
///     Bounds, Rect, Widget, WidgetBase, WidgetManager, WidgetParent, Window, widget_ref,
/// };
///
/// let mut window = Window::new::<SoftwareCanvas>(320, 240).unwrap();
/// let label = widget_ref(WidgetBase::new());
/// window.add_widget(label.clone()).unwrap();
///
/// assert_eq!(label.borrow().parent(), Some(window.node_id()));
/// assert!(window.needs_redraw());
///
/// window.resize(640, 480).unwrap();
/// assert_eq!(window.bounds().to_rect(), Rect::new(0, 480, 640, 0));
///
/// window.draw().unwrap();
/// window.dispose();
/// ```
pub struct Window {
    id: NodeId,
    label: Option<String>,
    canvas: Rc<RefCell<dyn Canvas>>,
    owns_canvas: bool,
    children: Vec<WidgetRef>,
    dirty: DirtyRegion,
    layout_requested: bool,
    attach_info: Rc<AttachInfo>,
    bounds: WindowBounds,
    hooks: Box<dyn WindowHooks>,
    disposed: bool,
}

impl Window {
    /// Create a window that owns a new `width` x `height` canvas.
    pub fn new<C: CanvasNew + 'static>(width: u32, height: u32) -> UiResult<Self> {
        Self::from_descriptor::<C>(&WindowDescriptor {
            width,
            height,
            label: None,
        })
    }

    /// Create a window that owns a new canvas sized by `descriptor`.
    pub fn from_descriptor<C: CanvasNew + 'static>(descriptor: &WindowDescriptor) -> UiResult<Self> {
        validate_dimensions(descriptor.width, descriptor.height)?;
        let canvas: Rc<RefCell<dyn Canvas>> = Rc::new(RefCell::new(C::with_size(
            descriptor.width,
            descriptor.height,
        )));
        Ok(Self::from_parts(canvas, true, descriptor.label.clone()))
    }

    /// Create a window drawing into a caller-owned canvas.
    ///
    /// The canvas is resized to `width` x `height` immediately. The window
    /// never disposes it.
    pub fn with_canvas<C: Canvas + 'static>(
        width: u32,
        height: u32,
        canvas: SharedCanvas<C>,
    ) -> UiResult<Self> {
        validate_dimensions(width, height)?;
        let canvas: Rc<RefCell<dyn Canvas>> = canvas;
        let window = Self::from_parts(canvas, false, None);
        window.canvas.borrow_mut().resize(width, height);
        Ok(window)
    }

    fn from_parts(canvas: Rc<RefCell<dyn Canvas>>, owns_canvas: bool, label: Option<String>) -> Self {
        let id = NodeId::next();
        let bounds = WindowBounds::new(Rc::downgrade(&canvas));
        let attach_info = Rc::new(AttachInfo::new(id, bounds.clone()));

        tracing::debug!(
            "Creating window {} ({}, owns canvas: {})",
            id,
            label.as_deref().unwrap_or("unnamed"),
            owns_canvas
        );

        Self {
            id,
            label,
            canvas,
            owns_canvas,
            children: Vec::new(),
            dirty: DirtyRegion::empty(),
            layout_requested: false,
            attach_info,
            bounds,
            hooks: Box::new(NoHooks),
            disposed: false,
        }
    }

    /// Replace the extension hooks.
    pub fn set_hooks(&mut self, hooks: impl WindowHooks + 'static) {
        self.hooks = Box::new(hooks);
    }

    pub fn with_hooks(mut self, hooks: impl WindowHooks + 'static) -> Self {
        self.set_hooks(hooks);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.canvas.borrow().width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.borrow().height()
    }

    pub fn dimensions(&self) -> Size<u32> {
        self.canvas.borrow().dimensions()
    }

    /// Copy the dimensions into `dst` without allocating.
    pub fn dimensions_into<'a>(&self, dst: &'a mut Size<u32>) -> &'a mut Size<u32> {
        self.canvas.borrow().dimensions_into(dst)
    }

    /// Whether this window created its canvas and is responsible for it.
    pub fn owns_canvas(&self) -> bool {
        self.owns_canvas
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The context shared with every attached widget.
    pub fn attach_info(&self) -> &Rc<AttachInfo> {
        &self.attach_info
    }

    /// The live, read-only coordinate frame of this window.
    pub fn window_bounds(&self) -> &WindowBounds {
        &self.bounds
    }

    pub fn dirty_region(&self) -> &DirtyRegion {
        &self.dirty
    }

    /// Whether anything was invalidated since the last [`draw`](Window::draw).
    pub fn needs_redraw(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Resize the canvas, invalidate everything and notify the hooks.
    pub fn resize(&mut self, width: u32, height: u32) -> UiResult<()> {
        self.ensure_live("resize")?;
        validate_dimensions(width, height)?;

        tracing::debug!("Resizing window {} to {}x{}", self.id, width, height);
        self.canvas.borrow_mut().resize(width, height);
        self.mark_dirty();
        self.hooks.on_resize(width, height);
        Ok(())
    }

    /// Mark the whole surface as needing a redraw.
    pub fn invalidate(&mut self) -> UiResult<()> {
        self.ensure_live("invalidate")?;
        self.mark_dirty();
        Ok(())
    }

    /// End the current canvas frame and hand the dirty region to the hooks.
    ///
    /// The dirty region is empty afterwards.
    pub fn draw(&mut self) -> UiResult<()> {
        self.ensure_live("draw")?;

        tracing::trace!("Drawing window {} (dirty: {})", self.id, self.dirty);
        self.canvas.borrow_mut().end();
        self.hooks.on_draw(&self.dirty);
        self.dirty.clear();
        Ok(())
    }

    /// Detach every child, release the canvas if this window owns it, then
    /// notify the hooks.
    ///
    /// Calling this more than once does nothing.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        tracing::debug!(
            "Disposing window {} ({} children, owns canvas: {})",
            self.id,
            self.children.len(),
            self.owns_canvas
        );
        self.detach_all();
        if self.owns_canvas {
            self.canvas.borrow_mut().dispose();
        }
        self.hooks.on_dispose();
    }

    fn mark_dirty(&mut self) {
        let Size { width, height } = self.dimensions();
        self.dirty.set_full(width, height);
        tracing::trace!("Invalidated window {}: {}", self.id, self.dirty);
    }

    fn ensure_live(&self, operation: &'static str) -> UiResult<()> {
        if self.disposed {
            tracing::warn!("'{}' called on disposed window {}", operation, self.id);
            return Err(UiError::Disposed);
        }
        Ok(())
    }

    /// Clear the widget's parent and attach context, unless another entry
    /// for it is still in the child list.
    fn detach(&self, widget: &WidgetRef) {
        if self.children.iter().any(|child| same_widget(child, widget)) {
            return;
        }
        let mut widget = widget.borrow_mut();
        widget.set_parent(None);
        widget.set_attach_info(None);
    }

    fn detach_all(&mut self) {
        let drained: Vec<WidgetRef> = self.children.drain(..).collect();
        for child in &drained {
            self.detach(child);
        }
    }
}

fn validate_dimensions(width: u32, height: u32) -> UiResult<()> {
    const MAX: u32 = i32::MAX as u32;
    if width > MAX || height > MAX {
        return Err(UiError::invalid_argument(format!(
            "window size {}x{} exceeds {}",
            width, height, MAX
        )));
    }
    Ok(())
}

impl WidgetManager for Window {
    /// Fails with [`UiError::InvalidArgument`] if the widget is attached to
    /// another node; remove it there first. Adding a widget that is already a
    /// child of this window appends a second entry.
    fn add_widget(&mut self, widget: WidgetRef) -> UiResult<()> {
        self.ensure_live("add_widget")?;

        {
            let mut w = widget.borrow_mut();
            if let Some(parent) = w.parent().filter(|parent| *parent != self.id) {
                return Err(UiError::invalid_argument(format!(
                    "{} {} is already attached to {}",
                    w.debug_name(),
                    w.id(),
                    parent
                )));
            }
            w.set_parent(Some(self.id));
            w.set_attach_info(Some(Rc::clone(&self.attach_info)));
            tracing::debug!("Adding {} {} to window {}", w.debug_name(), w.id(), self.id);
        }

        self.children.push(widget);
        self.mark_dirty();
        Ok(())
    }

    fn remove_widget(&mut self, widget: &WidgetRef) -> UiResult<bool> {
        self.ensure_live("remove_widget")?;

        let Some(index) = self
            .children
            .iter()
            .position(|child| same_widget(child, widget))
        else {
            return Ok(false);
        };

        let removed = self.children.remove(index);
        self.detach(&removed);
        tracing::debug!(
            "Removed {} from window {}",
            removed.borrow().id(),
            self.id
        );
        self.mark_dirty();
        Ok(true)
    }

    fn clear(&mut self) -> UiResult<()> {
        self.ensure_live("clear")?;

        tracing::debug!("Clearing {} children from window {}", self.children.len(), self.id);
        self.detach_all();
        self.mark_dirty();
        Ok(())
    }

    fn children(&self) -> Children<'_> {
        Children::new(&self.children)
    }
}

impl WidgetParent for Window {
    fn node_id(&self) -> NodeId {
        self.id
    }

    /// Always `None`: a window is a root.
    fn parent(&self) -> Option<NodeId> {
        None
    }

    fn has_parent(&self) -> bool {
        false
    }

    /// Records the request, then fails: windows do not schedule layout yet.
    fn request_layout(&mut self) -> UiResult<()> {
        self.layout_requested = true;
        Err(UiError::unsupported(
            "request_layout",
            "layout scheduling is not supported by windows",
        ))
    }

    fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    fn bounds(&self) -> &dyn Bounds {
        &self.bounds
    }

    fn set_bounds(&mut self, _bounds: &dyn Bounds) -> UiResult<()> {
        Err(UiError::unsupported(
            "set_bounds",
            "window bounds cannot be changed",
        ))
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a WidgetRef;
    type IntoIter = std::slice::Iter<'a, WidgetRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("size", &self.dimensions())
            .field("owns_canvas", &self.owns_canvas)
            .field("children", &self.children.len())
            .field("dirty", &self.dirty)
            .field("layout_requested", &self.layout_requested)
            .field("disposed", &self.disposed)
            .finish()
    }
}
