//! Mock implementation of [`Canvas`] for testing.

use std::{cell::RefCell, sync::Arc};

use parking_lot::Mutex;
use vellum_render::{Canvas, CanvasNew};

/// Records a canvas call for verification in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasCall {
    Create { width: u32, height: u32 },
    Resize { width: u32, height: u32 },
    End,
    Dispose,
}

thread_local! {
    static LAST_CREATED: RefCell<Option<CanvasRecorder>> = const { RefCell::new(None) };
}

/// Shared log of [`CanvasCall`]s.
///
/// # Borrow Checking Pattern: Shared Log
///
/// The recorder is cloned out of the canvas before the canvas is handed to
/// the code under test. Both clones point at the same `Mutex<Vec<_>>`, so the
/// test can still read the log after the canvas has been moved or dropped.
#[derive(Debug, Clone, Default)]
pub struct CanvasRecorder {
    calls: Arc<Mutex<Vec<CanvasCall>>>,
}

impl CanvasRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: CanvasCall) {
        self.calls.lock().push(call);
    }

    /// Snapshot of every recorded call, in order.
    pub fn calls(&self) -> Vec<CanvasCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn count(&self, pred: impl Fn(&CanvasCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| pred(call)).count()
    }

    pub fn count_resizes(&self) -> usize {
        self.count(|call| matches!(call, CanvasCall::Resize { .. }))
    }

    pub fn count_ends(&self) -> usize {
        self.count(|call| matches!(call, CanvasCall::End))
    }

    pub fn count_disposes(&self) -> usize {
        self.count(|call| matches!(call, CanvasCall::Dispose))
    }

    /// The most recent call, if any.
    pub fn last(&self) -> Option<CanvasCall> {
        self.calls.lock().last().copied()
    }
}

/// A canvas that only tracks its size and records calls.
///
/// Unlike a real canvas, disposing twice is recorded twice, which is what
/// lets tests assert that a window disposes exactly once.
#[derive(Debug)]
pub struct MockCanvas {
    width: u32,
    height: u32,
    disposed: bool,
    recorder: CanvasRecorder,
}

impl MockCanvas {
    /// Create a mock canvas with a fresh recorder.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_recorder(width, height, CanvasRecorder::new())
    }

    /// Create a mock canvas that logs into an existing recorder.
    pub fn with_recorder(width: u32, height: u32, recorder: CanvasRecorder) -> Self {
        recorder.record(CanvasCall::Create { width, height });
        LAST_CREATED.with(|last| *last.borrow_mut() = Some(recorder.clone()));
        Self {
            width,
            height,
            disposed: false,
            recorder,
        }
    }

    pub fn recorder(&self) -> CanvasRecorder {
        self.recorder.clone()
    }

    /// Recorder of the most recent `MockCanvas` created on this thread.
    ///
    /// Used to observe canvases that were constructed internally (for example
    /// by a window that owns its canvas).
    pub fn last_created() -> Option<CanvasRecorder> {
        LAST_CREATED.with(|last| last.borrow().clone())
    }
}

impl Canvas for MockCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.recorder.record(CanvasCall::Resize { width, height });
        self.width = width;
        self.height = height;
    }

    fn end(&mut self) {
        self.recorder.record(CanvasCall::End);
    }

    fn dispose(&mut self) {
        self.recorder.record(CanvasCall::Dispose);
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl CanvasNew for MockCanvas {
    fn with_size(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }
}
