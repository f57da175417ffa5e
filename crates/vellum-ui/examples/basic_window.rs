//! Builds a window over a software canvas, attaches a few widgets and runs a
//! short redraw loop.
//!
//! Run with `RUST_LOG=vellum_ui=trace` to see every invalidation.

use vellum_core::{Config, logging};
use vellum_render::{Canvas, Color, SoftwareCanvas, shared};
use vellum_ui::prelude::*;
use vellum_ui::DirtyRegion;

struct FrameCounter {
    frames: u32,
    redraws: u32,
}

impl WindowHooks for FrameCounter {
    fn on_resize(&mut self, width: u32, height: u32) {
        tracing::info!("Window resized to {}x{}", width, height);
    }

    fn on_draw(&mut self, dirty: &DirtyRegion) {
        self.frames += 1;
        if !dirty.is_empty() {
            self.redraws += 1;
        }
    }

    fn on_dispose(&mut self) {
        tracing::info!("{} frames, {} with damage", self.frames, self.redraws);
    }
}

fn main() -> Result<(), UiError> {
    logging::init_with_config(&Config::default().with_log_filter("debug"));

    let canvas = shared(SoftwareCanvas::new(1, 1));
    let mut window = Window::with_canvas(320, 240, canvas.clone())?.with_hooks(FrameCounter {
        frames: 0,
        redraws: 0,
    });

    let header = widget_ref(WidgetBase::new().with_name("header"));
    let body = widget_ref(WidgetBase::new().with_name("body"));
    window.add_widget(header.clone())?;
    window.add_widget(body.clone())?;

    for frame in 0..6 {
        if frame == 3 {
            window.resize(640, 480)?;
        }
        canvas.borrow_mut().clear(Color::from_hex(0x202020));
        window.draw()?;
    }

    for child in &window {
        let child = child.borrow();
        tracing::info!(
            "{} {} anchored to {:?}",
            child.debug_name(),
            child.id(),
            child.window_bounds()
        );
    }

    window.remove_widget(&header)?;
    window.clear()?;
    window.dispose();

    let canvas = canvas.borrow();
    tracing::info!(
        "Canvas still alive at {}x{} after {} frames",
        canvas.width(),
        canvas.height(),
        canvas.frame_count()
    );
    Ok(())
}
