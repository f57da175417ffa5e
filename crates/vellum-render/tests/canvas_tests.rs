//! Canvas trait behavior through shared handles.

use vellum_core::Size;
use vellum_render::{Canvas, CanvasNew, Color, SoftwareCanvas, shared};

#[test]
fn test_dimensions_into_reuses_destination() {
    let canvas = SoftwareCanvas::with_size(640, 480);
    let mut dst = Size::new(0, 0);
    let out = canvas.dimensions_into(&mut dst);
    assert_eq!(*out, Size::new(640, 480));
    assert_eq!(dst, Size::new(640, 480));
}

#[test]
fn test_shared_canvas_coerces_to_trait_object() {
    let canvas = shared(SoftwareCanvas::new(10, 20));
    let erased: std::rc::Rc<std::cell::RefCell<dyn Canvas>> = canvas.clone();

    erased.borrow_mut().resize(30, 40);
    assert_eq!(canvas.borrow().dimensions(), Size::new(30, 40));
}

#[test]
fn test_color_round_trips_through_pixels() {
    let mut canvas = SoftwareCanvas::new(1, 1);
    let color = Color::from_hex_alpha(0x11223344);
    canvas.set_pixel(0, 0, color);
    assert_eq!(canvas.pixels()[0], 0x11223344);
    assert_eq!(canvas.pixel(0, 0), Some(color));
}
