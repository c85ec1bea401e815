use crate::dom;
use instant::Instant;
use mask_core::MaskMotionController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub hero: web::HtmlElement,
    /// Bounds source; re-measured on touch start since the page may have scrolled.
    pub overlay: Option<web::HtmlElement>,
    pub controller: Rc<RefCell<MaskMotionController>>,
}

pub fn wire_hero_pointer(w: PointerWiring) {
    wire_mouse(&w);
    wire_touch(&w);
}

fn wire_mouse(w: &PointerWiring) {
    let c = w.controller.clone();
    dom::add_listener(&w.hero, "mouseenter", move |_: web::MouseEvent| {
        c.borrow_mut().on_pointer_enter();
    });

    let c = w.controller.clone();
    dom::add_listener(&w.hero, "mousemove", move |ev: web::MouseEvent| {
        c.borrow_mut()
            .on_pointer_move(Instant::now(), ev.client_x() as f64, ev.client_y() as f64);
    });

    let c = w.controller.clone();
    dom::add_listener(&w.hero, "mouseleave", move |_: web::MouseEvent| {
        c.borrow_mut().on_pointer_leave(Instant::now());
    });
}

fn wire_touch(w: &PointerWiring) {
    let c = w.controller.clone();
    let overlay = w.overlay.clone();
    dom::add_listener(&w.hero, "touchstart", move |ev: web::TouchEvent| {
        let mut ctl = c.borrow_mut();
        if let Some(el) = &overlay {
            ctl.on_layout_changed(dom::bounding_rect(el));
        }
        match first_touch(&ev) {
            Some((x, y)) => ctl.on_touch_start(Instant::now(), x, y),
            None => ctl.on_pointer_enter(),
        }
    });

    let c = w.controller.clone();
    dom::add_listener(&w.hero, "touchmove", move |ev: web::TouchEvent| {
        if let Some((x, y)) = first_touch(&ev) {
            c.borrow_mut().on_touch_move(Instant::now(), x, y);
        }
    });

    let c = w.controller.clone();
    dom::add_listener(&w.hero, "touchend", move |_: web::TouchEvent| {
        c.borrow_mut().on_touch_end(Instant::now());
    });
}

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}
