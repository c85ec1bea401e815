use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use mask_core::MaskMotionController;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-measure the overlay after resizes settle and once the page has loaded.
pub fn wire_layout_tracking(
    window: &web::Window,
    overlay: web::HtmlElement,
    controller: Rc<RefCell<MaskMotionController>>,
) {
    let remeasure: Rc<dyn Fn()> = Rc::new(move || {
        controller
            .borrow_mut()
            .on_layout_changed(dom::bounding_rect(&overlay));
    });

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let settle = {
        let pending = pending.clone();
        let remeasure = remeasure.clone();
        Closure::wrap(Box::new(move || {
            pending.set(None);
            remeasure();
        }) as Box<dyn FnMut()>)
    };

    let wnd = window.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        if let Some(handle) = pending.take() {
            wnd.clear_timeout_with_handle(handle);
        }
        match wnd.set_timeout_with_callback_and_timeout_and_arguments_0(
            settle.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::warn!("resize debounce timer failed: {:?}", e),
        }
    });

    dom::add_listener(window, "load", move |_: web::Event| remeasure());
}
