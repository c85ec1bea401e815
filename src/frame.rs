use crate::dom;
use crate::overlay;
use crate::parallax;
use instant::Instant;
use mask_core::MaskMotionController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub controller: Rc<RefCell<MaskMotionController>>,
    pub overlay: Option<web::HtmlElement>,
    pub topo_layer: Option<web::HtmlElement>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let (mask, view_pos) = {
            let mut c = self.controller.borrow_mut();
            let mask = c.advance_frame(now);
            (mask, c.state().view_pos)
        };

        if let Some(el) = &self.overlay {
            overlay::apply_mask(el, &mask);
        }

        // Parallax keeps following the last pointer position, sweep or not
        if let Some(layer) = &self.topo_layer {
            let viewport = dom::viewport_size(&self.window);
            overlay::apply_parallax(layer, parallax::offset(view_pos, viewport));
        }
    }
}

/// Drive `frame` from requestAnimationFrame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
