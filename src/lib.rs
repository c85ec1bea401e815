#![cfg(target_arch = "wasm32")]
use crate::constants::{HERO_ID, OVERLAY_ID, TOPO_LAYER_ID};
use instant::Instant;
use mask_core::{MaskMotionController, MotionParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod parallax;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero mask starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let hero = dom::html_element_by_id(&document, HERO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HERO_ID))?;
    let overlay = dom::html_element_by_id(&document, OVERLAY_ID);
    if overlay.is_none() {
        log::warn!("missing #{}, mask output disabled", OVERLAY_ID);
    }
    let topo_layer = dom::html_element_by_id(&document, TOPO_LAYER_ID);
    if topo_layer.is_none() {
        log::warn!("missing #{}, parallax disabled", TOPO_LAYER_ID);
    }

    // First idle hint is scheduled from page start
    let controller = Rc::new(RefCell::new(MaskMotionController::new(
        MotionParams::default(),
        Instant::now(),
    )));

    if let Some(el) = &overlay {
        controller
            .borrow_mut()
            .on_layout_changed(dom::bounding_rect(el));
        events::wire_layout_tracking(&window, el.clone(), controller.clone());
    }

    events::wire_hero_pointer(events::PointerWiring {
        hero,
        overlay: overlay.clone(),
        controller: controller.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        window,
        controller,
        overlay,
        topo_layer,
    }));
    frame::start_loop(frame_ctx);
    log::info!("hero mask running");
    Ok(())
}
