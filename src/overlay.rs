use crate::constants::{PROP_MASK_SIZE, PROP_MASK_X, PROP_MASK_Y};
use crate::parallax;
use glam::DVec2;
use mask_core::MaskFrame;
use web_sys as web;

/// CSS custom property assignments for one mask frame.
pub fn mask_properties(frame: &MaskFrame) -> [(&'static str, String); 3] {
    [
        (PROP_MASK_X, format!("{}px", frame.center.x)),
        (PROP_MASK_Y, format!("{}px", frame.center.y)),
        (PROP_MASK_SIZE, format!("{}px", frame.radius)),
    ]
}

#[inline]
pub fn apply_mask(overlay: &web::HtmlElement, frame: &MaskFrame) {
    let style = overlay.style();
    for (name, value) in mask_properties(frame) {
        _ = style.set_property(name, &value);
    }
}

#[inline]
pub fn apply_parallax(layer: &web::HtmlElement, offset: DVec2) {
    _ = layer
        .style()
        .set_property("transform", &parallax::transform_css(offset));
}
