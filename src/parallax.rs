use crate::constants::{PARALLAX_X_PX, PARALLAX_Y_PX};
use glam::DVec2;

/// Offset for the topo layer given the pointer's viewport position.
///
/// Zero with the pointer at the viewport centre, reaching the full amplitude
/// at the edges. A zero-sized viewport yields no offset.
#[inline]
pub fn offset(view_pos: DVec2, viewport: DVec2) -> DVec2 {
    let half = viewport * 0.5;
    if half.x <= 0.0 || half.y <= 0.0 {
        return DVec2::ZERO;
    }
    let n = (view_pos - half) / half;
    DVec2::new(n.x * PARALLAX_X_PX, n.y * PARALLAX_Y_PX)
}

#[inline]
pub fn transform_css(offset: DVec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
