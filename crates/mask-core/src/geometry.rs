use glam::DVec2;

/// Bounding box of the tracked region in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a viewport point into coordinates relative to the top-left corner.
    #[inline]
    pub fn to_local(&self, viewport: DVec2) -> DVec2 {
        DVec2::new(viewport.x - self.left, viewport.y - self.top)
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Componentwise [`lerp`].
#[inline]
pub fn lerp_pos(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    DVec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn lerp_converges_without_overshoot() {
        for &rate in &[0.035, 0.06, 0.07, 0.1, 0.12, 0.5, 1.0] {
            for &(start, target) in &[(0.0, 250.0), (250.0, 0.0), (-9999.0, 120.0)] {
                let mut x: f64 = start;
                let mut prev_gap = (target - x).abs();
                for _ in 0..2000 {
                    x = lerp(x, target, rate);
                    let gap = (target - x).abs();
                    assert!(gap <= prev_gap, "gap grew at rate {rate}");
                    // never crosses the target
                    assert!((x - target) * (start - target) >= 0.0);
                    prev_gap = gap;
                }
                assert!(prev_gap < 1e-6, "rate {rate} did not converge: {prev_gap}");
            }
        }
    }

    #[test]
    fn lerp_pos_is_componentwise() {
        let p = lerp_pos(DVec2::new(0.0, 100.0), DVec2::new(100.0, 0.0), 0.5);
        assert_eq!(p, DVec2::new(50.0, 50.0));
    }

    #[test]
    fn to_local_subtracts_origin() {
        let r = Rect::new(40.0, 25.0, 600.0, 800.0);
        assert_eq!(r.to_local(DVec2::new(140.0, 105.0)), DVec2::new(100.0, 80.0));
    }
}
