//! Idle hint sweep timeline.
//!
//! The sweep moves the mask across the upper-middle of the overlay while
//! growing it to [`SWEEP_PEAK_SIZE`], then shrinks it back to zero in place.
//! [`HintSweep`] only answers "where should the mask be headed at time t";
//! the controller does the interpolation.

use crate::constants::*;
use crate::geometry::Rect;
use glam::DVec2;
use instant::Instant;
use std::f64::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct HintSweep {
    started: Instant,
    duration: Duration,
    anchor: DVec2,
}

/// Targets for one sweep step. `position` is `None` once the mask has stopped
/// moving and only its size is shrinking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepTarget {
    pub position: Option<DVec2>,
    pub mask_size: f64,
}

impl HintSweep {
    pub fn new(started: Instant, duration: Duration, bounds: &Rect) -> Self {
        let anchor = DVec2::new(
            bounds.width * SWEEP_ANCHOR_X_FRAC,
            bounds.height * SWEEP_ANCHOR_Y_FRAC,
        );
        Self {
            started,
            duration,
            anchor,
        }
    }

    #[inline]
    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    /// Left end of the sweep path; the mask is placed here when the sweep begins.
    #[inline]
    pub fn start_position(&self) -> DVec2 {
        self.anchor - DVec2::new(SWEEP_SPAN_PX * 0.5, 0.0)
    }

    /// Normalized progress in \[0, 1\].
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        if now <= self.started {
            return 0.0;
        }
        let elapsed = now.duration_since(self.started).as_secs_f64();
        (elapsed / total).min(1.0)
    }

    pub fn target_at(&self, t: f64) -> SweepTarget {
        if t < SWEEP_GROW_PHASE {
            let sweep_t = t / SWEEP_GROW_PHASE;
            let start = self.start_position();
            SweepTarget {
                position: Some(DVec2::new(
                    start.x + sweep_t * SWEEP_SPAN_PX,
                    start.y + (sweep_t * PI).sin() * SWEEP_BOB_PX,
                )),
                mask_size: SWEEP_PEAK_SIZE * (sweep_t * 2.0).min(1.0),
            }
        } else {
            let decay_t = (t - SWEEP_GROW_PHASE) / (1.0 - SWEEP_GROW_PHASE);
            SweepTarget {
                position: None,
                mask_size: SWEEP_PEAK_SIZE * (1.0 - decay_t),
            }
        }
    }
}
