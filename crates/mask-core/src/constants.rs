/// Mask motion tuning constants.
///
/// Timings are in milliseconds, rates are per-frame interpolation factors and
/// sizes are CSS pixels. These are the fixed parameters of the hero effect.
use glam::DVec2;

// Timers (milliseconds)
pub const FADE_DELAY_MS: u64 = 200; // pointer still for this long -> decay
pub const IDLE_HINT_DELAY_MS: u64 = 3000; // quiet period before an idle hint
pub const SWEEP_DURATION_MS: u64 = 1800;

// Per-frame interpolation rates
pub const FOLLOW_RATE: f64 = 0.07;
pub const SIZE_RATE: f64 = 0.06;
pub const IDLE_DRIFT_FACTOR: f64 = 0.5; // idle drift uses FOLLOW_RATE * this
pub const SWEEP_POSITION_RATE: f64 = 0.12;
pub const SWEEP_SIZE_RATE: f64 = 0.10;

// Mask sizes (radius, px)
pub const MAX_MASK_SIZE: f64 = 250.0;
pub const SWEEP_PEAK_SIZE: f64 = 180.0;
pub const DECAY_DONE_SIZE: f64 = 2.0; // below this a decaying mask is parked

// Parking positions
pub const OFFSCREEN: DVec2 = DVec2::new(-9999.0, -9999.0);
pub const IDLE_PARK: DVec2 = DVec2::new(-400.0, -400.0);

// Sweep geometry, relative to the overlay bounds
pub const SWEEP_ANCHOR_X_FRAC: f64 = 0.5;
pub const SWEEP_ANCHOR_Y_FRAC: f64 = 0.35; // upper-middle of the portrait
pub const SWEEP_SPAN_PX: f64 = 120.0;
pub const SWEEP_BOB_PX: f64 = 15.0;
pub const SWEEP_GROW_PHASE: f64 = 0.6; // fraction of the sweep spent moving
