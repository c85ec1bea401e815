//! Hero mask motion state machine.
//!
//! The controller is driven from three directions: pointer/touch events, the
//! overlay layout, and one call to [`MaskMotionController::advance_frame`] per
//! rendered frame. Timers are deadlines polled at the start of each frame, and
//! the idle hint sweep is a mode of the same frame step, so there is only ever
//! one writer of the mask position and size.

use crate::constants::*;
use crate::geometry::{lerp, lerp_pos, Rect};
use crate::sweep::HintSweep;
use crate::timer::TimerSlot;
use glam::DVec2;
use instant::Instant;
use std::time::Duration;

/// Behaviour currently governing the frame step. Exactly one holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    ActiveFollow,
    Decaying,
    IdleHintSweep,
}

/// What the rendering side should draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskFrame {
    /// Mask centre in overlay-local pixels, or [`OFFSCREEN`] when parked.
    pub center: DVec2,
    /// Mask radius in pixels.
    pub radius: f64,
}

/// Timings and rates for the controller. `Default` gives the hero effect's values.
#[derive(Clone, Debug)]
pub struct MotionParams {
    pub fade_delay: Duration,
    pub idle_hint_delay: Duration,
    pub sweep_duration: Duration,
    pub follow_rate: f64,
    pub size_rate: f64,
    pub sweep_position_rate: f64,
    pub sweep_size_rate: f64,
    pub max_mask_size: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            fade_delay: Duration::from_millis(FADE_DELAY_MS),
            idle_hint_delay: Duration::from_millis(IDLE_HINT_DELAY_MS),
            sweep_duration: Duration::from_millis(SWEEP_DURATION_MS),
            follow_rate: FOLLOW_RATE,
            size_rate: SIZE_RATE,
            sweep_position_rate: SWEEP_POSITION_RATE,
            sweep_size_rate: SWEEP_SIZE_RATE,
            max_mask_size: MAX_MASK_SIZE,
        }
    }
}

/// Observable motion state.
#[derive(Clone, Debug)]
pub struct MotionState {
    pub target_pos: DVec2,
    pub current_pos: DVec2,
    /// Last pointer position in viewport coordinates.
    pub view_pos: DVec2,
    pub mask_size: f64,
    pub target_mask_size: f64,
    pub hovering: bool,
    pub overlay_bounds: Option<Rect>,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            target_pos: OFFSCREEN,
            current_pos: OFFSCREEN,
            view_pos: DVec2::ZERO,
            mask_size: 0.0,
            target_mask_size: 0.0,
            hovering: false,
            overlay_bounds: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    ActiveFollow,
    Decaying,
    Sweep(HintSweep),
}

pub struct MaskMotionController {
    params: MotionParams,
    state: MotionState,
    phase: Phase,
    fade_timer: TimerSlot,
    hint_timer: TimerSlot,
}

impl MaskMotionController {
    /// Create the controller parked offscreen, with the first idle hint
    /// already scheduled relative to `now`.
    pub fn new(params: MotionParams, now: Instant) -> Self {
        let mut c = Self {
            params,
            state: MotionState::default(),
            phase: Phase::Idle,
            fade_timer: TimerSlot::default(),
            hint_timer: TimerSlot::default(),
        };
        c.schedule_idle_hint(now);
        c
    }

    pub fn mode(&self) -> Mode {
        match self.phase {
            Phase::Idle => Mode::Idle,
            Phase::ActiveFollow => Mode::ActiveFollow,
            Phase::Decaying => Mode::Decaying,
            Phase::Sweep(_) => Mode::IdleHintSweep,
        }
    }

    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    #[inline]
    pub fn hint_scheduled(&self) -> bool {
        self.hint_timer.is_pending()
    }

    #[inline]
    pub fn hint_running(&self) -> bool {
        matches!(self.phase, Phase::Sweep(_))
    }

    #[inline]
    pub fn fade_pending(&self) -> bool {
        self.fade_timer.is_pending()
    }

    /// When the pending idle hint (if any) is due.
    #[inline]
    pub fn hint_deadline(&self) -> Option<Instant> {
        self.hint_timer.deadline()
    }

    pub fn on_layout_changed(&mut self, bounds: Rect) {
        log::debug!(
            "[mask] bounds {:.0},{:.0} {:.0}x{:.0}",
            bounds.left,
            bounds.top,
            bounds.width,
            bounds.height
        );
        self.state.overlay_bounds = Some(bounds);
    }

    pub fn on_pointer_move(&mut self, now: Instant, viewport_x: f64, viewport_y: f64) {
        let Some(bounds) = self.state.overlay_bounds else {
            log::trace!("[mask] pointer move before bounds were measured");
            return;
        };
        // a running sweep hands the mask over in place
        self.hint_timer.cancel();
        if self.hint_running() {
            log::debug!("[mask] idle hint taken over by pointer");
        }

        let view = DVec2::new(viewport_x, viewport_y);
        self.state.target_pos = bounds.to_local(view);
        self.state.view_pos = view;

        if !matches!(self.phase, Phase::ActiveFollow) {
            log::debug!("[mask] {:?} -> ActiveFollow", self.mode());
        }
        self.phase = Phase::ActiveFollow;
        self.state.target_mask_size = self.params.max_mask_size;
        self.fade_timer.schedule(now, self.params.fade_delay);
    }

    pub fn on_pointer_enter(&mut self) {
        self.state.hovering = true;
        self.cancel_idle_hint();
    }

    pub fn on_pointer_leave(&mut self, now: Instant) {
        self.state.hovering = false;
        self.fade_timer.cancel();
        self.begin_decay();
        self.schedule_idle_hint(now);
    }

    pub fn on_touch_start(&mut self, now: Instant, viewport_x: f64, viewport_y: f64) {
        self.on_pointer_enter();
        self.on_pointer_move(now, viewport_x, viewport_y);
    }

    #[inline]
    pub fn on_touch_move(&mut self, now: Instant, viewport_x: f64, viewport_y: f64) {
        self.on_pointer_move(now, viewport_x, viewport_y);
    }

    #[inline]
    pub fn on_touch_end(&mut self, now: Instant) {
        self.on_pointer_leave(now);
    }

    /// Advance one rendered frame and return what to draw.
    pub fn advance_frame(&mut self, now: Instant) -> MaskFrame {
        self.poll_timers(now);

        match self.phase {
            Phase::Sweep(sweep) => return self.step_sweep(&sweep, now),
            Phase::ActiveFollow => {
                self.ease_size();
                self.follow_target();
            }
            Phase::Decaying => {
                self.ease_size();
                self.follow_target();
                if self.state.mask_size < DECAY_DONE_SIZE {
                    self.state.current_pos = OFFSCREEN;
                    self.phase = Phase::Idle;
                    log::debug!("[mask] Decaying -> Idle");
                }
            }
            Phase::Idle => {
                self.ease_size();
                let s = &mut self.state;
                s.current_pos = lerp_pos(
                    s.current_pos,
                    IDLE_PARK,
                    self.params.follow_rate * IDLE_DRIFT_FACTOR,
                );
            }
        }
        self.frame()
    }

    #[inline]
    fn ease_size(&mut self) {
        let s = &mut self.state;
        s.mask_size = lerp(s.mask_size, s.target_mask_size, self.params.size_rate);
    }

    #[inline]
    fn follow_target(&mut self) {
        let s = &mut self.state;
        s.current_pos = lerp_pos(s.current_pos, s.target_pos, self.params.follow_rate);
    }

    #[inline]
    fn frame(&self) -> MaskFrame {
        MaskFrame {
            center: self.state.current_pos,
            radius: self.state.mask_size,
        }
    }

    fn poll_timers(&mut self, now: Instant) {
        if self.fade_timer.fire_if_due(now) && !self.hint_running() {
            log::debug!("[mask] pointer still, fading");
            self.begin_decay();
        }
        if self.hint_timer.fire_if_due(now) && !self.state.hovering {
            self.start_idle_hint(now);
        }
    }

    fn begin_decay(&mut self) {
        self.phase = Phase::Decaying;
        self.state.target_mask_size = 0.0;
    }

    fn schedule_idle_hint(&mut self, now: Instant) {
        self.cancel_idle_hint();
        self.hint_timer.schedule(now, self.params.idle_hint_delay);
    }

    /// Drop the pending hint timer and park a running sweep. Safe to call repeatedly.
    fn cancel_idle_hint(&mut self) {
        self.hint_timer.cancel();
        if self.hint_running() {
            log::debug!("[mask] idle hint interrupted");
            self.park();
        }
    }

    /// Start a sweep, replacing any sweep already in flight.
    fn start_idle_hint(&mut self, now: Instant) {
        let Some(bounds) = self.state.overlay_bounds else {
            log::debug!("[mask] idle hint skipped, no bounds yet");
            self.schedule_idle_hint(now);
            return;
        };
        let sweep = HintSweep::new(now, self.params.sweep_duration, &bounds);
        let start = sweep.start_position();
        self.state.target_pos = start;
        self.state.current_pos = start;
        self.fade_timer.cancel();
        self.phase = Phase::Sweep(sweep);
        log::debug!("[mask] idle hint from ({:.0},{:.0})", start.x, start.y);
    }

    fn step_sweep(&mut self, sweep: &HintSweep, now: Instant) -> MaskFrame {
        let t = sweep.progress(now);
        let target = sweep.target_at(t);
        let s = &mut self.state;
        if let Some(p) = target.position {
            s.target_pos = p;
        }
        s.target_mask_size = target.mask_size;
        s.current_pos = lerp_pos(s.current_pos, s.target_pos, self.params.sweep_position_rate);
        s.mask_size = lerp(s.mask_size, s.target_mask_size, self.params.sweep_size_rate);

        if t >= 1.0 {
            self.finish_sweep(now);
        }
        self.frame()
    }

    fn finish_sweep(&mut self, now: Instant) {
        log::debug!("[mask] idle hint finished");
        self.park();
        if !self.state.hovering {
            self.hint_timer.schedule(now, self.params.idle_hint_delay);
        }
    }

    fn park(&mut self) {
        self.phase = Phase::Idle;
        self.state.target_mask_size = 0.0;
        self.state.mask_size = 0.0;
        self.state.current_pos = OFFSCREEN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller(t0: Instant) -> MaskMotionController {
        let mut c = MaskMotionController::new(MotionParams::default(), t0);
        c.on_layout_changed(Rect::new(0.0, 0.0, 400.0, 600.0));
        c
    }

    #[test]
    fn starts_parked_with_hint_pending() {
        let t0 = Instant::now();
        let c = controller(t0);
        assert_eq!(c.mode(), Mode::Idle);
        assert_eq!(c.state().current_pos, OFFSCREEN);
        assert_eq!(c.state().target_pos, OFFSCREEN);
        assert_eq!(c.state().mask_size, 0.0);
        assert!(c.hint_scheduled());
        assert_eq!(c.hint_deadline(), Some(t0 + ms(IDLE_HINT_DELAY_MS)));
    }

    #[test]
    fn retriggering_a_sweep_replaces_the_running_one() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.start_idle_hint(t0);
        c.advance_frame(t0 + ms(500));
        c.start_idle_hint(t0 + ms(600));
        assert!(c.hint_running());
        assert_eq!(c.mode(), Mode::IdleHintSweep);
        // restarted sweep is back at its left end and ends 1800ms after the restart
        let f = c.advance_frame(t0 + ms(2000));
        assert_ne!(f.center, OFFSCREEN);
        let end = c.advance_frame(t0 + ms(2400));
        assert_eq!(end.center, OFFSCREEN);
        assert_eq!(c.mode(), Mode::Idle);
    }

    #[test]
    fn sweep_without_bounds_is_deferred() {
        let t0 = Instant::now();
        let mut c = MaskMotionController::new(MotionParams::default(), t0);
        let f = c.advance_frame(t0 + ms(IDLE_HINT_DELAY_MS));
        assert_eq!(c.mode(), Mode::Idle);
        assert!(f.center.x < -399.0);
        assert_eq!(
            c.hint_deadline(),
            Some(t0 + ms(IDLE_HINT_DELAY_MS) + ms(IDLE_HINT_DELAY_MS))
        );
    }

    #[test]
    fn pointer_move_without_bounds_is_ignored() {
        let t0 = Instant::now();
        let mut c = MaskMotionController::new(MotionParams::default(), t0);
        c.on_pointer_move(t0, 50.0, 50.0);
        assert_eq!(c.mode(), Mode::Idle);
        assert_eq!(c.state().target_pos, OFFSCREEN);
        assert!(!c.fade_pending());
        assert!(c.hint_scheduled());
    }

    #[test]
    fn idle_drifts_toward_park_point() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        let f = c.advance_frame(t0 + ms(16));
        let expected = -9999.0 + (-400.0 + 9999.0) * FOLLOW_RATE * IDLE_DRIFT_FACTOR;
        assert!((f.center.x - expected).abs() < 1e-9);
        assert!((f.center.y - expected).abs() < 1e-9);
        assert_eq!(f.radius, 0.0);
    }
}
