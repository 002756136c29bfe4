//! Interactive viewport state machine.
//!
//! The transform exists in two copies at all times: the *live* value the
//! render pass reads every frame, and the *committed* value captured when
//! the previous gesture ended, which serves as the base for the next one.
//! "Commit on gesture end" is a single assignment here, so the committed
//! transform is monotone with respect to gesture completion order and never
//! reverts to a stale pre-gesture value.
//!
//! Pinch and pan compose simultaneously: both write into the same live
//! transform and are applied together (translate, then scale). The zoom
//! buttons and reset converge on their targets through a critically-damped
//! spring advanced by [`ViewportController::tick`]; a side switch instead
//! snaps straight to identity, since that is a discontinuity in content
//! rather than a motion the user performed.
//!
//! Invariant: `MIN_SCALE <= scale <= MAX_SCALE` for both copies, always.

use std::fmt;

use panelkit_core::constants::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};

/// Spring stiffness for button-driven zoom and reset convergence.
const SPRING_STIFFNESS: f64 = 170.0;

/// Damping coefficient, chosen at critical damping for the stiffness above.
const SPRING_DAMPING: f64 = 26.0;

/// Position/velocity threshold below which the spring is considered settled.
const SETTLE_EPS: f64 = 1e-3;

/// Scale plus translation applied when presenting a drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation, in presentation units.
    pub translate_x: f64,
    /// Vertical translation, in presentation units.
    pub translate_y: f64,
}

impl ViewportTransform {
    /// The identity transform: scale 1, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ViewportTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Translate: ({:.1}, {:.1})",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

/// An in-flight spring animation toward a target transform.
#[derive(Debug, Clone)]
struct SpringAnimation {
    target: ViewportTransform,
    velocity: [f64; 3],
}

/// Owns the live and committed transforms and every way they change.
///
/// No business state depends on this; it is purely presentational and can
/// be reset or discarded without data loss.
#[derive(Debug, Clone)]
pub struct ViewportController {
    live: ViewportTransform,
    committed: ViewportTransform,
    animation: Option<SpringAnimation>,
}

impl ViewportController {
    /// Creates a controller at the identity transform.
    pub fn new() -> Self {
        Self {
            live: ViewportTransform::IDENTITY,
            committed: ViewportTransform::IDENTITY,
            animation: None,
        }
    }

    /// The transform the render pass applies this frame.
    pub fn live(&self) -> ViewportTransform {
        self.live
    }

    /// The base transform captured at the end of the previous gesture.
    pub fn committed(&self) -> ViewportTransform {
        self.committed
    }

    /// Whether a spring animation is still converging.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Pinch gesture update with the recognizer's cumulative scale factor.
    pub fn pinch_update(&mut self, factor: f64) {
        self.animation = None;
        self.live.scale = clamp_scale(self.committed.scale * factor);
    }

    /// Pinch gesture ended: commit the live scale.
    pub fn pinch_end(&mut self) {
        self.committed.scale = self.live.scale;
    }

    /// Pan gesture update with the recognizer's cumulative delta.
    pub fn pan_update(&mut self, dx: f64, dy: f64) {
        self.animation = None;
        self.live.translate_x = self.committed.translate_x + dx;
        self.live.translate_y = self.committed.translate_y + dy;
    }

    /// Pan gesture ended: commit the live translation.
    pub fn pan_end(&mut self) {
        self.committed.translate_x = self.live.translate_x;
        self.committed.translate_y = self.live.translate_y;
    }

    /// Zoom-in button: step the committed scale up and spring toward it.
    pub fn zoom_in(&mut self) {
        self.step_zoom(ZOOM_STEP);
    }

    /// Zoom-out button: step the committed scale down and spring toward it.
    pub fn zoom_out(&mut self) {
        self.step_zoom(-ZOOM_STEP);
    }

    fn step_zoom(&mut self, delta: f64) {
        self.committed.scale = clamp_scale(self.committed.scale + delta);
        self.animate_to(self.committed);
    }

    /// Reset button: spring back to identity and commit it.
    pub fn reset(&mut self) {
        self.committed = ViewportTransform::IDENTITY;
        self.animate_to(ViewportTransform::IDENTITY);
    }

    /// Side switch: snap both copies to identity with no animation.
    pub fn snap_identity(&mut self) {
        self.live = ViewportTransform::IDENTITY;
        self.committed = ViewportTransform::IDENTITY;
        self.animation = None;
    }

    fn animate_to(&mut self, target: ViewportTransform) {
        let velocity = match &self.animation {
            Some(spring) => spring.velocity,
            None => [0.0; 3],
        };
        self.animation = Some(SpringAnimation { target, velocity });
    }

    /// Advances the spring by `dt` seconds. Returns `true` while the
    /// animation is still running. A no-op when nothing is animating.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(spring) = &mut self.animation else {
            return false;
        };

        let axes = [
            (self.live.scale, spring.target.scale),
            (self.live.translate_x, spring.target.translate_x),
            (self.live.translate_y, spring.target.translate_y),
        ];
        let mut next = [0.0; 3];
        let mut settled = true;
        for (i, (current, target)) in axes.into_iter().enumerate() {
            let displacement = current - target;
            let accel = -SPRING_STIFFNESS * displacement - SPRING_DAMPING * spring.velocity[i];
            spring.velocity[i] += accel * dt;
            next[i] = current + spring.velocity[i] * dt;
            if (next[i] - target).abs() > SETTLE_EPS || spring.velocity[i].abs() > SETTLE_EPS {
                settled = false;
            }
        }

        if settled {
            self.live = spring.target;
            self.animation = None;
            return false;
        }

        self.live.scale = clamp_scale(next[0]);
        self.live.translate_x = next[1];
        self.live.translate_y = next[2];
        true
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(vp: &mut ViewportController) {
        // 10 ms frames; springs settle well inside this budget.
        for _ in 0..2000 {
            if !vp.tick(0.01) {
                return;
            }
        }
        panic!("Spring did not settle");
    }

    #[test]
    fn test_starts_at_identity() {
        let vp = ViewportController::new();
        assert_eq!(vp.live(), ViewportTransform::IDENTITY);
        assert_eq!(vp.committed(), ViewportTransform::IDENTITY);
        assert!(!vp.is_animating());
    }

    #[test]
    fn test_pinch_scales_from_committed_base() {
        let mut vp = ViewportController::new();
        vp.pinch_update(1.5);
        assert!((vp.live().scale - 1.5).abs() < 1e-9);
        // Not yet committed.
        assert!((vp.committed().scale - 1.0).abs() < 1e-9);
        vp.pinch_end();
        assert!((vp.committed().scale - 1.5).abs() < 1e-9);

        // Next pinch multiplies the new base.
        vp.pinch_update(1.2);
        assert!((vp.live().scale - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_pinch_is_clamped() {
        let mut vp = ViewportController::new();
        vp.pinch_update(10.0);
        assert!((vp.live().scale - 3.0).abs() < 1e-9);
        vp.pinch_update(0.01);
        assert!((vp.live().scale - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_pan_composes_with_pinch() {
        let mut vp = ViewportController::new();
        vp.pinch_update(2.0);
        vp.pan_update(30.0, -12.0);
        let live = vp.live();
        assert!((live.scale - 2.0).abs() < 1e-9);
        assert!((live.translate_x - 30.0).abs() < 1e-9);
        assert!((live.translate_y + 12.0).abs() < 1e-9);

        vp.pinch_end();
        vp.pan_end();
        assert_eq!(vp.committed(), live);
    }

    #[test]
    fn test_two_zoom_presses_reach_two() {
        let mut vp = ViewportController::new();
        vp.zoom_in();
        vp.zoom_in();
        assert!((vp.committed().scale - 2.0).abs() < 1e-9);
        run_to_rest(&mut vp);
        assert!((vp.live().scale - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let mut vp = ViewportController::new();
        for _ in 0..10 {
            vp.zoom_in();
        }
        assert!((vp.committed().scale - 3.0).abs() < 1e-9);
        for _ in 0..10 {
            vp.zoom_out();
        }
        assert!((vp.committed().scale - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut vp = ViewportController::new();
        vp.pinch_update(2.5);
        vp.pinch_end();
        vp.pan_update(100.0, 40.0);
        vp.pan_end();

        vp.reset();
        run_to_rest(&mut vp);
        assert_eq!(vp.live(), ViewportTransform::IDENTITY);
        assert_eq!(vp.committed(), ViewportTransform::IDENTITY);

        vp.reset();
        run_to_rest(&mut vp);
        assert_eq!(vp.live(), ViewportTransform::IDENTITY);
    }

    #[test]
    fn test_snap_identity_skips_animation() {
        let mut vp = ViewportController::new();
        vp.zoom_in();
        assert!(vp.is_animating());
        vp.snap_identity();
        assert!(!vp.is_animating());
        assert_eq!(vp.live(), ViewportTransform::IDENTITY);
        assert_eq!(vp.committed(), ViewportTransform::IDENTITY);
    }

    #[test]
    fn test_scale_invariant_over_mixed_sequences() {
        let mut vp = ViewportController::new();
        let in_range = |s: f64| (0.5..=3.0).contains(&s);

        vp.pinch_update(4.0);
        assert!(in_range(vp.live().scale));
        vp.pinch_end();
        vp.zoom_in();
        for _ in 0..50 {
            vp.tick(0.016);
            assert!(in_range(vp.live().scale));
        }
        vp.zoom_out();
        vp.pinch_update(0.001);
        vp.pinch_end();
        vp.reset();
        for _ in 0..200 {
            vp.tick(0.016);
            assert!(in_range(vp.live().scale));
        }
        assert!(in_range(vp.committed().scale));
    }

    #[test]
    fn test_gesture_cancels_running_animation() {
        let mut vp = ViewportController::new();
        vp.zoom_in();
        assert!(vp.is_animating());
        vp.pinch_update(1.1);
        assert!(!vp.is_animating());
    }
}
