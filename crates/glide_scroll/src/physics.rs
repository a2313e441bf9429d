//! Per-frame integrator
//!
//! One call to [`step`] advances an axis by `elapsed` milliseconds:
//!
//! 1. While `current` is out of bounds and `target` has not yet come back
//!    in, the target itself decays toward the nearest bound (the clamping
//!    spring), with a doubled rate in one direction of travel.
//! 2. `current` decays exponentially toward `target`.
//! 3. Once within [`SETTLE_EPSILON`], `current` snaps onto `target` and the
//!    loop stops. The relaxing target snaps onto its bound once within
//!    [`TARGET_TOLERANCE`], so a settled axis always rests inside the bounds.
//!
//! The returned [`FrameCommit`] says what to render: the native offset is
//! always inside `[0, scrollable_extent]`; any excess is reported as an
//! overscroll offset for the host to express as a transform.

use glide_core::math::{almost_equals, lerp};

use crate::position::{ScrollAxisState, CLAMPING_DECAY};

/// Distance at which `current` snaps onto `target`
pub const SETTLE_EPSILON: f64 = 1e-5;

/// A target this close to the bounds counts as back in range
pub const TARGET_TOLERANCE: f64 = 0.01;

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCommit {
    /// Value to write as the native scroll offset
    pub native_offset: f64,
    /// Translation for the content while rubber-banding
    pub overscroll: Option<f64>,
    /// Decay rate applied to `current` this frame
    pub decay: f64,
}

/// Advance `state` by `elapsed` milliseconds
pub fn step(state: &mut ScrollAxisState, elapsed: f64) -> FrameCommit {
    let mut decay = state.current_decay;
    let extent = state.scrollable_extent;

    // A target already back in range pulls current home on its own.
    if state.is_out_of_bounds(state.current)
        && state.target != state.clamp(state.target, -TARGET_TOLERANCE)
    {
        state.target = state.clamp(state.target, state.clamp_extension);

        if (state.current < state.target && state.target < 0.0)
            || (state.current > state.target && state.target > extent)
        {
            decay = CLAMPING_DECAY * 2.0;
        }

        state.target = lerp(
            state.clamp(state.target, 0.0),
            state.target,
            (-CLAMPING_DECAY * elapsed).exp(),
        );

        // Snap the relaxing target onto its bound
        let bound = state.clamp(state.target, 0.0);
        if almost_equals(bound, state.target, TARGET_TOLERANCE) {
            state.target = bound;
        }

        state.clamping = true;
    } else {
        state.clamping = false;
    }

    state.current = lerp(state.target, state.current, (-decay * elapsed).exp());

    // Converged
    if almost_equals(state.current, state.target, SETTLE_EPSILON) {
        state.current = state.target;
        state.running = false;
        state.clamping = false;
    }

    state.clamp_value = if !state.clamping {
        0.0
    } else if state.current < 0.0 {
        -state.current
    } else if state.current > extent {
        -(state.current - extent)
    } else {
        0.0
    };

    FrameCommit {
        native_offset: state.native_offset(),
        overscroll: state.clamping.then_some(state.clamp_value),
        decay,
    }
}
