//! Wheel input classification
//!
//! Mouse wheels report the legacy aggregate delta in steps of 120 (some
//! drivers 60); trackpads report arbitrary pixel amounts. Anything not a
//! multiple of 60 is therefore treated as continuous, precise input.

use glide_core::events::WHEEL_DELTA_PER_NOTCH;
use glide_core::{Axis, WheelEvent};

/// Aggregate deltas divisible by this are discrete wheel notches
pub const NOTCH_GRANULARITY: f64 = 60.0;

/// A wheel event reduced to what the scroll model needs.
///
/// Deltas are in scroll direction: positive moves toward the end of the
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassifiedInput {
    /// Movement along the animated axis
    pub delta_primary: f64,
    /// Movement along the other axis; only precise input carries it
    pub delta_secondary: f64,
    /// Continuous trackpad input rather than a wheel notch
    pub is_precise: bool,
}

impl ClassifiedInput {
    /// Pixels the target should move for this input
    pub fn distance(&self, scroll_distance: f64) -> f64 {
        if self.is_precise {
            self.delta_primary
        } else {
            scroll_distance * (self.delta_primary / WHEEL_DELTA_PER_NOTCH)
        }
    }
}

/// Whether an event comes from a continuous device
pub fn is_precise(event: &WheelEvent) -> bool {
    event.wheel_delta.abs() % NOTCH_GRANULARITY != 0.0
}

/// Split a wheel event into primary and secondary movement
pub fn classify(event: &WheelEvent, primary: Axis) -> ClassifiedInput {
    let is_precise = is_precise(event);
    let axis_delta = |axis: Axis| match axis {
        Axis::Horizontal => event.wheel_delta_x,
        Axis::Vertical => event.wheel_delta_y,
    };

    if is_precise {
        ClassifiedInput {
            delta_primary: -axis_delta(primary),
            delta_secondary: -axis_delta(primary.cross()),
            is_precise,
        }
    } else {
        ClassifiedInput {
            delta_primary: -event.wheel_delta,
            delta_secondary: 0.0,
            is_precise,
        }
    }
}
