//! Input events
//!
//! Platform-agnostic wheel and pointer input, shaped after the legacy
//! browser wheel model: an aggregate `wheel_delta` plus per-axis deltas,
//! all positive when the wheel moves away from the user (content scrolls
//! toward its start).

use crate::geometry::Axis;

/// Pixels the legacy aggregate delta reports per mouse-wheel notch
pub const WHEEL_DELTA_PER_NOTCH: f64 = 120.0;

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000;

    /// Create new modifiers from flags
    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    /// Create from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    /// Ctrl is held (browsers use ctrl+wheel for page zoom)
    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }
}

/// A wheel or trackpad scroll event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelEvent {
    /// Legacy aggregate delta. Mouse wheels report multiples of 120 here.
    pub wheel_delta: f64,
    /// Horizontal component
    pub wheel_delta_x: f64,
    /// Vertical component
    pub wheel_delta_y: f64,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create an event from raw legacy deltas
    pub const fn new(wheel_delta: f64, wheel_delta_x: f64, wheel_delta_y: f64) -> Self {
        Self {
            wheel_delta,
            wheel_delta_x,
            wheel_delta_y,
            modifiers: Modifiers::NONE,
        }
    }

    /// A vertical mouse-wheel event of `count` notches.
    ///
    /// Positive counts roll away from the user (scroll up), negative counts
    /// roll toward the user (scroll down).
    pub fn notch(count: i32) -> Self {
        let delta = count as f64 * WHEEL_DELTA_PER_NOTCH;
        Self::new(delta, 0.0, delta)
    }

    /// A continuous trackpad event. The aggregate delta follows the
    /// vertical component and falls back to the horizontal one.
    pub fn trackpad(delta_x: f64, delta_y: f64) -> Self {
        let aggregate = if delta_y != 0.0 { delta_y } else { delta_x };
        Self::new(aggregate, delta_x, delta_y)
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A pointer position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Coordinate along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.client_x,
            Axis::Vertical => self.client_y,
        }
    }
}

/// What the host should do with a wheel event after the engine saw it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelOutcome {
    /// Suppress the native scroll
    pub prevent_default: bool,
    /// Keep ancestor scroll containers from seeing the event
    pub stop_propagation: bool,
}

impl WheelOutcome {
    /// Event ignored entirely; let the platform handle it
    pub const PASS_THROUGH: WheelOutcome = WheelOutcome {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Event consumed by this container
    pub const CONSUMED: WheelOutcome = WheelOutcome {
        prevent_default: true,
        stop_propagation: true,
    };
}
