//! Target/position model
//!
//! `current` is what is rendered, `target` is where the animation is heading.
//! Both live in content coordinates and may leave `[0, scrollable_extent]`
//! while the container is rubber-banding.

use glide_core::math::clamp;

/// Decay rate (1/ms) for precise trackpad input
pub const PRECISE_DECAY: f64 = 0.05;

/// Decay rate (1/ms) pulling an out-of-bounds target back into range
pub const CLAMPING_DECAY: f64 = 0.012;

/// Physical state of the animated axis
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAxisState {
    /// Rendered position
    pub current: f64,
    /// Position the loop approaches
    pub target: f64,
    /// `max(0, contentSize - viewportSize)` on this axis
    pub scrollable_extent: f64,
    /// Maximum excursion of `target` beyond the valid range
    pub clamp_extension: f64,
    /// Configured decay for wheel notches
    pub distance_decay: f64,
    /// Decay chosen by the latest gesture
    pub current_decay: f64,
    /// A frame loop is scheduled
    pub running: bool,
    /// Rendering out of bounds this frame
    pub clamping: bool,
    /// Visual overscroll offset; 0 when in bounds
    pub clamp_value: f64,
}

impl ScrollAxisState {
    pub fn new(distance_decay: f64, clamp_extension: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            scrollable_extent: 0.0,
            clamp_extension,
            distance_decay,
            current_decay: distance_decay,
            running: false,
            clamping: false,
            clamp_value: 0.0,
        }
    }

    /// Bound `position` to `[-extension, scrollable_extent + extension]`
    pub fn clamp(&self, position: f64, extension: f64) -> f64 {
        position
            .min(self.scrollable_extent + extension)
            .max(-extension)
    }

    /// Whether a position lies outside `[0, scrollable_extent]`
    pub fn is_out_of_bounds(&self, position: f64) -> bool {
        position != self.clamp(position, 0.0)
    }

    pub fn set_extent(&mut self, extent: f64) {
        self.scrollable_extent = extent.max(0.0);
    }

    /// Retarget after a user gesture. Trackpad input tracks tightly, wheel
    /// notches glide with the configured decay.
    pub fn retarget(&mut self, position: f64, precise: bool) {
        self.current_decay = if precise {
            PRECISE_DECAY
        } else {
            self.distance_decay
        };
        self.target = self.clamp(position, self.clamp_extension);
    }

    /// Put the axis at rest on `position`
    pub fn settle_at(&mut self, position: f64) {
        self.current = position;
        self.target = position;
        self.running = false;
        self.clamping = false;
        self.clamp_value = 0.0;
    }

    /// Native offset that represents `current`
    pub fn native_offset(&self) -> f64 {
        clamp(self.current, 0.0, self.scrollable_extent)
    }

    /// Whether `current` could stop moving right now
    pub fn is_at_rest(&self) -> bool {
        !self.running && self.current == self.target && self.clamp_value == 0.0
    }
}
