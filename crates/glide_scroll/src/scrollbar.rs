//! Scrollbar geometry
//!
//! Pure functions from one layout read to thumb sizes, thumb offsets, track
//! insets and drag positions. [`Scrollable`](crate::Scrollable) applies the
//! results through the host and owns the show/hide timing.

use glide_core::math::{almost_equals, clamp};
use glide_core::{Axis, Rect};

use crate::host::LayoutMetrics;

/// An axis whose content and viewport differ by at most this many pixels
/// counts as fully visible
pub const FULLY_VISIBLE_TOLERANCE: f64 = 1.001;

/// Delay before a hidden bar is removed from layout
pub const HIDE_DELAY_MS: f64 = 1000.0;

/// Native vertical offset above which content carries [`CLASS_SCROLLING`]
pub const SCROLLING_THRESHOLD: f64 = 5.0;

pub const CLASS_SCROLLABLE: &str = "scrollable";
pub const CLASS_CONTENT: &str = "content";
pub const CLASS_CUSTOM_SCROLLBAR: &str = "customScrollbar";
pub const CLASS_SCROLLING: &str = "scrolling";
pub const CLASS_HIDE: &str = "hide";
pub const CLASS_NONE: &str = "none";

/// Custom property carrying the bar thickness
pub const BAR_SIZE_PROPERTY: &str = "--scrollbar-size";

/// Thumb length and offset inside its track, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub length: f64,
    pub offset: f64,
}

/// Thumbs for both axes; `None` means the axis is fully visible
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarState {
    pub horizontal: Option<ThumbGeometry>,
    pub vertical: Option<ThumbGeometry>,
}

/// Native offsets and overscroll the thumbs are computed for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
    /// Current overscroll per axis; stretches the content while clamping
    pub clamp_horizontal: f64,
    pub clamp_vertical: f64,
}

impl ScrollPosition {
    fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    fn clamp(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.clamp_horizontal,
            Axis::Vertical => self.clamp_vertical,
        }
    }
}

impl ScrollbarState {
    pub fn compute(metrics: &LayoutMetrics, position: &ScrollPosition) -> Self {
        Self {
            horizontal: thumb_for(metrics, position, Axis::Horizontal),
            vertical: thumb_for(metrics, position, Axis::Vertical),
        }
    }

    pub fn along(&self, axis: Axis) -> Option<ThumbGeometry> {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

fn thumb_for(
    metrics: &LayoutMetrics,
    position: &ScrollPosition,
    axis: Axis,
) -> Option<ThumbGeometry> {
    let overscroll = position.clamp(axis).abs();
    let viewport = metrics.content_offset.length(axis);
    let stretched = metrics.scroll_size.along(axis) + overscroll;

    if almost_equals(viewport, stretched, FULLY_VISIBLE_TOLERANCE) {
        return None;
    }

    let track = metrics.track(axis).length(axis);
    let length = viewport / stretched * track;
    let range = stretched - viewport - overscroll;
    let offset = if range > 0.0 {
        position.offset(axis) / range * (track - length)
    } else {
        0.0
    };

    Some(ThumbGeometry { length, offset })
}

/// Fraction of the scrollable extent a thumb drag maps to.
///
/// `grab` is where the pointer caught the thumb, relative to the thumb's
/// leading edge. The pointer's travel range is the track minus the parts of
/// the thumb on either side of the grab point.
pub fn drag_fraction(track: Rect, thumb: Rect, grab: f64, pointer: f64, axis: Axis) -> f64 {
    let start = track.start(axis) + grab;
    let end = track.start(axis) + track.length(axis) - (thumb.length(axis) - grab);
    let span = end - start;
    if span <= 0.0 {
        return 0.0;
    }
    clamp((pointer - start) / span, 0.0, 1.0)
}

/// Track `(start, end)` insets relative to the container edges
pub fn bar_insets(metrics: &LayoutMetrics, axis: Axis, bar_size: f64) -> (f64, f64) {
    let content = metrics.content_offset;
    let container = metrics.container_size;
    match axis {
        Axis::Vertical => (content.y, container.height - content.y - content.height),
        Axis::Horizontal => (
            content.x,
            container.width - content.x - content.width + bar_size,
        ),
    }
}

/// Display state of one scrollbar track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarVisibility {
    #[default]
    Visible,
    /// Faded out (`hide`), removal pending
    Hiding,
    /// Taken out of layout (`none`)
    Removed,
}

impl BarVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, BarVisibility::Visible)
    }
}
