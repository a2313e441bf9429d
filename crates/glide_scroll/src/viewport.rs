//! Viewport state tracking
//!
//! Derives how far the content can scroll on each axis from one layout read.

use glide_core::{Axis, Size};

use crate::host::LayoutMetrics;

/// Scrollable extents of the content on both axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollExtents {
    pub horizontal: f64,
    pub vertical: f64,
    /// Visible content size the extents were measured against
    pub viewport: Size,
}

impl ScrollExtents {
    /// `max(0, scrollSize - clientSize)` per axis
    pub fn measure(metrics: &LayoutMetrics) -> Self {
        let viewport = metrics.content_rect.size();
        Self {
            horizontal: (metrics.scroll_size.width - viewport.width).max(0.0),
            vertical: (metrics.scroll_size.height - viewport.height).max(0.0),
            viewport,
        }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}
