//! Scroll configuration
//!
//! [`ScrollConfig`] holds every construction option of a scroll container.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! scroll_distance = 120
//! distance_decay = 0.008
//! horizontal = false
//! bar_size = 8
//! ```
//!
//! Missing keys fall back to the defaults. Values are taken as given;
//! nonsensical numbers (a negative bar size, say) are a caller error.

use std::fs;
use std::path::Path;

use glide_core::Axis;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for scroll behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels scrolled per mouse-wheel notch
    pub scroll_distance: f64,
    /// Decay rate (1/ms) used to approach the target after a wheel notch
    pub distance_decay: f64,
    /// How far out of bounds the target may go, in pixels. Larger values
    /// bounce harder when the edge is hit at speed.
    pub clamp_extension: f64,
    /// Animate the horizontal axis instead of the vertical one
    pub horizontal: bool,
    /// Intercept wheel events at all
    pub override_scroll: bool,
    /// Animated scrolling; when off wheel input jumps immediately
    pub smooth: bool,
    /// Inject custom scrollbar thumbs
    pub scrollbar: bool,
    /// Let wheel events bubble to an ancestor once this container hits an edge
    pub scrollout: bool,
    /// Scrollbar thickness in pixels
    pub bar_size: f64,
    /// Record per-frame samples of the animation loop
    pub debug: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scroll_distance: 80.0,
            distance_decay: 0.01,
            clamp_extension: 500.0,
            horizontal: false,
            override_scroll: true,
            smooth: true,
            scrollbar: true,
            scrollout: true,
            bar_size: 10.0,
            debug: false,
        }
    }
}

impl ScrollConfig {
    /// Horizontal scroller with otherwise default settings
    pub fn horizontal() -> Self {
        Self {
            horizontal: true,
            ..Default::default()
        }
    }

    /// Scroller that jumps instead of animating
    pub fn instant() -> Self {
        Self {
            smooth: false,
            ..Default::default()
        }
    }

    /// The axis driven by the animation loop
    pub fn primary_axis(&self) -> Axis {
        if self.horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Parse from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
