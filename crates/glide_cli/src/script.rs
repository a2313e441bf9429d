//! Scenario scripts (glide.toml)

use anyhow::{Context, Result};
use glide_animation::Easing;
use glide_core::Axis;
use glide_scroll::ScrollConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A scripted scrolling session
#[derive(Debug, Deserialize, Serialize)]
pub struct Scenario {
    /// Pump frames until the container comes to rest after the last step
    #[serde(default = "default_true")]
    pub settle: bool,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

fn default_true() -> bool {
    true
}

/// Initial container geometry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_width")]
    pub content_width: f64,
    #[serde(default = "default_content_height")]
    pub content_height: f64,
}

fn default_width() -> f64 {
    300.0
}

fn default_height() -> f64 {
    500.0
}

fn default_content_height() -> f64 {
    2000.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            content_width: default_width(),
            content_height: default_content_height(),
        }
    }
}

/// Axis name as written in scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAxis {
    Horizontal,
    #[default]
    Vertical,
}

impl From<ScriptAxis> for Axis {
    fn from(axis: ScriptAxis) -> Self {
        match axis {
            ScriptAxis::Horizontal => Axis::Horizontal,
            ScriptAxis::Vertical => Axis::Vertical,
        }
    }
}

/// One input or pause in a scenario
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Mouse-wheel notches; negative counts scroll down
    Wheel {
        notches: i32,
        #[serde(default)]
        ctrl: bool,
    },
    /// Continuous trackpad deltas in pixels
    Trackpad {
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
    },
    /// Drag a scrollbar thumb from one pointer coordinate to another
    Drag {
        #[serde(default)]
        axis: ScriptAxis,
        from: f64,
        to: f64,
        #[serde(default = "default_drag_moves")]
        moves: u32,
    },
    /// Change the viewport or content size
    Resize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content_width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content_height: Option<f64>,
    },
    /// Let time pass
    Wait { ms: f64 },
    /// Programmatic tween
    ScrollTo {
        position: f64,
        #[serde(default = "default_duration")]
        duration: f64,
        #[serde(default = "default_easing")]
        easing: Easing,
    },
    ToBottom,
}

fn default_drag_moves() -> u32 {
    10
}

fn default_duration() -> f64 {
    0.6
}

fn default_easing() -> Easing {
    Easing::OutQuart
}

impl Scenario {
    /// Load a scenario script
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "No scenario found at {}. Run `glide init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Script written by `glide init`
pub const SAMPLE_SCENARIO: &str = r#"# Glide scenario
#
# Run with: glide run glide.toml

settle = true

[scroll]
scroll_distance = 80
distance_decay = 0.01
clamp_extension = 500
smooth = true
scrollbar = true

[viewport]
width = 300
height = 500
content_width = 300
content_height = 2000

# Three notches down, then let the glide play out
[[step]]
kind = "wheel"
notches = -3

[[step]]
kind = "wait"
ms = 500

# Fling past the end and watch the rubber band
[[step]]
kind = "trackpad"
dy = -1700

[[step]]
kind = "wait"
ms = 1500

[[step]]
kind = "scroll_to"
position = 0
duration = 0.6
easing = "out_quart"
"#;
