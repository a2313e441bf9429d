//! Glide Scroll
//!
//! Smooth scrolling for a single scroll container: wheel notches glide,
//! trackpad gestures track tightly, and scrolling past either end stretches
//! the content like a rubber band before springing back.
//!
//! # Features
//!
//! - **Exponential decay**: `current` approaches `target` frame by frame
//! - **Clamping spring**: overscroll is rendered as a transform and relaxed
//!   back into range
//! - **Input classification**: mouse-wheel notches vs continuous trackpad
//!   deltas, with native panning of the other axis
//! - **Custom scrollbars**: proportional thumbs, auto-hide and thumb drag
//! - **Watchers**: content and child resizes re-measure the extents
//!
//! The engine talks to the outside world through two seams: a
//! [`ScrollHost`] for layout reads and side effects, and a
//! [`FrameScheduler`](glide_animation::FrameScheduler) for time.
//! [`HeadlessHost`] and [`ManualScheduler`](glide_animation::ManualScheduler)
//! implement both in memory.

pub mod config;
pub mod error;
pub mod headless;
pub mod host;
pub mod input;
pub mod physics;
pub mod position;
pub mod scrollable;
pub mod scrollbar;
pub mod trace;
pub mod viewport;
pub mod watch;

pub use config::ScrollConfig;
pub use error::{ConfigError, Result, ScrollError};
pub use headless::HeadlessHost;
pub use host::{ContentSource, ContentTransform, LayoutMetrics, NodeId, Part, ScrollHost};
pub use input::ClassifiedInput;
pub use physics::FrameCommit;
pub use position::ScrollAxisState;
pub use scrollable::{ScrollToOptions, Scrollable};
pub use scrollbar::{BarVisibility, ScrollbarState, ThumbGeometry};
pub use trace::{FrameSample, FrameTrace};
pub use viewport::ScrollExtents;
