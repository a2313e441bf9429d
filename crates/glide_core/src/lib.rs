//! Glide Core
//!
//! Foundational types shared by the Glide scrolling crates:
//!
//! - **Events**: wheel and pointer input as delivered by the host
//! - **Geometry**: axis-aware rectangles and sizes
//! - **Math**: the clamp/lerp/tolerance helpers the physics relies on
//! - **Errors**: failures reported by a host while mounting or measuring
//!
//! # Example
//!
//! ```rust
//! use glide_core::events::WheelEvent;
//! use glide_core::math::{clamp, lerp};
//!
//! let notch = WheelEvent::notch(-1);
//! assert_eq!(notch.wheel_delta, -120.0);
//!
//! assert_eq!(clamp(1500.0, 0.0, 1000.0), 1000.0);
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! ```

pub mod error;
pub mod events;
pub mod geometry;
pub mod math;

pub use error::{HostError, Result};
pub use events::{Modifiers, PointerEvent, WheelEvent, WheelOutcome};
pub use geometry::{Axis, Rect, Size};
