//! Glide Animation
//!
//! Time primitives used by the scroll engine.
//!
//! # Features
//!
//! - **Easing**: the classic family of timing curves plus CSS cubic-bezier
//! - **Frame scheduling**: an injectable `request_frame`/`cancel` interface,
//!   with a fake-clock implementation for deterministic hosts and tests
//! - **Tweens**: one-shot eased progress with awaitable completion

pub mod animator;
pub mod easing;
pub mod scheduler;

pub use animator::{completion_pair, Animator, AnimatorFrame, Completion, Resolver};
pub use easing::Easing;
pub use scheduler::{FrameId, FrameScheduler, ManualScheduler};
