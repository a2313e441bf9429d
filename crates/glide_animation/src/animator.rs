//! One-shot tweens
//!
//! An [`Animator`] maps wall-clock time since its start to eased progress in
//! `[0, 1]`. It does not own a frame loop: the caller feeds it the current
//! time once per frame and applies the returned progress.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use smallvec::SmallVec;
use tokio::sync::oneshot;

use crate::easing::Easing;

/// Resolves to `true` when an animation ran to completion and `false` when
/// it was cancelled (or its owner went away first).
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<bool>,
}

impl Completion {
    /// Non-blocking check. `None` while still pending.
    pub fn try_result(&mut self) -> Option<bool> {
        match self.rx.try_recv() {
            Ok(completed) => Some(completed),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(false),
        }
    }
}

impl Future for Completion {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.unwrap_or(false))
    }
}

/// Sending half of a [`Completion`]. Dropping it unresolved yields `false`.
#[derive(Debug)]
pub struct Resolver {
    tx: oneshot::Sender<bool>,
}

impl Resolver {
    pub fn resolve(self, completed: bool) {
        // Receiver may already be dropped
        let _ = self.tx.send(completed);
    }
}

/// Create a [`Resolver`]/[`Completion`] pair for work that finishes outside an animator
pub fn completion_pair() -> (Resolver, Completion) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, Completion { rx })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimatorState {
    Running,
    Completed,
    Cancelled,
}

/// Progress produced by one [`Animator::step`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorFrame {
    /// Eased progress, at most 1
    pub progress: f64,
    /// This was the final frame; progress is exactly 1
    pub finished: bool,
}

/// A time-based eased tween
#[derive(Debug)]
pub struct Animator {
    duration_ms: f64,
    easing: Easing,
    start_ms: f64,
    state: AnimatorState,
    completions: SmallVec<[Resolver; 1]>,
}

impl Animator {
    /// Start a tween of `duration_secs` at `now_ms`.
    ///
    /// A negative duration is logged and the tween finishes on its first step.
    pub fn new(duration_secs: f64, easing: Easing, now_ms: f64) -> Self {
        if duration_secs < 0.0 {
            tracing::warn!(
                "Animator: duration is negative ({duration_secs}s), completing instantly"
            );
        }

        Self {
            duration_ms: duration_secs.max(0.0) * 1000.0,
            easing,
            start_ms: now_ms,
            state: AnimatorState::Running,
            completions: SmallVec::new(),
        }
    }

    /// Advance to `now_ms`. Returns `None` once completed or cancelled.
    pub fn step(&mut self, now_ms: f64) -> Option<AnimatorFrame> {
        if self.state != AnimatorState::Running {
            return None;
        }

        let t = if self.duration_ms > 0.0 {
            (now_ms - self.start_ms) / self.duration_ms
        } else {
            f64::INFINITY
        };

        if t <= 1.0 {
            return Some(AnimatorFrame {
                progress: self.easing.apply(t.max(0.0)).min(1.0),
                finished: false,
            });
        }

        self.finish(AnimatorState::Completed);
        Some(AnimatorFrame {
            progress: 1.0,
            finished: true,
        })
    }

    /// Stop without reaching the end. Pending completions resolve to `false`.
    pub fn cancel(&mut self) {
        if self.state == AnimatorState::Running {
            self.finish(AnimatorState::Cancelled);
        }
    }

    /// Future resolving when this animator completes or is cancelled
    pub fn complete(&mut self) -> Completion {
        let (resolver, completion) = completion_pair();
        match self.state {
            AnimatorState::Running => self.completions.push(resolver),
            AnimatorState::Completed => resolver.resolve(true),
            AnimatorState::Cancelled => resolver.resolve(false),
        }
        completion
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    pub fn is_completed(&self) -> bool {
        self.state == AnimatorState::Completed
    }

    fn finish(&mut self, state: AnimatorState) {
        self.state = state;
        let completed = state == AnimatorState::Completed;
        for resolver in self.completions.drain(..) {
            resolver.resolve(completed);
        }
    }
}
