//! Frame scheduling
//!
//! The scroll engine never talks to a display clock directly. It asks a
//! [`FrameScheduler`] for "call me on the next frame" or "call me after N
//! milliseconds" and gets back a [`FrameId`]. The host fires those ids back
//! into the engine when they come due.
//!
//! [`ManualScheduler`] is a fake-clock implementation: the host (or a test)
//! advances time explicitly and receives every id that fired.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle for a pending frame callback or timeout
    pub struct FrameId;
}

/// Source of animation frames and timeouts
pub trait FrameScheduler {
    /// Current time in milliseconds
    fn now(&self) -> f64;

    /// Request a callback on the next frame
    fn request_frame(&mut self) -> FrameId;

    /// Request a callback once `delay_ms` has elapsed
    fn request_timeout(&mut self, delay_ms: f64) -> FrameId;

    /// Cancel a pending frame or timeout. Unknown ids are ignored.
    fn cancel(&mut self, id: FrameId);
}

#[derive(Debug, Clone, Copy)]
enum PendingKind {
    Frame,
    Timeout { due: f64 },
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: PendingKind,
    /// Registration order; slot reuse makes slotmap order unreliable
    seq: u64,
}

/// Fake-clock scheduler driven by explicit [`advance`](Self::advance) calls
#[derive(Debug)]
pub struct ManualScheduler {
    pending: SlotMap<FrameId, Pending>,
    now: f64,
    next_seq: u64,
    frame_interval: f64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            pending: SlotMap::with_key(),
            now: 0.0,
            next_seq: 0,
            frame_interval: 1000.0 / 60.0,
        }
    }

    /// Start the clock at `now_ms` instead of zero
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            now: now_ms,
            ..Self::new()
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.frame_interval = 1000.0 / fps.max(1) as f64;
    }

    /// Duration of one frame in milliseconds
    pub fn frame_interval(&self) -> f64 {
        self.frame_interval
    }

    /// Move the clock forward by `dt_ms` and collect everything that fired:
    /// every outstanding frame request plus every timeout now due, in
    /// registration order. Requests made while handling the returned ids
    /// fire on the next call.
    pub fn advance(&mut self, dt_ms: f64) -> SmallVec<[FrameId; 4]> {
        self.now += dt_ms.max(0.0);
        let now = self.now;

        let mut due: SmallVec<[(u64, FrameId); 4]> = self
            .pending
            .iter()
            .filter(|(_, pending)| match pending.kind {
                PendingKind::Frame => true,
                PendingKind::Timeout { due } => due <= now,
            })
            .map(|(id, pending)| (pending.seq, id))
            .collect();
        due.sort_unstable_by_key(|(seq, _)| *seq);

        due.into_iter()
            .filter_map(|(_, id)| self.pending.remove(id).map(|_| id))
            .collect()
    }

    /// Advance by one frame interval
    pub fn tick(&mut self) -> SmallVec<[FrameId; 4]> {
        self.advance(self.frame_interval)
    }

    /// Check if an id is still waiting to fire
    pub fn is_pending(&self, id: FrameId) -> bool {
        self.pending.contains_key(id)
    }

    /// Number of outstanding frames and timeouts
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether any frame (not timeout) is outstanding
    pub fn has_pending_frames(&self) -> bool {
        self.pending
            .values()
            .any(|pending| matches!(pending.kind, PendingKind::Frame))
    }

    fn insert(&mut self, kind: PendingKind) -> FrameId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(Pending { kind, seq })
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameId {
        self.insert(PendingKind::Frame)
    }

    fn request_timeout(&mut self, delay_ms: f64) -> FrameId {
        let due = self.now + delay_ms.max(0.0);
        self.insert(PendingKind::Timeout { due })
    }

    fn cancel(&mut self, id: FrameId) {
        self.pending.remove(id);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}
