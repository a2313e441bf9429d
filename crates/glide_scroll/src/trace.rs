//! Animation loop trace
//!
//! With `debug` enabled every tick of the loop leaves a [`FrameSample`]
//! behind. Samples live in a ring sized to the content width (one sample
//! per 3 px column), so a host can draw them as a bar graph across the
//! container.

use std::collections::VecDeque;

/// Width in pixels of one sample column
pub const SAMPLE_WIDTH: f64 = 3.0;

/// One tick of the animation loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Remaining distance `|current - target|`, rounded to 6 digits
    pub delta: f64,
    /// Milliseconds since the previous tick
    pub elapsed: f64,
    /// The clamping spring was active
    pub clamping: bool,
    /// First tick after a new input retargeted the axis
    pub input_frame: bool,
}

/// Bounded history of recent [`FrameSample`]s
#[derive(Debug, Clone, Default)]
pub struct FrameTrace {
    samples: VecDeque<FrameSample>,
    capacity: usize,
}

impl FrameTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the ring for a content of `content_width` pixels
    pub fn fit_width(&mut self, content_width: f64) {
        self.capacity = (content_width.max(0.0) / SAMPLE_WIDTH).floor() as usize;
        self.evict();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, sample: FrameSample) {
        tracing::trace!(
            delta = sample.delta,
            elapsed = sample.elapsed,
            clamping = sample.clamping,
            input = sample.input_frame,
            "scroll frame"
        );
        self.samples.push_back(sample);
        self.evict();
    }

    /// Samples from oldest to newest
    pub fn samples(&self) -> impl Iterator<Item = &FrameSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    fn evict(&mut self) {
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(delta: f64) -> FrameSample {
        FrameSample {
            delta,
            elapsed: 16.0,
            clamping: false,
            input_frame: false,
        }
    }

    #[test]
    fn test_capacity_follows_content_width() {
        let mut trace = FrameTrace::new();
        trace.fit_width(100.0);
        assert_eq!(trace.capacity(), 33);
    }

    #[test]
    fn test_oldest_samples_are_evicted() {
        let mut trace = FrameTrace::new();
        trace.fit_width(9.0);
        for i in 0..5 {
            trace.record(sample(i as f64));
        }
        let deltas: Vec<f64> = trace.samples().map(|s| s.delta).collect();
        assert_eq!(deltas, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_shrinking_drops_history() {
        let mut trace = FrameTrace::new();
        trace.fit_width(30.0);
        for i in 0..10 {
            trace.record(sample(i as f64));
        }
        trace.fit_width(0.0);
        assert!(trace.is_empty());
    }
}
