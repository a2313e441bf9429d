//! Scenario playback

use anyhow::{Context, Result};
use glide_animation::{Completion, FrameScheduler, ManualScheduler};
use glide_core::{Axis, Modifiers, PointerEvent, Size, WheelEvent};
use glide_scroll::{ContentSource, HeadlessHost, ScrollHost, ScrollToOptions, Scrollable};
use serde::Serialize;

use crate::script::{Scenario, Step};

/// Upper bound on frames pumped while settling
const MAX_SETTLE_FRAMES: usize = 10_000;

/// What the container rendered on one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub time_ms: f64,
    pub current: f64,
    pub target: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub running: bool,
    pub clamping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overscroll: Option<f64>,
}

/// How a `scroll_to`/`to_bottom` ended
#[derive(Debug, Clone, Serialize)]
pub struct CompletionReport {
    pub label: String,
    pub outcome: &'static str,
}

/// Everything a playback produced
#[derive(Debug, Serialize)]
pub struct Playback {
    pub frames: Vec<FrameReport>,
    pub completions: Vec<CompletionReport>,
    pub final_frame: FrameReport,
}

pub struct Runner {
    scroll: Scrollable<HeadlessHost, ManualScheduler>,
    frame: u64,
    frames: Vec<FrameReport>,
    completions: Vec<(String, Completion)>,
}

impl Runner {
    pub fn new(scenario: &Scenario, fps: u32) -> Result<Self> {
        let viewport = &scenario.viewport;
        let host = HeadlessHost::new(
            Size::new(viewport.width, viewport.height),
            Size::new(viewport.content_width, viewport.content_height),
        );
        let mut scheduler = ManualScheduler::new();
        scheduler.set_target_fps(fps);

        let scroll = Scrollable::new(
            host,
            scheduler,
            scenario.scroll.clone(),
            ContentSource::WrapChildren,
        )
        .context("Failed to mount scroll container")?;

        tracing::info!(
            extent = scroll.scrollable_extent(),
            axis = ?scroll.primary(),
            "Mounted headless container"
        );

        Ok(Self {
            scroll,
            frame: 0,
            frames: Vec::new(),
            completions: Vec::new(),
        })
    }

    /// Play every step, then settle if asked to
    pub fn play(mut self, scenario: &Scenario) -> Result<Playback> {
        for (index, step) in scenario.steps.iter().enumerate() {
            tracing::debug!("step {}: {:?}", index + 1, step);
            self.apply(step)
                .with_context(|| format!("Step {} ({:?}) failed", index + 1, step))?;
        }

        if scenario.settle {
            self.settle();
        }
        Ok(self.finish())
    }

    pub fn apply(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Wheel { notches, ctrl } => {
                let modifiers = Modifiers::new(false, *ctrl, false, false);
                let event = WheelEvent::notch(*notches).with_modifiers(modifiers);
                let outcome = self.scroll.on_wheel(&event);
                tracing::debug!(?outcome, "wheel");
            }
            Step::Trackpad { dx, dy } => {
                let outcome = self.scroll.on_wheel(&WheelEvent::trackpad(*dx, *dy));
                tracing::debug!(?outcome, "trackpad");
            }
            Step::Drag {
                axis,
                from,
                to,
                moves,
            } => self.drag((*axis).into(), *from, *to, *moves)?,
            Step::Resize {
                width,
                height,
                content_width,
                content_height,
            } => {
                let metrics = self.scroll.host().metrics()?;
                let viewport = metrics.content_rect.size();
                let content = metrics.scroll_size;

                let host = self.scroll.host_mut();
                host.set_viewport(Size::new(
                    width.unwrap_or(viewport.width),
                    height.unwrap_or(viewport.height),
                ));
                host.set_content_size(Size::new(
                    content_width.unwrap_or(content.width),
                    content_height.unwrap_or(content.height),
                ));
                self.scroll.on_content_resized();
            }
            Step::Wait { ms } => {
                let interval = self.scroll.scheduler().frame_interval();
                let frames = (ms.max(0.0) / interval).ceil() as usize;
                for _ in 0..frames {
                    self.pump();
                }
            }
            Step::ScrollTo {
                position,
                duration,
                easing,
            } => {
                let completion = self.scroll.scroll_to(
                    *position,
                    ScrollToOptions {
                        duration: *duration,
                        easing: *easing,
                    },
                );
                self.completions
                    .push((format!("scroll_to({position})"), completion));
            }
            Step::ToBottom => {
                let completion = self.scroll.to_bottom();
                self.completions.push(("to_bottom".to_string(), completion));
            }
        }
        Ok(())
    }

    fn drag(&mut self, axis: Axis, from: f64, to: f64, moves: u32) -> Result<()> {
        let track = self.scroll.host().metrics()?.track(axis);
        let cross = track.start(axis.cross()) + track.length(axis.cross()) / 2.0;
        let pointer_at = |along: f64| match axis {
            Axis::Horizontal => PointerEvent::new(along, cross),
            Axis::Vertical => PointerEvent::new(cross, along),
        };

        if !self.scroll.on_thumb_pointer_down(axis, pointer_at(from)) {
            tracing::warn!("Thumb drag ignored: custom scrollbar is disabled");
            return Ok(());
        }

        let moves = moves.max(1);
        for i in 1..=moves {
            let along = from + (to - from) * (i as f64 / moves as f64);
            self.scroll.on_pointer_move(pointer_at(along));
            self.pump();
        }
        self.scroll.on_pointer_up();
        Ok(())
    }

    /// Advance one frame and record what it rendered
    fn pump(&mut self) {
        let interval = self.scroll.scheduler().frame_interval();
        self.scroll.advance(interval);
        self.frame += 1;
        let report = self.snapshot();
        self.frames.push(report);
    }

    fn settle(&mut self) {
        let mut pumped = 0;
        while self.scroll.scheduler().has_pending_frames() && pumped < MAX_SETTLE_FRAMES {
            self.pump();
            pumped += 1;
        }
        if pumped == MAX_SETTLE_FRAMES {
            tracing::warn!("Container still moving after {MAX_SETTLE_FRAMES} frames");
        }
    }

    fn snapshot(&self) -> FrameReport {
        let scroll = &self.scroll;
        FrameReport {
            frame: self.frame,
            time_ms: scroll.scheduler().now(),
            current: scroll.current(),
            target: scroll.target(),
            scroll_left: scroll.scroll_offset(Axis::Horizontal),
            scroll_top: scroll.scroll_top(),
            running: scroll.is_running(),
            clamping: scroll.is_clamping(),
            overscroll: scroll.host().transform().map(|transform| transform.offset),
        }
    }

    fn finish(mut self) -> Playback {
        let completions = self
            .completions
            .iter_mut()
            .map(|(label, completion)| CompletionReport {
                label: label.clone(),
                outcome: match completion.try_result() {
                    Some(true) => "completed",
                    Some(false) => "cancelled",
                    None => "pending",
                },
            })
            .collect();

        Playback {
            final_frame: self.snapshot(),
            frames: std::mem::take(&mut self.frames),
            completions,
        }
    }
}
