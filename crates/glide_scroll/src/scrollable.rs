//! Smooth-scrolling container
//!
//! [`Scrollable`] ties the pieces together. Hosts forward input and
//! observer callbacks (`on_wheel`, `on_content_resized`, pointer events) and
//! fire scheduled frames back through [`Scrollable::on_frame`]; everything
//! else happens in between:
//!
//! ```text
//! wheel ─▶ classify ─▶ retarget ─▶ start_loop ─▶ tick ─▶ tick ─▶ ... ─▶ rest
//!                                                 │
//!                                                 ├─▶ native offset
//!                                                 ├─▶ overscroll transform
//!                                                 └─▶ scrollbar thumbs
//! ```
//!
//! All timing comes from the [`FrameScheduler`]. With a
//! [`ManualScheduler`] the whole engine runs deterministically:
//!
//! ```rust
//! use glide_animation::ManualScheduler;
//! use glide_core::{Size, WheelEvent};
//! use glide_scroll::{ContentSource, HeadlessHost, ScrollConfig, Scrollable};
//!
//! let host = HeadlessHost::new(Size::new(300.0, 500.0), Size::new(300.0, 1500.0));
//! let mut scroll = Scrollable::new(
//!     host,
//!     ManualScheduler::new(),
//!     ScrollConfig::default(),
//!     ContentSource::WrapChildren,
//! )
//! .unwrap();
//!
//! scroll.on_wheel(&WheelEvent::notch(-1));
//! assert_eq!(scroll.target(), 80.0);
//!
//! scroll.run_until_idle(1000);
//! assert_eq!(scroll.scroll_top(), 80.0);
//! ```

use glide_animation::{
    completion_pair, Animator, Completion, Easing, FrameId, FrameScheduler, ManualScheduler,
    Resolver,
};
use glide_core::math::{clamp, round_to};
use glide_core::{Axis, HostError, PointerEvent, WheelEvent, WheelOutcome};
use rustc_hash::FxHashMap;

use crate::config::ScrollConfig;
use crate::error::{Result, ScrollError};
use crate::host::{ContentSource, ContentTransform, NodeId, Part, ScrollHost};
use crate::input;
use crate::physics;
use crate::position::ScrollAxisState;
use crate::scrollbar::{
    bar_insets, drag_fraction, BarVisibility, ScrollPosition, ScrollbarState, ThumbGeometry,
    BAR_SIZE_PROPERTY, CLASS_CONTENT, CLASS_CUSTOM_SCROLLBAR, CLASS_HIDE, CLASS_NONE,
    CLASS_SCROLLABLE, CLASS_SCROLLING, HIDE_DELAY_MS, SCROLLING_THRESHOLD,
};
use crate::trace::{FrameSample, FrameTrace};
use crate::viewport::ScrollExtents;
use crate::watch::ObserveList;

/// Options for [`Scrollable::scroll_to`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToOptions {
    /// Duration in seconds
    pub duration: f64,
    pub easing: Easing,
}

impl Default for ScrollToOptions {
    fn default() -> Self {
        Self {
            duration: 0.6,
            easing: Easing::OutQuart,
        }
    }
}

/// Work attached to a scheduled frame or timeout
#[derive(Debug)]
enum FrameTask {
    /// Deferred first frame; resets the clock before the first tick
    StartLoop,
    Tick,
    Remeasure,
    Drag,
    Tween,
    ToBottom(Resolver),
    HideBar(Axis),
}

enum Gesture<'a> {
    Wheel(&'a WheelEvent),
    /// Absolute position on the primary axis
    Value(f64),
}

#[derive(Debug, Default)]
struct BarSlot {
    visibility: BarVisibility,
    hide_timeout: Option<FrameId>,
    /// Overscroll last rendered on this axis
    clamp: f64,
}

#[derive(Debug)]
struct DragState {
    axis: Axis,
    /// Pointer offset from the thumb's leading edge at press time
    grab: f64,
    pointer: PointerEvent,
    /// Pending frame; moves in between are dropped
    frame: Option<FrameId>,
}

#[derive(Debug)]
struct Tween {
    animator: Animator,
    begin: f64,
    end: f64,
    frame: Option<FrameId>,
}

/// A scroll container with smooth scrolling, rubber-band overscroll and
/// custom scrollbars
pub struct Scrollable<H: ScrollHost, S: FrameScheduler> {
    host: H,
    scheduler: S,
    config: ScrollConfig,
    axis: ScrollAxisState,
    extents: ScrollExtents,
    /// Keyed by the full versioned id: a fired slot may be reused before
    /// every id of the same batch has been dispatched
    tasks: FxHashMap<FrameId, FrameTask>,
    loop_frame: Option<FrameId>,
    remeasure_frame: Option<FrameId>,
    last_frame_time: f64,
    /// The next tick is the first one after an input
    input_frame: bool,
    bars: [BarSlot; 2],
    drag_installed: bool,
    drag: Option<DragState>,
    tween: Option<Tween>,
    disabled: bool,
    observed: ObserveList,
    trace: FrameTrace,
    destroyed: bool,
}

fn slot(axis: Axis) -> usize {
    match axis {
        Axis::Horizontal => 0,
        Axis::Vertical => 1,
    }
}

impl<H: ScrollHost, S: FrameScheduler> Scrollable<H, S> {
    /// Mount on `host` and take over its scrolling.
    ///
    /// Fails with [`ScrollError::InvalidContainer`] when the host has no
    /// usable container, and with [`ScrollError::Host`] when the initial
    /// layout read fails.
    pub fn new(
        mut host: H,
        scheduler: S,
        config: ScrollConfig,
        content: ContentSource,
    ) -> Result<Self> {
        host.attach(content).map_err(|err| match err {
            HostError::InvalidContainer(reason) => ScrollError::InvalidContainer(reason),
            other => ScrollError::Host(other),
        })?;
        host.set_class(Part::Container, CLASS_SCROLLABLE, true);
        host.set_class(Part::Content, CLASS_CONTENT, true);

        let bar_size = config.bar_size;
        let scrollbar = config.scrollbar;
        let mut scrollable = Self {
            host,
            scheduler,
            axis: ScrollAxisState::new(config.distance_decay, config.clamp_extension),
            config,
            extents: ScrollExtents::default(),
            tasks: FxHashMap::default(),
            loop_frame: None,
            remeasure_frame: None,
            last_frame_time: 0.0,
            input_frame: false,
            bars: Default::default(),
            drag_installed: false,
            drag: None,
            tween: None,
            disabled: false,
            observed: ObserveList::new(),
            trace: FrameTrace::new(),
            destroyed: false,
        };

        scrollable.set_bar_size(bar_size);
        scrollable.set_scrollbar(scrollbar);
        scrollable.remeasure_all()?;
        scrollable.observe_children();

        tracing::debug!(
            axis = ?scrollable.primary(),
            extent = scrollable.axis.scrollable_extent,
            smooth = scrollable.config.smooth,
            "Scrollable: mounted"
        );
        Ok(scrollable)
    }

    // ========================================================================
    // Frames
    // ========================================================================

    /// Run the work behind a fired frame or timeout. Stale or unknown ids
    /// are ignored.
    pub fn on_frame(&mut self, id: FrameId) {
        let Some(task) = self.tasks.remove(&id) else {
            return;
        };

        match task {
            FrameTask::StartLoop => {
                self.loop_frame = Some(self.request_frame(FrameTask::Tick));
            }
            FrameTask::Tick => {
                self.loop_frame = None;
                self.animation_tick();
            }
            FrameTask::Remeasure => {
                self.remeasure_frame = None;
                if let Err(err) = self.update_state().and_then(|()| self.update_scrollbar()) {
                    tracing::warn!("Scrollable: re-measure after child resize failed: {err}");
                }
            }
            FrameTask::Drag => self.drag_frame(),
            FrameTask::Tween => self.tween_frame(),
            FrameTask::ToBottom(resolver) => {
                let extent = self.axis.scrollable_extent;
                self.apply_gesture(Gesture::Value(extent));
                resolver.resolve(true);
            }
            FrameTask::HideBar(axis) => {
                let bar = &mut self.bars[slot(axis)];
                bar.hide_timeout = None;
                bar.visibility = BarVisibility::Removed;
                self.host.set_class(Part::Bar(axis), CLASS_NONE, true);
            }
        }
    }

    fn request_frame(&mut self, task: FrameTask) -> FrameId {
        let id = self.scheduler.request_frame();
        self.tasks.insert(id, task);
        id
    }

    fn request_timeout(&mut self, delay_ms: f64, task: FrameTask) -> FrameId {
        let id = self.scheduler.request_timeout(delay_ms);
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: Option<FrameId>) {
        if let Some(id) = id {
            self.scheduler.cancel(id);
            self.tasks.remove(&id);
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Handle a wheel event and tell the host what to do with it
    pub fn on_wheel(&mut self, event: &WheelEvent) -> WheelOutcome {
        if self.destroyed || event.modifiers.ctrl() || !self.config.override_scroll {
            return WheelOutcome::PASS_THROUGH;
        }

        let delta = -event.wheel_delta;
        let position = if self.config.smooth {
            self.axis.current
        } else {
            self.host.scroll_offset(self.primary())
        };
        let extent = self.axis.scrollable_extent;
        let can_move =
            extent > 0.0 && ((delta > 0.0 && position < extent) || (delta < 0.0 && position > 0.0));

        let outcome = WheelOutcome {
            prevent_default: true,
            // At an edge the event may bubble to an outer container
            stop_propagation: !self.config.scrollout || can_move,
        };

        self.apply_gesture(Gesture::Wheel(event));
        outcome
    }

    fn apply_gesture(&mut self, gesture: Gesture<'_>) {
        if self.config.smooth {
            self.animation_update(gesture);
        } else {
            self.update(gesture);
        }
    }

    /// Retarget the animated axis and make sure the loop runs
    fn animation_update(&mut self, gesture: Gesture<'_>) {
        if self.disabled {
            return;
        }

        let primary = self.primary();
        let (value, precise) = match gesture {
            Gesture::Wheel(event) => {
                let input = input::classify(event, primary);
                tracing::debug!(
                    precise = input.is_precise,
                    primary = input.delta_primary,
                    secondary = input.delta_secondary,
                    "Scrollable: wheel"
                );

                if input.is_precise && input.delta_secondary != 0.0 {
                    self.pan_cross_axis(input.delta_secondary);
                }
                if input.delta_primary == 0.0 {
                    return;
                }
                (
                    self.axis.target + input.distance(self.config.scroll_distance),
                    input.is_precise,
                )
            }
            Gesture::Value(value) => {
                if value == self.host.scroll_offset(primary) {
                    return;
                }
                (value, false)
            }
        };

        self.axis.retarget(value, precise);
        self.input_frame = true;
        self.start_loop();
    }

    /// Jump without animation
    fn update(&mut self, gesture: Gesture<'_>) {
        let primary = self.primary();
        let from = self.host.scroll_offset(primary);
        let delta = match gesture {
            Gesture::Wheel(event) => -event.wheel_delta,
            Gesture::Value(value) => value - from,
        };
        if delta == 0.0 || self.disabled {
            return;
        }

        self.host
            .set_scroll_offset(primary, (from + delta).min(self.axis.scrollable_extent));
        let offset = self.host.scroll_offset(primary);
        self.settle_primary(offset);
    }

    /// Trackpads pan the other axis natively, outside the animated model
    fn pan_cross_axis(&mut self, delta: f64) {
        let cross = self.primary().cross();
        let next = clamp(
            self.host.scroll_offset(cross) + delta,
            0.0,
            self.extents.along(cross),
        );
        self.host.set_scroll_offset(cross, next);
    }

    /// Put the primary axis at rest on a native offset someone else wrote
    fn settle_primary(&mut self, offset: f64) {
        let pending = self.loop_frame.take();
        self.cancel(pending);
        self.axis.settle_at(offset);
        self.host.set_content_transform(None);
        self.bars[slot(self.primary())].clamp = 0.0;
    }

    // ========================================================================
    // Animation loop
    // ========================================================================

    fn start_loop(&mut self) {
        if self.axis.running {
            return;
        }

        self.axis.running = true;
        let pending = self.loop_frame.take();
        self.cancel(pending);

        // Deferred: the first tick measures elapsed time from the next frame
        self.last_frame_time = self.scheduler.now();
        self.loop_frame = Some(self.request_frame(FrameTask::StartLoop));
    }

    fn animation_tick(&mut self) {
        self.axis.running = true;
        let now = self.scheduler.now();
        let elapsed = now - self.last_frame_time;
        self.last_frame_time = now;

        let commit = physics::step(&mut self.axis, elapsed);

        if self.config.debug {
            self.trace.record(FrameSample {
                delta: round_to((self.axis.current - self.axis.target).abs(), 6),
                elapsed,
                clamping: self.axis.clamping,
                input_frame: self.input_frame,
            });
        }
        self.input_frame = false;

        let primary = self.primary();
        self.host.set_scroll_offset(primary, commit.native_offset);
        match commit.overscroll {
            Some(offset) => {
                self.host.set_content_transform(Some(ContentTransform {
                    axis: primary,
                    offset: round_to(offset, 5),
                }));
                self.bars[slot(primary)].clamp = offset;
            }
            None => {
                self.host.set_content_transform(None);
                self.bars[slot(primary)].clamp = 0.0;
            }
        }

        self.refresh_scrollbar();

        if self.axis.running {
            self.loop_frame = Some(self.request_frame(FrameTask::Tick));
        } else {
            tracing::trace!(position = self.axis.current, "Scrollable: at rest");
        }
    }

    // ========================================================================
    // Viewport & watchers
    // ========================================================================

    /// Re-measure the content and refresh the scrollable extents
    pub fn update_state(&mut self) -> Result<()> {
        let metrics = self.host.metrics()?;
        self.extents = ScrollExtents::measure(&metrics);
        self.trace.fit_width(self.extents.viewport.width);

        let primary = self.primary();
        self.axis.set_extent(self.extents.along(primary));

        if self.axis.running {
            self.axis.target = self.axis.clamp(self.axis.target, self.axis.clamp_extension);
        } else if self.axis.is_out_of_bounds(self.axis.current) {
            // Content shrank under a resting position
            let position = self.axis.clamp(self.axis.current, 0.0);
            self.host.set_scroll_offset(primary, position);
            self.settle_primary(position);
        }

        Ok(())
    }

    fn remeasure_all(&mut self) -> Result<()> {
        self.update_state()?;
        self.update_scrollbar_pos()?;
        self.update_scrollbar()
    }

    /// The content node changed size
    pub fn on_content_resized(&mut self) {
        if self.destroyed {
            return;
        }
        if let Err(err) = self.remeasure_all() {
            tracing::warn!("Scrollable: re-measure after content resize failed: {err}");
        }
    }

    /// The content's child list changed. Starts observing new children and
    /// re-measures on the next frame.
    pub fn on_children_changed(&mut self) {
        if self.destroyed {
            return;
        }
        self.observe_children();
        self.schedule_remeasure();
    }

    /// An observed child changed size. Re-measures once on the next frame,
    /// however many children report in between.
    pub fn on_child_resized(&mut self, child: NodeId) {
        if self.destroyed {
            return;
        }
        tracing::trace!(child, "Scrollable: child resized");
        self.schedule_remeasure();
    }

    fn observe_children(&mut self) {
        let children = self.host.content_children();
        for child in self.observed.register(children) {
            self.host.observe_child(child);
        }
    }

    fn schedule_remeasure(&mut self) {
        if self.remeasure_frame.is_none() {
            self.remeasure_frame = Some(self.request_frame(FrameTask::Remeasure));
        }
    }

    // ========================================================================
    // Scrollbar
    // ========================================================================

    /// Recompute and apply thumb geometry and bar visibility
    pub fn update_scrollbar(&mut self) -> Result<()> {
        if !self.config.scrollbar || self.destroyed {
            return Ok(());
        }

        let metrics = self.host.metrics()?;
        let position = ScrollPosition {
            left: self.host.scroll_offset(Axis::Horizontal),
            top: self.host.scroll_offset(Axis::Vertical),
            clamp_horizontal: self.bars[slot(Axis::Horizontal)].clamp,
            clamp_vertical: self.bars[slot(Axis::Vertical)].clamp,
        };
        let state = ScrollbarState::compute(&metrics, &position);

        for axis in [Axis::Vertical, Axis::Horizontal] {
            match state.along(axis) {
                Some(thumb) => self.show_bar(axis, thumb),
                None if !self.axis.clamping => self.hide_bar(axis),
                None => {}
            }
        }

        self.host.set_class(
            Part::Content,
            CLASS_SCROLLING,
            position.top > SCROLLING_THRESHOLD,
        );
        Ok(())
    }

    /// Position both tracks along the content box
    pub fn update_scrollbar_pos(&mut self) -> Result<()> {
        let metrics = self.host.metrics()?;
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let (start, end) = bar_insets(&metrics, axis, self.config.bar_size);
            self.host.set_bar_insets(axis, start, end);
        }
        Ok(())
    }

    fn refresh_scrollbar(&mut self) {
        if let Err(err) = self.update_scrollbar() {
            tracing::warn!("Scrollable: scrollbar update failed: {err}");
        }
    }

    fn show_bar(&mut self, axis: Axis, thumb: ThumbGeometry) {
        let bar = &mut self.bars[slot(axis)];
        bar.visibility = BarVisibility::Visible;
        let pending = bar.hide_timeout.take();
        self.cancel(pending);

        self.host.set_class(Part::Bar(axis), CLASS_HIDE, false);
        self.host.set_class(Part::Bar(axis), CLASS_NONE, false);
        self.host.set_thumb(axis, thumb.length, thumb.offset);
    }

    /// Fade a bar out and (re)start its removal timeout
    fn hide_bar(&mut self, axis: Axis) {
        let bar = &mut self.bars[slot(axis)];
        if bar.visibility == BarVisibility::Removed {
            return;
        }
        let pending = bar.hide_timeout.take();
        self.cancel(pending);

        self.host.set_class(Part::Bar(axis), CLASS_HIDE, true);
        let timeout = self.request_timeout(HIDE_DELAY_MS, FrameTask::HideBar(axis));
        let bar = &mut self.bars[slot(axis)];
        bar.visibility = BarVisibility::Hiding;
        bar.hide_timeout = Some(timeout);
    }

    /// Turn the custom scrollbar (and thumb dragging) on or off
    pub fn set_scrollbar(&mut self, enabled: bool) {
        self.config.scrollbar = enabled;
        self.host.set_class(Part::Container, CLASS_CUSTOM_SCROLLBAR, enabled);

        if !enabled {
            self.end_drag();
        }
        self.drag_installed = enabled;
    }

    pub fn scrollbar_enabled(&self) -> bool {
        self.config.scrollbar
    }

    /// Set the bar thickness in pixels
    pub fn set_bar_size(&mut self, size: f64) {
        self.config.bar_size = size;
        self.host
            .set_style_property(Part::Container, BAR_SIZE_PROPERTY, &format!("{size}px"));
    }

    pub fn bar_size(&self) -> f64 {
        self.config.bar_size
    }

    pub fn bar_visibility(&self, axis: Axis) -> BarVisibility {
        self.bars[slot(axis)].visibility
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    /// A thumb was pressed. Returns `true` when a drag started and the
    /// host should prevent the default action.
    pub fn on_thumb_pointer_down(&mut self, axis: Axis, pointer: PointerEvent) -> bool {
        if self.destroyed || !self.drag_installed {
            return false;
        }

        let metrics = match self.host.metrics() {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!("Scrollable: cannot start thumb drag: {err}");
                return false;
            }
        };

        self.end_drag();
        self.drag = Some(DragState {
            axis,
            grab: pointer.along(axis) - metrics.thumb(axis).start(axis),
            pointer,
            frame: None,
        });
        true
    }

    /// Pointer moved anywhere. Returns `true` while a thumb drag consumes it.
    pub fn on_pointer_move(&mut self, pointer: PointerEvent) -> bool {
        let ticking = match self.drag.as_mut() {
            None => return false,
            Some(drag) if drag.frame.is_some() => true,
            Some(drag) => {
                drag.pointer = pointer;
                false
            }
        };

        if !ticking {
            let frame = self.request_frame(FrameTask::Drag);
            if let Some(drag) = self.drag.as_mut() {
                drag.frame = Some(frame);
            }
        }
        true
    }

    pub fn on_pointer_up(&mut self) {
        self.end_drag();
    }

    /// The pointer entered the container
    pub fn on_pointer_enter(&mut self) {
        if self.drag_installed && !self.destroyed {
            self.refresh_scrollbar();
        }
    }

    /// The host scrolled the content natively (keyboard, accessibility,
    /// or echoing our own offset writes)
    pub fn on_native_scroll(&mut self) {
        if self.destroyed {
            return;
        }
        if !self.axis.running && self.tween.is_none() {
            let offset = self.host.scroll_offset(self.primary());
            if offset != self.axis.current {
                self.axis.settle_at(offset);
            }
        }
        self.refresh_scrollbar();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.cancel(drag.frame);
        }
    }

    fn drag_frame(&mut self) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.frame = None;
        let (axis, grab, pointer) = (drag.axis, drag.grab, drag.pointer);

        let metrics = match self.host.metrics() {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!("Scrollable: thumb drag frame skipped: {err}");
                return;
            }
        };

        let fraction = drag_fraction(
            metrics.track(axis),
            metrics.thumb(axis),
            grab,
            pointer.along(axis),
            axis,
        );
        let extent = self.extents.along(axis);
        self.host.set_scroll_offset(axis, (extent * fraction).min(extent));

        if axis == self.primary() {
            let offset = self.host.scroll_offset(axis);
            self.settle_primary(offset);
        }
        self.refresh_scrollbar();
    }

    // ========================================================================
    // Programmatic scrolling
    // ========================================================================

    /// Tween the primary axis to `position`. Resolves `true` when the tween
    /// finishes and `false` when it is superseded or the container is
    /// destroyed first.
    pub fn scroll_to(&mut self, position: f64, options: ScrollToOptions) -> Completion {
        if self.destroyed {
            let (resolver, completion) = completion_pair();
            resolver.resolve(false);
            return completion;
        }

        self.cancel_tween();

        let mut animator = Animator::new(options.duration, options.easing, self.scheduler.now());
        let completion = animator.complete();
        let begin = self.host.scroll_offset(self.primary());
        let frame = self.request_frame(FrameTask::Tween);
        self.tween = Some(Tween {
            animator,
            begin,
            end: position,
            frame: Some(frame),
        });
        completion
    }

    /// Scroll to the end of the content as if the user had. Waits one frame
    /// for layout to settle first.
    pub fn to_bottom(&mut self) -> Completion {
        let (resolver, completion) = completion_pair();
        if self.destroyed {
            resolver.resolve(false);
        } else {
            self.request_frame(FrameTask::ToBottom(resolver));
        }
        completion
    }

    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    fn cancel_tween(&mut self) {
        if let Some(mut tween) = self.tween.take() {
            tween.animator.cancel();
            self.cancel(tween.frame);
        }
    }

    fn tween_frame(&mut self) {
        let now = self.scheduler.now();
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        tween.frame = None;

        let Some(frame) = tween.animator.step(now) else {
            self.tween = None;
            return;
        };
        let value = tween.begin + (tween.end - tween.begin) * frame.progress;

        let primary = self.primary();
        self.host.set_scroll_offset(primary, value);
        if !self.axis.running {
            let offset = self.host.scroll_offset(primary);
            self.axis.settle_at(offset);
        }

        if frame.finished {
            self.tween = None;
        } else {
            let next = self.request_frame(FrameTask::Tween);
            if let Some(tween) = self.tween.as_mut() {
                tween.frame = Some(next);
            }
        }
        self.refresh_scrollbar();
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Native vertical scroll offset
    pub fn scroll_top(&self) -> f64 {
        self.host.scroll_offset(Axis::Vertical)
    }

    pub fn scroll_offset(&self, axis: Axis) -> f64 {
        self.host.scroll_offset(axis)
    }

    /// Rendered position on the primary axis
    pub fn current(&self) -> f64 {
        self.axis.current
    }

    pub fn target(&self) -> f64 {
        self.axis.target
    }

    pub fn is_running(&self) -> bool {
        self.axis.running
    }

    pub fn is_clamping(&self) -> bool {
        self.axis.clamping
    }

    pub fn clamp_value(&self) -> f64 {
        self.axis.clamp_value
    }

    pub fn scrollable_extent(&self) -> f64 {
        self.axis.scrollable_extent
    }

    pub fn extents(&self) -> ScrollExtents {
        self.extents
    }

    pub fn axis_state(&self) -> &ScrollAxisState {
        &self.axis
    }

    /// Bound `position` to `[-extension, scrollable_extent + extension]`
    pub fn clamp(&self, position: f64, extension: f64) -> f64 {
        self.axis.clamp(position, extension)
    }

    /// The axis driven by the animation loop
    pub fn primary(&self) -> Axis {
        self.config.primary_axis()
    }

    /// While disabled, wheel events are still consumed but move nothing
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn debug_trace(&self) -> &FrameTrace {
        &self.trace
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Cancel every pending frame and timeout and detach from the host.
    /// Safe to call more than once; also runs on drop.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;

        self.cancel_tween();
        self.end_drag();
        for (id, _task) in self.tasks.drain() {
            self.scheduler.cancel(id);
        }
        self.loop_frame = None;
        self.remeasure_frame = None;
        for bar in &mut self.bars {
            bar.hide_timeout = None;
        }

        let resting = self.axis.native_offset();
        self.axis.settle_at(resting);
        self.drag_installed = false;
        self.observed.clear();
        self.host.detach();

        tracing::debug!("Scrollable: destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl<H: ScrollHost> Scrollable<H, ManualScheduler> {
    /// Move the fake clock by `dt_ms` and dispatch everything that fired
    pub fn advance(&mut self, dt_ms: f64) {
        let fired = self.scheduler.advance(dt_ms);
        for id in fired {
            self.on_frame(id);
        }
    }

    /// Advance by `frames` frame intervals
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            let interval = self.scheduler.frame_interval();
            self.advance(interval);
        }
    }

    /// Pump frames until no frame request is outstanding (timeouts do not
    /// count). Returns how many frames ran.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if !self.scheduler.has_pending_frames() {
                return frame;
            }
            let interval = self.scheduler.frame_interval();
            self.advance(interval);
        }
        max_frames
    }
}

impl<H: ScrollHost, S: FrameScheduler> Drop for Scrollable<H, S> {
    fn drop(&mut self) {
        self.destroy();
    }
}
