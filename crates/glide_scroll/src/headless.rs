//! In-memory host
//!
//! [`HeadlessHost`] models a scroll container without a document: sizes are
//! set explicitly, native offsets are clamped the way a browser clamps
//! `scrollTop`, and every side effect is recorded for inspection. It backs
//! the simulator binary and the test suite.

use std::cell::Cell;

use glide_core::{Axis, HostError, Rect, Result, Size};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::host::{ContentSource, ContentTransform, LayoutMetrics, NodeId, Part, ScrollHost};

/// A scroll container living entirely in memory
#[derive(Debug)]
pub struct HeadlessHost {
    valid: bool,
    attached: bool,
    detached: bool,
    content_source: Option<ContentSource>,
    /// Content origin inside the container
    origin: (f64, f64),
    viewport: Size,
    container_size: Size,
    scroll_size: Size,
    bar_thickness: f64,
    scroll_left: f64,
    scroll_top: f64,
    transform: Option<ContentTransform>,
    classes: FxHashSet<(Part, String)>,
    styles: FxHashMap<(Part, String), String>,
    thumbs: FxHashMap<Axis, (f64, f64)>,
    insets: FxHashMap<Axis, (f64, f64)>,
    children: Vec<NodeId>,
    observed: Vec<NodeId>,
    pending_failures: Cell<u32>,
    offset_writes: usize,
}

impl HeadlessHost {
    /// A container whose content shows `viewport` of `content` pixels
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            valid: true,
            attached: false,
            detached: false,
            content_source: None,
            origin: (0.0, 0.0),
            viewport,
            container_size: viewport,
            scroll_size: content,
            bar_thickness: 10.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
            transform: None,
            classes: FxHashSet::default(),
            styles: FxHashMap::default(),
            thumbs: FxHashMap::default(),
            insets: FxHashMap::default(),
            children: Vec::new(),
            observed: Vec::new(),
            pending_failures: Cell::new(0),
            offset_writes: 0,
        }
    }

    /// A host whose container cannot be mounted
    pub fn invalid() -> Self {
        Self {
            valid: false,
            ..Self::new(Size::default(), Size::default())
        }
    }

    /// Place the content node inside a larger container
    pub fn with_container(mut self, container: Size, origin: (f64, f64)) -> Self {
        self.container_size = container;
        self.origin = origin;
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(children);
        self
    }

    /// Resize the scrollable content; native offsets are re-clamped
    pub fn set_content_size(&mut self, content: Size) {
        self.scroll_size = content;
        self.scroll_left = self.scroll_left.min(self.max_offset(Axis::Horizontal));
        self.scroll_top = self.scroll_top.min(self.max_offset(Axis::Vertical));
    }

    /// Resize the visible area; native offsets are re-clamped
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.set_content_size(self.scroll_size);
    }

    pub fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Make the next `count` layout reads fail
    pub fn fail_next_measurements(&self, count: u32) {
        self.pending_failures.set(count);
    }

    pub fn content_source(&self) -> Option<&ContentSource> {
        self.content_source.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn transform(&self) -> Option<ContentTransform> {
        self.transform
    }

    pub fn has_class(&self, part: Part, class: &str) -> bool {
        self.classes.contains(&(part, class.to_string()))
    }

    pub fn style_property(&self, part: Part, name: &str) -> Option<&str> {
        self.styles
            .get(&(part, name.to_string()))
            .map(String::as_str)
    }

    /// Last thumb `(length, offset)` written for an axis
    pub fn thumb(&self, axis: Axis) -> Option<(f64, f64)> {
        self.thumbs.get(&axis).copied()
    }

    /// Last track `(start, end)` insets written for an axis
    pub fn bar_insets(&self, axis: Axis) -> Option<(f64, f64)> {
        self.insets.get(&axis).copied()
    }

    pub fn observed_children(&self) -> &[NodeId] {
        &self.observed
    }

    /// Number of native offset writes so far
    pub fn offset_writes(&self) -> usize {
        self.offset_writes
    }

    /// Largest valid native offset for an axis
    pub fn max_offset(&self, axis: Axis) -> f64 {
        (self.scroll_size.along(axis) - self.viewport.along(axis)).max(0.0)
    }

    fn track_rect(&self, axis: Axis) -> Rect {
        let (x, y) = self.origin;
        match axis {
            Axis::Vertical => Rect::new(
                x + self.viewport.width - self.bar_thickness,
                y,
                self.bar_thickness,
                self.viewport.height,
            ),
            Axis::Horizontal => Rect::new(
                x,
                y + self.viewport.height - self.bar_thickness,
                self.viewport.width - self.bar_thickness,
                self.bar_thickness,
            ),
        }
    }

    fn thumb_rect(&self, axis: Axis) -> Rect {
        let track = self.track_rect(axis);
        let (length, offset) = self
            .thumbs
            .get(&axis)
            .copied()
            .unwrap_or((track.length(axis), 0.0));
        match axis {
            Axis::Vertical => Rect::new(track.x, track.y + offset, track.width, length),
            Axis::Horizontal => Rect::new(track.x + offset, track.y, length, track.height),
        }
    }
}

impl ScrollHost for HeadlessHost {
    fn attach(&mut self, content: ContentSource) -> Result<()> {
        if !self.valid {
            return Err(HostError::InvalidContainer(
                "headless container has no element".to_string(),
            ));
        }
        self.content_source = Some(content);
        self.attached = true;
        self.detached = false;
        Ok(())
    }

    fn metrics(&self) -> Result<LayoutMetrics> {
        if self.detached {
            return Err(HostError::Detached);
        }
        let failures = self.pending_failures.get();
        if failures > 0 {
            self.pending_failures.set(failures - 1);
            return Err(HostError::Measurement(
                "injected measurement failure".to_string(),
            ));
        }

        let (x, y) = self.origin;
        let content = Rect::new(x, y, self.viewport.width, self.viewport.height);
        Ok(LayoutMetrics {
            content_rect: content,
            content_offset: content,
            scroll_size: self.scroll_size,
            container_size: self.container_size,
            horizontal_track: self.track_rect(Axis::Horizontal),
            vertical_track: self.track_rect(Axis::Vertical),
            horizontal_thumb: self.thumb_rect(Axis::Horizontal),
            vertical_thumb: self.thumb_rect(Axis::Vertical),
        })
    }

    fn scroll_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.scroll_left,
            Axis::Vertical => self.scroll_top,
        }
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        let value = value.max(0.0).min(self.max_offset(axis));
        self.offset_writes += 1;
        match axis {
            Axis::Horizontal => self.scroll_left = value,
            Axis::Vertical => self.scroll_top = value,
        }
    }

    fn set_content_transform(&mut self, transform: Option<ContentTransform>) {
        self.transform = transform;
    }

    fn set_class(&mut self, part: Part, class: &str, enabled: bool) {
        let key = (part, class.to_string());
        if enabled {
            self.classes.insert(key);
        } else {
            self.classes.remove(&key);
        }
    }

    fn set_style_property(&mut self, part: Part, name: &str, value: &str) {
        self.styles
            .insert((part, name.to_string()), value.to_string());
    }

    fn set_thumb(&mut self, axis: Axis, length: f64, offset: f64) {
        self.thumbs.insert(axis, (length, offset));
    }

    fn set_bar_insets(&mut self, axis: Axis, start: f64, end: f64) {
        self.insets.insert(axis, (start, end));
    }

    fn content_children(&self) -> Vec<NodeId> {
        self.children.clone()
    }

    fn observe_child(&mut self, child: NodeId) {
        self.observed.push(child);
    }

    fn detach(&mut self) {
        self.detached = true;
        self.attached = false;
    }
}
