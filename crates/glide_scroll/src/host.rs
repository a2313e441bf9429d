//! Host abstraction
//!
//! The engine never touches a document directly. A [`ScrollHost`] owns the
//! container node, the content node and the two scrollbar tracks, answers
//! layout queries and applies the side effects the engine decides on.

use glide_core::{Axis, Rect, Result, Size};

/// Host-assigned identifier of a content child
pub type NodeId = u64;

/// How the content node is obtained when mounting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// The caller supplied a content node; mount it inside the container
    /// if it is not there yet
    Existing,
    /// The caller supplied markup; create a node holding it
    Markup(String),
    /// No content given: create a fresh container in place of the given
    /// node (taking over its id) and re-parent the node as the content
    #[default]
    WrapChildren,
}

/// A node the engine addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Container,
    Content,
    /// Scrollbar track for an axis
    Bar(Axis),
}

/// Visual overscroll offset applied to the content node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub axis: Axis,
    /// Translation in pixels
    pub offset: f64,
}

impl ContentTransform {
    /// CSS `transform` value, e.g. `translateY(-12.5px)`
    pub fn to_css(&self) -> String {
        match self.axis {
            Axis::Horizontal => format!("translateX({}px)", self.offset),
            Axis::Vertical => format!("translateY({}px)", self.offset),
        }
    }
}

/// One consistent read of everything the engine measures
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Bounding client rect of the content node
    pub content_rect: Rect,
    /// Content offset box relative to the container
    pub content_offset: Rect,
    /// Scrollable size of the content (`scrollWidth`/`scrollHeight`)
    pub scroll_size: Size,
    /// Container offset size
    pub container_size: Size,
    pub horizontal_track: Rect,
    pub vertical_track: Rect,
    pub horizontal_thumb: Rect,
    pub vertical_thumb: Rect,
}

impl LayoutMetrics {
    /// Track rect of the scrollbar for an axis
    pub fn track(&self, axis: Axis) -> Rect {
        match axis {
            Axis::Horizontal => self.horizontal_track,
            Axis::Vertical => self.vertical_track,
        }
    }

    /// Thumb rect of the scrollbar for an axis
    pub fn thumb(&self, axis: Axis) -> Rect {
        match axis {
            Axis::Horizontal => self.horizontal_thumb,
            Axis::Vertical => self.vertical_thumb,
        }
    }
}

/// Document-side collaborator of a scroll container
pub trait ScrollHost {
    /// Mount the container, content node and scrollbar tracks.
    ///
    /// Fails with [`HostError::InvalidContainer`](glide_core::HostError::InvalidContainer)
    /// when the container is not a usable element.
    fn attach(&mut self, content: ContentSource) -> Result<()>;

    /// Read current layout
    fn metrics(&self) -> Result<LayoutMetrics>;

    /// Native scroll offset of the content node
    fn scroll_offset(&self, axis: Axis) -> f64;

    /// Write the native scroll offset. Hosts clamp to the valid range the
    /// way browsers do.
    fn set_scroll_offset(&mut self, axis: Axis, value: f64);

    /// Apply or clear the overscroll transform on the content node
    fn set_content_transform(&mut self, transform: Option<ContentTransform>);

    fn set_class(&mut self, part: Part, class: &str, enabled: bool);

    /// Write a CSS custom property
    fn set_style_property(&mut self, part: Part, name: &str, value: &str);

    /// Size and position the thumb inside its track
    fn set_thumb(&mut self, axis: Axis, length: f64, offset: f64);

    /// Position a track relative to the container edges
    fn set_bar_insets(&mut self, axis: Axis, start: f64, end: f64);

    /// Current children of the content node
    fn content_children(&self) -> Vec<NodeId>;

    /// Start reporting size changes of a child through
    /// [`Scrollable::on_child_resized`](crate::Scrollable::on_child_resized)
    fn observe_child(&mut self, child: NodeId);

    /// Remove every listener and observer installed for this container
    fn detach(&mut self);
}
