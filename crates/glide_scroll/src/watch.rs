//! Child observation bookkeeping
//!
//! Content children are observed for size changes once each, however often
//! the child list changes.

use rustc_hash::FxHashSet;

use crate::host::NodeId;

#[derive(Debug, Default)]
pub struct ObserveList {
    observing: FxHashSet<NodeId>,
}

impl ObserveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `children` as observed and return the ones seen for the first time
    pub fn register(&mut self, children: impl IntoIterator<Item = NodeId>) -> Vec<NodeId> {
        children
            .into_iter()
            .filter(|child| self.observing.insert(*child))
            .collect()
    }

    pub fn is_observing(&self, child: NodeId) -> bool {
        self.observing.contains(&child)
    }

    pub fn len(&self) -> usize {
        self.observing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observing.is_empty()
    }

    pub fn clear(&mut self) {
        self.observing.clear();
    }
}
