use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use yew::prelude::*;

/// Which sections have been revealed. Entries only ever go from hidden to
/// visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityMap {
    visible: HashMap<String, bool>,
}

impl VisibilityMap {
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Returns true if this call flipped the section.
    pub fn reveal(&mut self, id: &str) -> bool {
        let flag = self.visible.entry(id.to_string()).or_insert(false);
        let flipped = !*flag;
        *flag = true;
        flipped
    }

    /// `"reveal"` plus `"visible"` once the section has been seen.
    pub fn class_for(&self, id: &str) -> Classes {
        classes!("reveal", self.is_visible(id).then_some("visible"))
    }
}

impl Reducible for VisibilityMap {
    type Action = String;

    fn reduce(self: Rc<Self>, id: String) -> Rc<Self> {
        if self.is_visible(&id) {
            return self;
        }
        let mut next = (*self).clone();
        next.reveal(&id);
        next.into()
    }
}

/// Slack allowed below the threshold for float rounding in reported ratios.
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// One-shot watches over a fixed set of sections.
///
/// The first time a watched section's visible fraction reaches the threshold
/// its flag flips and the watch is released. Later readings are ignored.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    watching: HashSet<String>,
    visibility: VisibilityMap,
}

impl RevealTracker {
    pub fn initialize<I, S>(section_ids: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            threshold,
            watching: section_ids.into_iter().map(Into::into).collect(),
            visibility: VisibilityMap::default(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watching.contains(id)
    }

    pub fn watch_count(&self) -> usize {
        self.watching.len()
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    /// Feeds one visibility reading. Returns true when this reading revealed
    /// the section, in which case the caller should drop its observer.
    ///
    /// Browsers report a crossing of 0.15 as e.g. 0.1499999, so readings within
    /// [`RATIO_TOLERANCE`] of the threshold count as having reached it.
    pub fn record(&mut self, id: &str, visible_fraction: f64) -> bool {
        if !self.watching.contains(id) || visible_fraction + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.watching.remove(id);
        self.visibility.reveal(id)
    }

    /// Stops watching a section without revealing it (e.g. it is not on the page).
    pub fn release(&mut self, id: &str) -> bool {
        self.watching.remove(id)
    }

    pub fn release_all(&mut self) {
        self.watching.clear();
    }
}
