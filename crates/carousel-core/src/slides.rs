//! Slide identity and display order
//!
//! Slides are opaque content panels owned by the host; the core only
//! tracks a stable identity per slide and the current display order.
//! Circular navigation physically rotates the display order, so a
//! slide's display index and its original index can diverge.

use serde::{Deserialize, Serialize};

/// Stable identity of a slide, independent of display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(pub usize);

/// The current display order of all slides
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck {
    order: Vec<SlideId>,
}

impl SlideDeck {
    /// Create a deck in authoring order
    pub fn new(total: usize) -> Self {
        Self {
            order: (0..total).map(SlideId).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Slides in display order
    pub fn order(&self) -> &[SlideId] {
        &self.order
    }

    /// Original index of the slide at a display position
    pub fn original_index_of(&self, display: usize) -> Option<usize> {
        self.order.get(display).map(|id| id.0)
    }

    /// Display position of the slide with an original index
    pub fn display_index_of(&self, original: usize) -> Option<usize> {
        self.order.iter().position(|id| id.0 == original)
    }

    /// Move `count` slides from the tail to the head, preserving their
    /// relative order
    pub fn rotate_tail_to_front(&mut self, count: usize) {
        let len = self.order.len();
        if len == 0 || count == 0 {
            return;
        }
        self.order.rotate_right(count.min(len));
    }

    /// Move `count` slides from the head to the tail, preserving their
    /// relative order
    pub fn rotate_head_to_back(&mut self, count: usize) {
        let len = self.order.len();
        if len == 0 || count == 0 {
            return;
        }
        self.order.rotate_left(count.min(len));
    }
}
