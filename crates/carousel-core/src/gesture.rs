//! Swipe gesture recognition
//!
//! Consumes a normalized stream of pointer samples for one continuous
//! interaction and resolves it into either a slide delta, a re-snap to
//! the current slide, or nothing. The recognizer classifies the
//! interaction as a drag along the primary axis or an orthogonal scroll
//! on the first decisive sample and sticks with that classification.

use crate::layout::SwipeThresholds;
use std::time::Instant;

/// One normalized pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub t: Instant,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, t: Instant) -> Self {
        Self { x, y, t }
    }
}

/// Live feedback for a sample during an interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Primary-axis drag: apply this un-eased offset delta to the slider
    DragBy(f32),
    /// Classified as an orthogonal scroll (or no interaction is active)
    Ignored,
}

/// Resolution of a finished interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome {
    /// Move `slides` slides in `direction` (-1 backward, +1 forward)
    Swipe { slides: usize, direction: i64 },
    /// Thresholds not met: animate back to the current slide
    Snap,
    /// The interaction never became a drag
    None,
}

/// Per-interaction swipe state
#[derive(Debug)]
pub struct SwipeRecognizer {
    horizontal: bool,
    start: Option<PointerSample>,
    dragging: bool,
    scrolling: bool,
}

impl SwipeRecognizer {
    pub fn new(horizontal: bool) -> Self {
        Self {
            horizontal,
            start: None,
            dragging: false,
            scrolling: false,
        }
    }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a new interaction, superseding any unresolved one
    pub fn begin(&mut self, sample: PointerSample) {
        self.start = Some(sample);
        self.dragging = false;
        self.scrolling = false;
    }

    /// Feed a sample of the live interaction
    pub fn update(&mut self, sample: PointerSample) -> DragUpdate {
        let Some(start) = self.start else {
            return DragUpdate::Ignored;
        };
        if self.scrolling && !self.dragging {
            return DragUpdate::Ignored;
        }

        let (primary, secondary) = self.distance(start, sample);
        if primary.abs() > secondary.abs() || self.dragging {
            self.dragging = true;
            DragUpdate::DragBy(primary)
        } else {
            self.scrolling = true;
            DragUpdate::Ignored
        }
    }

    /// Resolve the interaction; the recognizer is reset afterwards
    ///
    /// `slide_extent` is the bare per-slide extent, without the gutter:
    /// a drag of N slide widths moves N slides regardless of spacing.
    pub fn finish(
        &mut self,
        sample: PointerSample,
        thresholds: SwipeThresholds,
        slide_extent: f32,
    ) -> SwipeOutcome {
        let start = self.start.take();
        let dragging = std::mem::take(&mut self.dragging);
        self.scrolling = false;

        let Some(start) = start else {
            return SwipeOutcome::None;
        };
        if !dragging {
            return SwipeOutcome::None;
        }

        let (primary, _) = self.distance(start, sample);
        let elapsed_ms = sample.t.saturating_duration_since(start.t).as_millis() as f32;
        let speed = if elapsed_ms > 0.0 {
            primary.abs() / elapsed_ms * 1000.0
        } else {
            f32::INFINITY
        };

        if primary.abs() > thresholds.distance || speed > thresholds.speed {
            let mut slides = if slide_extent > 0.0 {
                (primary.abs() / slide_extent).round() as usize
            } else {
                0
            };
            // A short but quick flick still moves exactly one slide
            if slides < 1 && speed > thresholds.speed {
                slides = 1;
            }
            if slides == 0 {
                return SwipeOutcome::Snap;
            }
            // Dragging content to the right reveals the previous slide
            let direction = if primary > 0.0 { -1 } else { 1 };
            SwipeOutcome::Swipe { slides, direction }
        } else {
            SwipeOutcome::Snap
        }
    }

    /// (primary, secondary) axis deltas, swapped for vertical carousels
    fn distance(&self, start: PointerSample, end: PointerSample) -> (f32, f32) {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        if self.horizontal {
            (dx, dy)
        } else {
            (dy, dx)
        }
    }
}
