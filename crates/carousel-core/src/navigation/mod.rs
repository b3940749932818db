use serde::{Deserialize, Serialize};

mod engine;
mod resolver;
mod subscriber;

pub use engine::{CarouselEngine, Hooks, NavHook};
pub use resolver::{resolve_target, Resolution};
pub use subscriber::CarouselSubscriber;

use crate::controls::{Handle, NavButtons};
use crate::registry::CarouselId;

/// Traversal policy, fixed per instance at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Navigation clamps at the first/last valid window
    Bounded,
    /// Navigation wraps past either end by physically relocating slides
    Circular,
}

/// Snapshot passed to widgets and subscribers on every change
#[derive(Debug, Clone)]
pub struct CarouselContext {
    pub id: CarouselId,
    pub mode: Mode,
    /// Display index of the left-most/top-most visible slide
    pub current_index: usize,
    /// Stable original index of that slide
    pub original_index: usize,
    pub total: usize,
    pub visible: usize,
    /// Live slider offset along the primary axis
    pub offset: f32,
    pub animating: bool,
    pub dragging: bool,
    pub enabled: bool,
    pub horizontal: bool,
    pub frame_extent: f32,
    pub frame_cross: f32,
    pub slide_extent: f32,
    pub advance: f32,
    pub gutter: f32,
    /// Original index per display slot
    pub display_order: Vec<usize>,
    pub nav: NavButtons,
    pub handles: Vec<Handle>,
    pub counter: Option<String>,
}
