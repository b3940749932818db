//! Core carousel state machine
//!
//! This crate provides the carousel's position resolution, transition
//! sequencing, gesture recognition and autoplay, independent of any UI
//! toolkit. The host supplies measured sizes and pointer samples and
//! applies the slider offset the engine reports back.

pub mod autoplay;
pub mod config;
pub mod controls;
pub mod gesture;
pub mod layout;
pub mod navigation;
pub mod registry;
pub mod slides;
pub mod transition;

// Re-export commonly used types
pub use config::{CarouselConfig, ConfigError, ConfigUpdate, Easing};
pub use controls::{Handle, NavButtons};
pub use gesture::{PointerSample, SwipeOutcome};
pub use layout::{Measurements, Metrics, ResizeDebouncer, SwipeThresholds};
pub use navigation::{
    CarouselContext, CarouselEngine, CarouselSubscriber, Hooks, Mode, NavHook,
};
pub use registry::{CarouselId, CarouselRegistry};
pub use slides::{SlideDeck, SlideId};
