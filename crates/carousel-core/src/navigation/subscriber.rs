//! Carousel subscriber trait

use super::CarouselContext;

/// Trait for components that need to respond to carousel changes
pub trait CarouselSubscriber: Send + Sync {
    /// Called after every resolved navigation, layout change or
    /// enable/disable flip
    fn on_carousel_change(&self, context: &CarouselContext);
}
