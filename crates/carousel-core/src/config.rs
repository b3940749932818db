//! Carousel configuration
//!
//! Configuration is an immutable value type: it is validated and defaulted
//! once at construction, and `update()` on the engine merges a partial
//! overlay into a fresh copy instead of mutating shared defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised by configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("step must be at least 1")]
    ZeroStep,

    #[error("{name} must be a positive fraction, got {value}")]
    BadFraction { name: &'static str, value: f32 },
}

/// Easing curve applied to animated transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Full carousel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of slides shown at once; 0 means auto-detect from measured sizes
    pub visible_slides: usize,

    /// Wrap past either end by relocating slides to the opposite end
    pub circular: bool,

    /// Primary axis; false lays the slider out vertically
    pub horizontal: bool,

    /// Slides advanced per prev/next command
    pub step: usize,

    /// Spacing between slides, in the same units as measurements
    pub gutter: f32,

    /// Animated transition length
    pub duration: Duration,

    /// Transition easing curve
    pub easing: Easing,

    /// Auto-advance interval; `None` disables autoplay
    pub autoplay_interval: Option<Duration>,

    /// Hovering the carousel pauses (not disables) autoplay
    pub pause_autoplay_on_hover: bool,

    /// Arrow / letter / digit key navigation
    pub keyboard_nav: bool,

    /// Pointer swipe navigation
    pub touch_enabled: bool,

    /// Swipe distance threshold as a fraction of the frame's primary extent
    pub swipe_distance_fraction: f32,

    /// Swipe speed threshold as a fraction of the frame's primary extent per second
    pub swipe_speed_fraction: f32,

    /// Fix the frame cross extent to the tallest slide instead of
    /// recomputing it per visible group
    pub fixed_height: bool,

    /// Combine handles into one per visible group ("1 - 3", "4 - 6", "7")
    pub grouped_handles: bool,

    /// React to frame size changes (debounced)
    pub responsive: bool,

    /// Slide shown on init
    pub initial_slide: usize,

    /// Counter text template; `%current%` and `%total%` are substituted
    pub counter_template: String,

    /// Which navigational elements the widget renders
    pub show_prev_next: bool,
    pub show_handles: bool,
    pub show_counter: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_slides: 1,
            circular: false,
            horizontal: true,
            step: 1,
            gutter: 0.0,
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            autoplay_interval: None,
            pause_autoplay_on_hover: true,
            keyboard_nav: true,
            touch_enabled: true,
            swipe_distance_fraction: 0.3,
            swipe_speed_fraction: 0.4,
            fixed_height: true,
            grouped_handles: true,
            responsive: true,
            initial_slide: 0,
            counter_template: "%current% of %total%".to_string(),
            show_prev_next: true,
            show_handles: true,
            show_counter: true,
        }
    }
}

impl CarouselConfig {
    /// Check invariants that clamping cannot repair
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        for (name, value) in [
            ("swipe_distance_fraction", self.swipe_distance_fraction),
            ("swipe_speed_fraction", self.swipe_speed_fraction),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::BadFraction { name, value });
            }
        }
        Ok(())
    }
}

/// Partial configuration overlay used by `update()`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    pub visible_slides: Option<usize>,
    pub circular: Option<bool>,
    pub horizontal: Option<bool>,
    pub step: Option<usize>,
    pub gutter: Option<f32>,
    pub duration: Option<Duration>,
    pub easing: Option<Easing>,
    pub autoplay_interval: Option<Option<Duration>>,
    pub pause_autoplay_on_hover: Option<bool>,
    pub keyboard_nav: Option<bool>,
    pub touch_enabled: Option<bool>,
    pub swipe_distance_fraction: Option<f32>,
    pub swipe_speed_fraction: Option<f32>,
    pub fixed_height: Option<bool>,
    pub grouped_handles: Option<bool>,
    pub responsive: Option<bool>,
    pub counter_template: Option<String>,
    pub show_prev_next: Option<bool>,
    pub show_handles: Option<bool>,
    pub show_counter: Option<bool>,
}

impl ConfigUpdate {
    /// Produce a new configuration with this overlay applied
    pub fn merge(&self, base: &CarouselConfig) -> CarouselConfig {
        let mut merged = base.clone();

        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = self.$field.clone() {
                        merged.$field = value;
                    }
                )*
            };
        }

        overlay!(
            visible_slides,
            circular,
            horizontal,
            step,
            gutter,
            duration,
            easing,
            autoplay_interval,
            pause_autoplay_on_hover,
            keyboard_nav,
            touch_enabled,
            swipe_distance_fraction,
            swipe_speed_fraction,
            fixed_height,
            grouped_handles,
            responsive,
            counter_template,
            show_prev_next,
            show_handles,
            show_counter,
        );

        merged
    }
}
