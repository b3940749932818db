//! Frame and slide geometry
//!
//! The host owns the visual tree; the core only consumes measured sizes
//! and produces target positions. `Measurements` is the opaque
//! "measure element size" input, `Metrics` the derived geometry every
//! other module works with.

use crate::config::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Measured sizes of the frame and the slides' natural content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub frame_width: f32,
    pub frame_height: f32,
    /// Natural (width, height) per slide, in original order
    pub slide_sizes: Vec<(f32, f32)>,
}

impl Measurements {
    /// Frame with `total` identically sized slides
    pub fn uniform(frame_width: f32, frame_height: f32, total: usize, slide: (f32, f32)) -> Self {
        Self {
            frame_width,
            frame_height,
            slide_sizes: vec![slide; total],
        }
    }
}

/// Swipe thresholds in absolute units, derived from the configured
/// fractions and the frame's primary extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub distance: f32,
    pub speed: f32,
}

/// Geometry derived from configuration and measurements
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Slides shown at once (auto-detected when configured as 0)
    pub visible: usize,
    /// Per-slide extent along the primary axis
    pub slide_extent: f32,
    /// Distance between slide origins (extent plus gutter)
    pub advance: f32,
    /// Total slider length along the primary axis
    pub slider_length: f32,
    /// Frame extent along the primary axis
    pub frame_extent: f32,
    /// Frame extent across the primary axis
    pub frame_cross: f32,
    pub gutter: f32,
    pub horizontal: bool,
    pub thresholds: SwipeThresholds,
}

impl Metrics {
    pub fn compute(config: &CarouselConfig, measurements: &Measurements, total: usize) -> Self {
        let horizontal = config.horizontal;
        let frame_extent = if horizontal {
            measurements.frame_width
        } else {
            measurements.frame_height
        };

        let max_natural = measurements
            .slide_sizes
            .iter()
            .map(|&(w, h)| if horizontal { w } else { h })
            .fold(0.0f32, f32::max);

        let visible = if config.visible_slides > 0 {
            config.visible_slides
        } else if max_natural > 0.0 {
            ((frame_extent / max_natural).round() as usize).max(1)
        } else {
            1
        };

        let slide_extent = if horizontal {
            (frame_extent / visible as f32).floor()
        } else {
            max_natural.floor()
        };
        let advance = slide_extent + config.gutter;

        let frame_cross = if horizontal {
            if config.fixed_height {
                max_cross_extent(measurements, horizontal, 0..total)
            } else {
                0.0 // recomputed per visible window by the engine
            }
        } else {
            measurements.frame_width
        };

        Self {
            visible,
            slide_extent,
            advance,
            slider_length: total as f32 * advance,
            frame_extent,
            frame_cross,
            gutter: config.gutter,
            horizontal,
            thresholds: SwipeThresholds {
                distance: config.swipe_distance_fraction * frame_extent,
                speed: config.swipe_speed_fraction * frame_extent,
            },
        }
    }

    /// Slider offset that places the slide at `index` at the frame origin
    pub fn offset_for(&self, index: usize) -> f32 {
        -(index as f32 * self.advance + 0.5 * self.gutter)
    }
}

/// Largest cross-axis extent among the given slides (by original index)
pub fn max_cross_extent(
    measurements: &Measurements,
    horizontal: bool,
    originals: impl IntoIterator<Item = usize>,
) -> f32 {
    originals
        .into_iter()
        .filter_map(|i| measurements.slide_sizes.get(i))
        .map(|&(w, h)| if horizontal { h } else { w })
        .fold(0.0f32, f32::max)
}

/// Coalesces measurement changes so a resize storm relayouts once
///
/// `observe` records the latest measurements; `poll` hands them out once
/// they have been stable for the debounce window.
#[derive(Debug)]
pub struct ResizeDebouncer {
    window: Duration,
    pending: Option<(Measurements, Instant)>,
}

impl ResizeDebouncer {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn observe(&mut self, measurements: Measurements, now: Instant) {
        self.pending = Some((measurements, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<Measurements> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.window => {
                self.pending.take().map(|(m, _)| m)
            }
            _ => None,
        }
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CarouselConfig {
        CarouselConfig::default()
    }

    #[test]
    fn horizontal_metrics_divide_frame_by_visible() {
        let cfg = CarouselConfig {
            visible_slides: 3,
            gutter: 10.0,
            ..config()
        };
        let m = Measurements::uniform(600.0, 200.0, 9, (200.0, 150.0));
        let metrics = Metrics::compute(&cfg, &m, 9);

        assert_eq!(metrics.visible, 3);
        assert_eq!(metrics.slide_extent, 200.0);
        assert_eq!(metrics.advance, 210.0);
        assert_eq!(metrics.slider_length, 9.0 * 210.0);
        assert_eq!(metrics.frame_cross, 150.0);
    }

    #[test]
    fn visible_auto_detect_rounds_frame_over_slide_extent() {
        let cfg = CarouselConfig {
            visible_slides: 0,
            ..config()
        };
        let m = Measurements::uniform(620.0, 200.0, 5, (200.0, 100.0));
        assert_eq!(Metrics::compute(&cfg, &m, 5).visible, 3);

        let empty = Measurements::uniform(620.0, 200.0, 0, (0.0, 0.0));
        assert_eq!(Metrics::compute(&cfg, &empty, 0).visible, 1);
    }

    #[test]
    fn offsets_include_half_gutter() {
        let cfg = CarouselConfig {
            visible_slides: 1,
            gutter: 10.0,
            ..config()
        };
        let m = Measurements::uniform(300.0, 100.0, 4, (300.0, 100.0));
        let metrics = Metrics::compute(&cfg, &m, 4);

        assert_eq!(metrics.offset_for(0), -5.0);
        assert_eq!(metrics.offset_for(2), -(2.0 * 310.0 + 5.0));
    }

    #[test]
    fn thresholds_scale_with_frame_extent() {
        let m = Measurements::uniform(500.0, 100.0, 2, (500.0, 100.0));
        let metrics = Metrics::compute(&config(), &m, 2);
        assert_eq!(metrics.thresholds.distance, 150.0);
        assert_eq!(metrics.thresholds.speed, 200.0);
    }

    #[test]
    fn vertical_metrics_use_slide_height() {
        let cfg = CarouselConfig {
            horizontal: false,
            visible_slides: 2,
            ..config()
        };
        let m = Measurements::uniform(300.0, 400.0, 4, (300.0, 120.0));
        let metrics = Metrics::compute(&cfg, &m, 4);

        assert_eq!(metrics.slide_extent, 120.0);
        assert_eq!(metrics.frame_extent, 400.0);
        assert_eq!(metrics.frame_cross, 300.0);
    }

    #[test]
    fn window_cross_extent_tracks_the_tallest_visible_slide() {
        let m = Measurements {
            frame_width: 300.0,
            frame_height: 0.0,
            slide_sizes: vec![(100.0, 80.0), (100.0, 220.0), (100.0, 120.0)],
        };
        assert_eq!(max_cross_extent(&m, true, [0, 2]), 120.0);
        assert_eq!(max_cross_extent(&m, true, 0..3), 220.0);
    }

    #[test]
    fn debouncer_coalesces_to_the_last_observation() {
        let t0 = Instant::now();
        let mut debouncer = ResizeDebouncer::default();

        let a = Measurements::uniform(100.0, 50.0, 1, (100.0, 50.0));
        let b = Measurements::uniform(200.0, 50.0, 1, (200.0, 50.0));

        debouncer.observe(a, t0);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(50)), None);

        debouncer.observe(b.clone(), t0 + Duration::from_millis(60));
        // The first observation no longer counts; the window restarts
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(120)), None);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(160)), Some(b));
        // Drained
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(300)), None);
    }
}
