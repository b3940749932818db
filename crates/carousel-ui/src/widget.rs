//! Carousel frame widget
//!
//! Renders the sliding frame for a `CarouselEngine` and adapts egui
//! input to the core's normalized channels: drags become pointer
//! samples, key presses become navigation commands, hover drives the
//! autoplay pause, and frame-size changes feed the resize debouncer.

use carousel_core::{CarouselContext, CarouselEngine, PointerSample, ResizeDebouncer};
use egui::{Color32, Key, Layout, Pos2, Rect, Rounding, Sense, Ui, Vec2};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

const DIGIT_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Visual configuration of the frame
#[derive(Debug, Clone)]
pub struct CarouselStyle {
    pub frame_fill: Color32,
    pub frame_rounding: f32,
    /// Lower bound for the cross extent so an empty carousel still
    /// occupies space
    pub min_frame_cross: f32,
}

impl Default for CarouselStyle {
    fn default() -> Self {
        Self {
            frame_fill: Color32::from_gray(30),
            frame_rounding: 4.0,
            min_frame_cross: 40.0,
        }
    }
}

/// One slide handed to the slide painter
#[derive(Debug, Clone, Copy)]
pub struct SlideView {
    /// Position in the current display order
    pub display_index: usize,
    /// Stable original index
    pub original_index: usize,
    /// Screen rectangle of the slide
    pub rect: Rect,
    /// Whether the slide is inside the visible window
    pub active: bool,
}

/// Retained egui adapter for one carousel instance
pub struct CarouselView {
    engine: Arc<CarouselEngine>,
    style: CarouselStyle,
    debouncer: ResizeDebouncer,
}

impl CarouselView {
    pub fn new(engine: Arc<CarouselEngine>) -> Self {
        Self {
            engine,
            style: CarouselStyle::default(),
            debouncer: ResizeDebouncer::default(),
        }
    }

    pub fn with_style(mut self, style: CarouselStyle) -> Self {
        self.style = style;
        self
    }

    pub fn engine(&self) -> &Arc<CarouselEngine> {
        &self.engine
    }

    /// Show the carousel frame, painting each slide through `slide_ui`
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        mut slide_ui: impl FnMut(&mut Ui, &SlideView),
    ) -> egui::Response {
        let now = Instant::now();
        let context = self.engine.context();
        let config = self.engine.config();

        let size = if context.horizontal {
            Vec2::new(
                ui.available_width(),
                context.frame_cross.max(self.style.min_frame_cross),
            )
        } else {
            Vec2::new(
                context.frame_cross.max(self.style.min_frame_cross),
                context.frame_extent,
            )
        };
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        // Observe frame-size changes; the debouncer coalesces a resize
        // storm into a single relayout
        if config.responsive && context.horizontal && (rect.width() - context.frame_extent).abs() > 0.5
        {
            let mut measurements = self.engine.measurements();
            measurements.frame_width = rect.width();
            self.debouncer.observe(measurements, now);
        }
        if let Some(measurements) = self.debouncer.poll(now) {
            debug!(id = %context.id, width = measurements.frame_width, "applying debounced resize");
            self.engine.resize(measurements);
        }

        self.engine.set_hovered(response.hovered());

        if config.touch_enabled {
            if let Some(pos) = response.interact_pointer_pos() {
                let sample = PointerSample::new(pos.x, pos.y, now);
                if response.drag_started() {
                    self.engine.pointer_start(sample);
                } else if response.dragged() {
                    self.engine.pointer_move(sample);
                }
            }
            if response.drag_released() {
                let pos = response
                    .interact_pointer_pos()
                    .or_else(|| ui.input(|i| i.pointer.latest_pos()))
                    .unwrap_or_else(|| rect.center());
                self.engine.pointer_end(PointerSample::new(pos.x, pos.y, now));
            }
        }

        if config.keyboard_nav && context.enabled && response.hovered() {
            self.keyboard_input(ui);
        }

        // Frame background
        ui.painter().rect_filled(
            rect,
            Rounding::same(self.style.frame_rounding),
            self.style.frame_fill,
        );

        // Refresh after input so the paint uses the live offset
        let context = self.engine.context();
        for (display_index, &original_index) in context.display_order.iter().enumerate() {
            let slide_rect = slide_rect(&context, rect, display_index);
            if !rect.intersects(slide_rect) {
                continue;
            }

            let view = SlideView {
                display_index,
                original_index,
                rect: slide_rect,
                active: display_index >= context.current_index
                    && display_index < context.current_index + context.visible,
            };
            let mut child = ui.child_ui(slide_rect, Layout::default());
            child.set_clip_rect(rect.intersect(slide_rect));
            slide_ui(&mut child, &view);
        }

        if self.engine.tick(now) {
            ui.ctx().request_repaint();
        }

        response
    }

    fn keyboard_input(&self, ui: &Ui) {
        let (prev, next, digit) = ui.input(|input| {
            (
                input.key_pressed(Key::ArrowLeft) || input.key_pressed(Key::P),
                input.key_pressed(Key::ArrowRight) || input.key_pressed(Key::N),
                DIGIT_KEYS.iter().position(|key| input.key_pressed(*key)),
            )
        });

        if prev {
            self.engine.prev();
        }
        if next {
            self.engine.next();
        }
        if let Some(original) = digit {
            self.engine.go_to_original(original);
        }
    }
}

/// Screen rectangle of one display slot, given the live slider offset
fn slide_rect(context: &CarouselContext, frame: Rect, display_index: usize) -> Rect {
    let along = context.offset + display_index as f32 * context.advance + 0.5 * context.gutter;
    if context.horizontal {
        Rect::from_min_size(
            Pos2::new(frame.left() + along, frame.top()),
            Vec2::new(context.slide_extent, frame.height()),
        )
    } else {
        Rect::from_min_size(
            Pos2::new(frame.left(), frame.top() + along),
            Vec2::new(frame.width(), context.slide_extent),
        )
    }
}
