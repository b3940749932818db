//! Navigational controls
//!
//! Prev/next buttons, the handle row and the counter, rendered from a
//! `CarouselContext` snapshot. Enabled/disabled/active state comes
//! entirely from the core; these widgets only issue commands back.

use carousel_core::{CarouselContext, CarouselEngine};
use egui::{Button, RichText, SelectableLabel, Ui};
use std::sync::Arc;

/// Show the prev/next button pair
pub fn nav_buttons(ui: &mut Ui, engine: &Arc<CarouselEngine>, context: &CarouselContext) {
    let prev = ui.add_enabled(context.nav.prev_enabled, Button::new("◀"));
    if prev.on_hover_text("Show previous slide").clicked() {
        engine.prev();
    }

    let next = ui.add_enabled(context.nav.next_enabled, Button::new("▶"));
    if next.on_hover_text("Show next slide").clicked() {
        engine.next();
    }
}

/// Show one handle per slide (or per group, when grouped)
pub fn handle_row(ui: &mut Ui, engine: &Arc<CarouselEngine>, context: &CarouselContext) {
    for handle in &context.handles {
        let label = SelectableLabel::new(handle.active, &handle.label);
        if ui.add_enabled(context.enabled, label).clicked() {
            engine.go_to_original(handle.target_original);
        }
    }
}

/// Show the "x of y" counter when configured
pub fn counter_label(ui: &mut Ui, context: &CarouselContext) {
    if let Some(text) = &context.counter {
        ui.label(RichText::new(text).strong());
    }
}

/// Convenience row combining all controls for one carousel
pub fn control_bar(ui: &mut Ui, engine: &Arc<CarouselEngine>) {
    let context = engine.context();
    ui.horizontal(|ui| {
        nav_buttons(ui, engine, &context);
        if !context.handles.is_empty() {
            ui.separator();
            handle_row(ui, engine, &context);
        }
        if context.counter.is_some() {
            ui.separator();
            counter_label(ui, &context);
        }
    });
}
