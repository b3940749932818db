//! egui widgets for the carousel core
//!
//! `CarouselView` renders the sliding frame and adapts input;
//! `controls` renders the dependent navigation UI. Both operate on a
//! shared `CarouselEngine`.

pub mod controls;
pub mod widget;

pub use controls::{control_bar, counter_label, handle_row, nav_buttons};
pub use widget::{CarouselStyle, CarouselView, SlideView};
