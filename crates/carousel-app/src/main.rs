//! Demo application entry point

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui::{self, Align2, Color32, FontId, Rounding};
use tracing::info;

use carousel_core::{
    CarouselConfig, CarouselEngine, CarouselRegistry, Hooks, Measurements,
};
use carousel_ui::{control_bar, CarouselView, SlideView};

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x3a, 0x7b, 0xd5),
    Color32::from_rgb(0xd5, 0x6a, 0x3a),
    Color32::from_rgb(0x3a, 0xd5, 0x8c),
    Color32::from_rgb(0xb0, 0x3a, 0xd5),
    Color32::from_rgb(0xd5, 0xc0, 0x3a),
    Color32::from_rgb(0x3a, 0xc4, 0xd5),
];

/// Main application state
struct CarouselDemoApp {
    /// Keeps every engine alive and addressable by id
    registry: CarouselRegistry,

    /// Bounded carousel showing three slides with grouped handles
    gallery: CarouselView,

    /// Circular single-slide carousel advancing on a timer
    ticker: CarouselView,

    /// Pair of carousels mirroring each other's position
    synced_left: CarouselView,
    synced_right: CarouselView,
}

impl CarouselDemoApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let registry = CarouselRegistry::new();

        let gallery = Arc::new(CarouselEngine::new(
            CarouselConfig {
                visible_slides: 3,
                gutter: 8.0,
                ..Default::default()
            },
            Measurements::uniform(660.0, 140.0, 9, (220.0, 140.0)),
            Hooks {
                on_start: Some(Box::new(|index, original| {
                    info!(index, original, "gallery transition started");
                })),
                on_stop: Some(Box::new(|index, original| {
                    info!(index, original, "gallery transition finished");
                })),
            },
        )?);

        let ticker = Arc::new(CarouselEngine::new(
            CarouselConfig {
                circular: true,
                autoplay_interval: Some(Duration::from_secs(2)),
                grouped_handles: false,
                show_counter: false,
                ..Default::default()
            },
            Measurements::uniform(660.0, 120.0, 5, (660.0, 120.0)),
            Hooks::default(),
        )?);

        let paired_config = CarouselConfig {
            show_handles: false,
            ..Default::default()
        };
        let synced_left = Arc::new(CarouselEngine::new(
            paired_config.clone(),
            Measurements::uniform(320.0, 100.0, 6, (320.0, 100.0)),
            Hooks::default(),
        )?);
        let synced_right = Arc::new(CarouselEngine::new(
            paired_config,
            Measurements::uniform(320.0, 100.0, 6, (320.0, 100.0)),
            Hooks::default(),
        )?);
        synced_left.sync_with(&synced_right);
        synced_right.sync_with(&synced_left);

        for engine in [&gallery, &ticker, &synced_left, &synced_right] {
            registry.insert(engine.clone());
        }
        info!(count = registry.len(), "carousel instances created");

        Ok(Self {
            registry,
            gallery: CarouselView::new(gallery),
            ticker: CarouselView::new(ticker),
            synced_left: CarouselView::new(synced_left),
            synced_right: CarouselView::new(synced_right),
        })
    }
}

impl eframe::App for CarouselDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Gallery (bounded, 3 visible, grouped handles)");
                self.gallery.ui(ui, paint_slide);
                control_bar(ui, self.gallery.engine());

                ui.add_space(16.0);
                ui.heading("Ticker (circular, autoplay, pause on hover)");
                self.ticker.ui(ui, paint_slide);
                control_bar(ui, self.ticker.engine());

                ui.add_space(16.0);
                ui.heading("Synced pair");
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(330.0);
                        self.synced_left.ui(ui, paint_slide);
                        control_bar(ui, self.synced_left.engine());
                    });
                    ui.vertical(|ui| {
                        ui.set_width(330.0);
                        self.synced_right.ui(ui, paint_slide);
                        control_bar(ui, self.synced_right.engine());
                    });
                });

                ui.add_space(16.0);
                ui.label(format!("{} live instances", self.registry.len()));
            });
        });
    }
}

/// Paint one placeholder slide with its original (1-based) number
fn paint_slide(ui: &mut egui::Ui, slide: &SlideView) {
    let color = PALETTE[slide.original_index % PALETTE.len()];
    let rect = slide.rect.shrink(2.0);
    ui.painter().rect_filled(rect, Rounding::same(4.0), color);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        format!("Slide {}", slide.original_index + 1),
        FontId::proportional(18.0),
        Color32::WHITE,
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Starting carousel demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Carousel Demo",
        options,
        Box::new(|cc| Box::new(CarouselDemoApp::new(cc).expect("demo config is valid"))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
