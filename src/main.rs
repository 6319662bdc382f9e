//! cadran-rs - Concentric Graduation Clock
//!
//! This application renders the time of day as three concentric rings of
//! tick marks (hours, minutes, seconds), recoloring each tick relative to
//! the unit it represents:
//! - Elapsed ticks take a per-ring color
//! - The current tick is highlighted
//! - Everything else stays in the base color
//!
//! The side panel tunes the stroke style live; the values persist between
//! runs.

use eframe::egui;

mod face;
mod render;
mod settings;
mod time;

use render::{ClockFace, FaceSettings, RING_TICKS};
use settings::AppSettings;
use time::{SystemClock, TimeSource};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting cadran-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_title("cadran-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "cadran-rs",
        options,
        Box::new(|cc| Ok(Box::new(CadranApp::new(cc)))),
    )
}

/// Main application state
pub struct CadranApp {
    clock: SystemClock,
    face: ClockFace,
    show_settings: bool,
}

impl CadranApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            clock: SystemClock,
            face: ClockFace::new(),
            show_settings: true,
        };
        AppSettings::load().apply(&mut app);
        app
    }
}

impl eframe::App for CadranApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        // One clock sample per frame, shared by all three rings.
        let now = self.clock.now();

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("cadran-rs");
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Style");
                ui.separator();
                ui.label(now.to_string());
            });
        });

        // Style tuning panel
        if self.show_settings {
            egui::SidePanel::left("style_panel")
                .min_width(220.0)
                .show(ctx, |ui| {
                    ui.heading("Style");
                    ui.separator();

                    let style = &mut self.face.settings.style;

                    ui.add(egui::Slider::new(&mut style.line_width, 1.0..=10.0).text("Line width"));

                    ui.horizontal(|ui| {
                        ui.color_edit_button_srgba(&mut style.base);
                        ui.label("Base");
                    });
                    ui.horizontal(|ui| {
                        ui.color_edit_button_srgba(&mut style.current);
                        ui.label("Now");
                    });

                    ui.separator();

                    ui.collapsing("Elapsed", |ui| {
                        ui.horizontal(|ui| {
                            ui.color_edit_button_srgba(&mut style.past_hour);
                            ui.label("Hours");
                        });
                        ui.horizontal(|ui| {
                            ui.color_edit_button_srgba(&mut style.past_minute);
                            ui.label("Minutes");
                        });
                        ui.horizontal(|ui| {
                            ui.color_edit_button_srgba(&mut style.past_second);
                            ui.label("Seconds");
                        });
                    });

                    ui.collapsing("Display", |ui| {
                        ui.horizontal(|ui| {
                            ui.color_edit_button_srgba(&mut self.face.settings.background);
                            ui.label("Background");
                        });
                    });

                    ui.separator();

                    if ui.button("Reset to defaults").clicked() {
                        self.face.settings = FaceSettings::default();
                    }
                });
        }

        // Main clock face
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.small(format!("Ticks: {}", 3 * RING_TICKS));
                    ui.separator();
                    ui.small(format!("Time: {}", now));
                });

                self.face.show(ui, now, None);
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_app(self).save();
    }
}
