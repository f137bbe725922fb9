//! egui renderer for the application UI.

pub mod style;

use eframe::egui::{self, Frame, Margin, ProgressBar, RichText, SliderClamping, Ui};

use crate::diagnostics;
use crate::egui_app::controller::AppController;
use crate::egui_app::state::ResultState;
use crate::egui_app::view_model::{ConfidenceTier, PredictionView};
use crate::features::{FEATURE_CONTROLS, FeatureGroup};
use crate::species::ALL_SPECIES;

/// Minimum usable window size.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2 { x: 760.0, y: 540.0 };

const PROBABILITY_BAR_WIDTH: f32 = 220.0;
const SPECIES_LABEL_WIDTH: f32 = 84.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AppController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.colored_label(status.badge_color, "●");
                ui.label(RichText::new(&status.badge_label).strong());
                ui.separator();
                ui.label(RichText::new(&status.text));
            });
        });
    }

    fn render_diagnostics(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::right("diagnostics_panel")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("About");
                ui.label(
                    "Classifies iris flowers from four measurements using a \
                     pre-fitted scaler and softmax model loaded at startup.",
                );
                ui.add_space(12.0);
                ui.heading("System");
                ui.label(format!("App version: {}", diagnostics::APP_VERSION));
                ui.label(RichText::new(diagnostics::RUSTC_VERSION).color(palette.text_muted));
                ui.add_space(12.0);
                ui.checkbox(
                    &mut self.controller.ui.show_file_listing,
                    "Show file listing",
                );
                if self.controller.ui.show_file_listing {
                    ui.add_space(4.0);
                    ui.label(RichText::new("Working directory").strong());
                    egui::ScrollArea::vertical()
                        .id_salt("diagnostics_listing")
                        .max_height(220.0)
                        .show(ui, |ui| {
                            for entry in diagnostics::working_dir_listing() {
                                ui.monospace(format!("{} {}", entry.indicator(), entry.name));
                            }
                        });
                }
            });
    }

    fn render_unready(&mut self, ui: &mut Ui) {
        let message = self.controller.unready_message().unwrap_or_default();
        ui.add_space(16.0);
        ui.heading("Artifacts failed to load");
        ui.add_space(8.0);
        ui.label(RichText::new(message).monospace().color(style::palette().warning));
    }

    fn render_sliders(&mut self, ui: &mut Ui) {
        let mut changed = false;
        ui.columns(2, |columns| {
            columns[0].label(RichText::new("Sepal").strong());
            columns[1].label(RichText::new("Petal").strong());
            for (control, value) in FEATURE_CONTROLS
                .iter()
                .zip(self.controller.ui.sliders.values.iter_mut())
            {
                let column = match control.group {
                    FeatureGroup::Sepal => &mut columns[0],
                    FeatureGroup::Petal => &mut columns[1],
                };
                let slider = egui::Slider::new(value, control.min..=control.max)
                    .text(control.label)
                    .step_by(control.step)
                    .clamping(SliderClamping::Always);
                let response = column.add(slider).on_hover_text(control.help);
                if response.changed() {
                    changed = true;
                }
                column.add_space(6.0);
            }
        });
        if changed {
            self.controller.inputs_changed();
        }
    }

    fn render_input_echo(&self, ui: &mut Ui) {
        let values = self.controller.ui.sliders.vector();
        ui.label(RichText::new("Current input").strong());
        egui::Grid::new("input_echo").num_columns(2).show(ui, |ui| {
            for (control, value) in FEATURE_CONTROLS.iter().zip(values.iter()) {
                ui.label(control.label);
                ui.monospace(format!("{value:.1}"));
                ui.end_row();
            }
        });
    }

    fn render_predict_button(&mut self, ui: &mut Ui) {
        let computing = matches!(self.controller.ui.result, ResultState::Computing);
        let button = egui::Button::new(RichText::new("Predict species").strong())
            .min_size(egui::Vec2 {
                x: ui.available_width(),
                y: 32.0,
            });
        if ui.add_enabled(!computing, button).clicked() {
            self.controller.request_predict();
        }
    }

    fn render_result(&mut self, ui: &mut Ui) {
        match &self.controller.ui.result {
            ResultState::Idle => {
                ui.label(
                    RichText::new("No prediction yet.").color(style::palette().text_muted),
                );
            }
            ResultState::Computing => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.label("Classifying…");
                });
            }
            ResultState::Displayed(view) => {
                render_prediction(ui, view);
            }
            ResultState::Failed(message) => {
                ui.colored_label(style::palette().warning, message);
            }
        }
    }
}

fn render_prediction(ui: &mut Ui, view: &PredictionView) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.heading(view.label);
        let tier_color = match view.tier {
            ConfidenceTier::High => palette.success,
            ConfidenceTier::Medium => palette.accent,
        };
        ui.label(RichText::new(view.tier.label()).color(tier_color));
    });
    ui.label(format!("Confidence: {}", view.confidence_percent));
    ui.add_space(8.0);

    ui.label(RichText::new("Probability distribution").strong());
    for row in &view.rows {
        ui.horizontal(|ui| {
            ui.add_sized(
                [SPECIES_LABEL_WIDTH, 18.0],
                egui::Label::new(row.species.label()),
            );
            ui.add(
                ProgressBar::new(row.fraction)
                    .desired_width(PROBABILITY_BAR_WIDTH)
                    .fill(palette.accent),
            );
            ui.monospace(row.percent.as_str());
        });
    }
    ui.add_space(8.0);

    Frame::new()
        .fill(palette.bg_tertiary)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Species notes").strong());
            for species in ALL_SPECIES {
                ui.label(format!("{}: {}", species.label(), species.trait_note()));
            }
        });
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.step();
        self.render_status(ctx);
        self.render_diagnostics(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().id_salt("main_scroll").show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading("Iris classifier");
                ui.label(
                    RichText::new("Predict the species from four measurements")
                        .color(style::palette().text_muted),
                );
                ui.add_space(12.0);
                if self.controller.is_ready() {
                    self.render_sliders(ui);
                    ui.add_space(8.0);
                    self.render_input_echo(ui);
                    ui.add_space(12.0);
                    self.render_predict_button(ui);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.render_result(ui);
                } else {
                    self.render_unready(ui);
                }
            });
        });

        // Computing needs one more frame to run the queued inference.
        if matches!(self.controller.ui.result, ResultState::Computing) {
            ctx.request_repaint();
        }
    }
}
