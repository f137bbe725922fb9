//! Shared state types for the egui UI.

use std::path::Path;

use eframe::egui::Color32;

use crate::egui_app::ui::style;
use crate::egui_app::view_model::PredictionView;
use crate::features::SliderState;

/// Top-level UI model consumed by the renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sliders: SliderState,
    pub result: ResultState,
    pub status: StatusBarState,
    /// Whether the diagnostics panel shows the working-directory listing.
    pub show_file_listing: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sliders: SliderState::default(),
            result: ResultState::Idle,
            status: StatusBarState::idle(),
            show_file_listing: false,
        }
    }
}

/// Per-interaction result sub-state within the ready screen.
#[derive(Clone, Debug, Default)]
pub enum ResultState {
    /// Inputs visible, nothing computed (or inputs changed since).
    #[default]
    Idle,
    /// Predict was requested; inference runs on the next frame so the busy
    /// indicator gets one frame on screen.
    Computing,
    /// A prediction is on screen.
    Displayed(PredictionView),
    /// The last attempt failed; inline message shown.
    Failed(String),
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::with_tone(
            "Adjust the measurements, then predict",
            "Idle",
            style::StatusTone::Idle,
        )
    }

    /// Shown right after a successful artifact load.
    pub fn loaded(source_dir: &Path) -> Self {
        Self::with_tone(
            format!("Artifacts loaded from {}", source_dir.display()),
            "Ready",
            style::StatusTone::Success,
        )
    }

    /// Shown while a queued prediction waits for its frame.
    pub fn busy() -> Self {
        Self::with_tone("Classifying…", "Busy", style::StatusTone::Busy)
    }

    /// Shown when a prediction lands.
    pub fn predicted(view: &PredictionView) -> Self {
        Self::with_tone(
            format!("Predicted {} at {}", view.label, view.confidence_percent),
            "Done",
            style::StatusTone::Success,
        )
    }

    /// Shown when artifacts failed to load or inference failed.
    pub fn error(text: impl Into<String>) -> Self {
        Self::with_tone(text, "Error", style::StatusTone::Error)
    }

    fn with_tone(text: impl Into<String>, badge_label: &str, tone: style::StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: badge_label.to_string(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
