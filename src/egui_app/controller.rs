//! Bridges UI interactions to the artifact store and inference adapter.

use crate::artifacts::{ArtifactStore, LoadOutcome};
use crate::egui_app::state::{ResultState, StatusBarState, UiState};
use crate::egui_app::view_model;
use crate::inference;

/// Owns the UI state plus the injected artifact store.
pub struct AppController {
    store: ArtifactStore,
    pub ui: UiState,
}

impl AppController {
    /// Drive the one-shot artifact load and derive the initial UI state.
    pub fn new(store: ArtifactStore) -> Self {
        let status = match store.get_or_load() {
            LoadOutcome::Ready(loaded) => StatusBarState::loaded(&loaded.source_dir),
            LoadOutcome::Unready(_) => StatusBarState::error("Artifacts failed to load"),
        };
        let ui = UiState {
            status,
            ..UiState::default()
        };
        Self { store, ui }
    }

    /// Whether the artifact pair loaded and the inference UI should render.
    pub fn is_ready(&self) -> bool {
        matches!(self.store.get_or_load(), LoadOutcome::Ready(_))
    }

    /// Instructional unready report for the error screen.
    pub fn unready_message(&self) -> Option<String> {
        match self.store.get_or_load() {
            LoadOutcome::Unready(report) => Some(report.message()),
            LoadOutcome::Ready(_) => None,
        }
    }

    /// Queue a prediction from the current slider state. The computation
    /// itself happens on the next [`step`](Self::step) call.
    pub fn request_predict(&mut self) {
        if !self.is_ready() {
            return;
        }
        self.ui.result = ResultState::Computing;
        self.ui.status = StatusBarState::busy();
    }

    /// Run a queued prediction, if any. Called once per frame before
    /// rendering.
    pub fn step(&mut self) {
        if !matches!(self.ui.result, ResultState::Computing) {
            return;
        }
        let LoadOutcome::Ready(loaded) = self.store.get_or_load() else {
            self.ui.result = ResultState::Idle;
            return;
        };
        let features = self.ui.sliders.vector();
        match inference::run(&features, &loaded.scaler, &loaded.classifier) {
            Ok(prediction) => {
                let view = view_model::prediction_view(&prediction);
                self.ui.status = StatusBarState::predicted(&view);
                self.ui.result = ResultState::Displayed(view);
            }
            Err(err) => {
                tracing::warn!("Inference failed: {err}");
                self.ui.status = StatusBarState::error("Prediction failed");
                self.ui.result = ResultState::Failed(format!("Prediction failed: {err}"));
            }
        }
    }

    /// Drop any shown result when a slider moves; a queued computation is
    /// left to finish.
    pub fn inputs_changed(&mut self) {
        match self.ui.result {
            ResultState::Idle | ResultState::Computing => {}
            ResultState::Displayed(_) | ResultState::Failed(_) => {
                self.ui.result = ResultState::Idle;
                self.ui.status = StatusBarState::idle();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{MODEL_FILE, SCALER_FILE};
    use crate::ml::{SoftmaxClassifier, StandardScaler};
    use crate::species::Species;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_bundled_artifacts(dir: &Path) {
        fs::write(
            dir.join(SCALER_FILE),
            serde_json::to_string(&StandardScaler::bundled()).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.join(MODEL_FILE),
            serde_json::to_string(&SoftmaxClassifier::bundled()).unwrap(),
        )
        .unwrap();
    }

    fn ready_controller(dir: &Path) -> AppController {
        let store = ArtifactStore::new();
        store.get_or_load_from(&[dir.to_path_buf()]);
        AppController::new(store)
    }

    fn unready_controller() -> AppController {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new();
        store.get_or_load_from(&[dir.path().to_path_buf()]);
        AppController::new(store)
    }

    #[test]
    fn ready_controller_reports_ready_and_no_unready_message() {
        let dir = tempdir().unwrap();
        write_bundled_artifacts(dir.path());
        let controller = ready_controller(dir.path());
        assert!(controller.is_ready());
        assert!(controller.unready_message().is_none());
        assert!(controller.ui.status.text.contains("Artifacts loaded"));
    }

    #[test]
    fn unready_controller_exposes_the_report_and_blocks_predictions() {
        let mut controller = unready_controller();
        assert!(!controller.is_ready());
        let message = controller.unready_message().unwrap();
        assert!(message.contains(SCALER_FILE));
        assert!(message.contains(MODEL_FILE));

        controller.request_predict();
        assert!(matches!(controller.ui.result, ResultState::Idle));
    }

    #[test]
    fn predict_queues_then_displays_on_step() {
        let dir = tempdir().unwrap();
        write_bundled_artifacts(dir.path());
        let mut controller = ready_controller(dir.path());

        controller.request_predict();
        assert!(matches!(controller.ui.result, ResultState::Computing));
        assert_eq!(controller.ui.status.badge_label, "Busy");

        controller.step();
        let ResultState::Displayed(view) = &controller.ui.result else {
            panic!("expected a displayed result");
        };
        assert_eq!(view.label, Species::Versicolor.label());
        assert_eq!(controller.ui.status.badge_label, "Done");
    }

    #[test]
    fn input_change_returns_a_displayed_result_to_idle() {
        let dir = tempdir().unwrap();
        write_bundled_artifacts(dir.path());
        let mut controller = ready_controller(dir.path());

        controller.request_predict();
        controller.step();
        assert!(matches!(controller.ui.result, ResultState::Displayed(_)));

        controller.ui.sliders.values[2] = 5.5;
        controller.inputs_changed();
        assert!(matches!(controller.ui.result, ResultState::Idle));
    }
}
