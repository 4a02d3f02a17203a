//! Card press handlers.
//!
//! The dashboard does not act on card presses itself; it hands the pressed
//! feature to an injected [`CardAction`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::content::Feature;

/// Receives card presses from the dashboard
pub trait CardAction: Send + Sync {
    fn card_pressed(&self, feature: &Feature);
}

/// Logs each press at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAction;

impl CardAction for LogAction {
    fn card_pressed(&self, feature: &Feature) {
        tracing::info!("{} card pressed!", feature.title);
    }
}

/// Records pressed titles in order
#[derive(Clone, Debug, Default)]
pub struct RecordingAction {
    pressed: Arc<Mutex<Vec<String>>>,
}

impl RecordingAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressed(&self) -> Vec<String> {
        self.pressed.lock().clone()
    }
}

impl CardAction for RecordingAction {
    fn card_pressed(&self, feature: &Feature) {
        self.pressed.lock().push(feature.title.clone());
    }
}

/// Shared handle passed through the component tree
pub type SharedCardAction = Arc<dyn CardAction>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order() {
        let action = RecordingAction::new();
        action.card_pressed(&Feature::new("B", "b", "*"));
        action.card_pressed(&Feature::new("A", "a", "*"));
        assert_eq!(action.pressed(), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn clones_share_the_record() {
        let action = RecordingAction::new();
        let shared: SharedCardAction = Arc::new(action.clone());
        shared.card_pressed(&Feature::new("Seamless Integration", "", "🔗"));
        assert_eq!(action.pressed(), vec!["Seamless Integration".to_string()]);
    }
}
