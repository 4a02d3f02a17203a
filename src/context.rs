//! Application context for Pulseboard.
//!
//! Startup settings are handed to the launcher once and read by components
//! via `use_context`. The resolved theme is a signal provided by `App`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let theme = use_theme();
//! let action = use_card_action();
//! ```

use std::fmt;
use std::sync::Arc;

use dioxus::prelude::*;
use pulseboard_core::{DashboardContent, SharedCardAction, ThemeMode, ThemePreference};

/// Settings resolved from the command line before launch.
///
/// Cheap to clone: content and action are shared.
#[derive(Clone)]
pub struct AppSettings {
    pub content: Arc<DashboardContent>,
    pub theme: ThemePreference,
    pub action: SharedCardAction,
}

impl AppSettings {
    pub fn new(content: DashboardContent, theme: ThemePreference, action: SharedCardAction) -> Self {
        Self {
            content: Arc::new(content),
            theme,
            action,
        }
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("app_title", &self.content.app_title)
            .field("features", &self.content.features.len())
            .field("theme", &self.theme)
            .finish()
    }
}

/// Hook to access the launch settings.
pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>()
}

/// Hook to access the resolved theme.
///
/// Returns a reactive signal that updates when the host theme changes and
/// the preference is `system`.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Hook to access the injected card press handler.
pub fn use_card_action() -> SharedCardAction {
    use_settings().action
}
