//! Light and dark palettes.
//!
//! The composition root resolves a [`ThemeMode`] once and passes it down;
//! components read colors from [`ThemeMode::palette`] instead of querying
//! the host themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Resolved display mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Requested display mode; `System` follows the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

/// Status bar content color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    /// Dark glyphs, for light backgrounds
    DarkContent,
    /// Light glyphs, for dark backgrounds
    LightContent,
}

impl StatusBarStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusBarStyle::DarkContent => "dark-content",
            StatusBarStyle::LightContent => "light-content",
        }
    }
}

/// Every color the dashboard uses for one mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub header_background: &'static str,
    pub card_background: &'static str,
    pub card_shadow: &'static str,
    pub card_title: &'static str,
    pub card_body: &'static str,
    /// Welcome text and section heading
    pub heading_text: &'static str,
    /// User name and stat values
    pub accent: &'static str,
    pub avatar_border: &'static str,
    pub stat_background: &'static str,
    pub stat_label: &'static str,
    pub status_bar: StatusBarStyle,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#F5F5F5",
    header_background: "#6C5CE7",
    card_background: "#FFFFFF",
    card_shadow: "#888",
    card_title: "#333333",
    card_body: "#666666",
    heading_text: "#333",
    accent: "#4A00E0",
    avatar_border: "#6C5CE7",
    stat_background: "#FFF",
    stat_label: "#666",
    status_bar: StatusBarStyle::DarkContent,
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#121212",
    header_background: "#4A00E0",
    card_background: "#2A2A2A",
    card_shadow: "#000",
    card_title: "#F5F5F5",
    card_body: "#CCCCCC",
    heading_text: "#FFF",
    accent: "#6C5CE7",
    avatar_border: "#6C5CE7",
    stat_background: "#2A2A2A",
    stat_label: "#CCC",
    status_bar: StatusBarStyle::LightContent,
};

impl ThemeMode {
    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl ThemePreference {
    /// Pick the concrete mode, using `system` for [`ThemePreference::System`]
    pub fn resolve(&self, system: ThemeMode) -> ThemeMode {
        match self {
            ThemePreference::System => system,
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        }
    }

    pub fn follows_system(&self) -> bool {
        matches!(self, ThemePreference::System)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode '{}'", other)),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemePreference::System),
            other => other.parse::<ThemeMode>().map(|mode| match mode {
                ThemeMode::Light => ThemePreference::Light,
                ThemeMode::Dark => ThemePreference::Dark,
            }),
        }
    }
}
