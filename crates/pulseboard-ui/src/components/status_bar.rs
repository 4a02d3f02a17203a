//! Status Bar Component
//!
//! Transparent, translucent strip over the top of the page. Its glyph color
//! contrasts with the page background:
//! - light theme: dark content
//! - dark theme: light content

use dioxus::prelude::*;
use pulseboard_core::{StatusBarStyle, ThemeMode};

/// CSS modifier class for a status bar style
pub fn status_bar_class(style: StatusBarStyle) -> &'static str {
    match style {
        StatusBarStyle::DarkContent => "status-bar status-bar--dark-content",
        StatusBarStyle::LightContent => "status-bar status-bar--light-content",
    }
}

/// Properties for the StatusBar component
#[derive(Clone, PartialEq, Props)]
pub struct StatusBarProps {
    /// Resolved theme of the page
    pub theme: ThemeMode,
}

/// Themed status bar strip
#[component]
pub fn StatusBar(props: StatusBarProps) -> Element {
    let style = props.theme.palette().status_bar;
    let class = status_bar_class(style);
    let bar_style = style.as_str();

    rsx! {
        div {
            class: "{class}",
            "data-bar-style": "{bar_style}",
            "aria-hidden": "true",
        }
    }
}
