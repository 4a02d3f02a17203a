//! Stats Row - the three statistics tiles.

use dioxus::prelude::*;
use pulseboard_core::{StatView, ThemeMode};
use pulseboard_ui::StatTile;

/// Props for the stats row component.
#[derive(Props, Clone, PartialEq)]
pub struct StatsRowProps {
    pub stats: Vec<StatView>,
    /// Resolved theme of the page
    pub theme: ThemeMode,
}

/// Row of stat tiles spread across the content width.
#[component]
pub fn StatsRow(props: StatsRowProps) -> Element {
    rsx! {
        div { class: "stats-row",
            for stat in props.stats.iter() {
                StatTile {
                    key: "{stat.key}",
                    value: stat.value.clone(),
                    label: stat.label.clone(),
                    theme: props.theme,
                }
            }
        }
    }
}
