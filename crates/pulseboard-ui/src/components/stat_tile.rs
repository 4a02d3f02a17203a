//! Stat Tile - one value/label pair in the statistics row.

use dioxus::prelude::*;
use pulseboard_core::layout::STAT_TILE_WIDTH_DIVISOR;
use pulseboard_core::ThemeMode;

/// Props for the stat tile component.
#[derive(Props, Clone, PartialEq)]
pub struct StatTileProps {
    /// Headline value, e.g. "98%"
    pub value: String,
    /// Caption under the value, e.g. "Success"
    pub label: String,
    /// Resolved theme of the page
    pub theme: ThemeMode,
}

/// Statistics tile; width is a fixed fraction of the viewport.
#[component]
pub fn StatTile(props: StatTileProps) -> Element {
    let palette = props.theme.palette();

    rsx! {
        div {
            class: "stat-tile",
            style: "width: calc(100vw / {STAT_TILE_WIDTH_DIVISOR}); background-color: {palette.stat_background};",
            div {
                class: "stat-tile__value",
                style: "color: {palette.accent};",
                "{props.value}"
            }
            div {
                class: "stat-tile__label",
                style: "color: {palette.stat_label};",
                "{props.label}"
            }
        }
    }
}
