//! Feature List - one press-scaling card per feature.

use dioxus::prelude::*;
use pulseboard_core::{CardView, ThemeMode};
use pulseboard_ui::Card;

/// Props for the feature list component.
#[derive(Props, Clone, PartialEq)]
pub struct FeatureListProps {
    /// Cards in display order
    pub cards: Vec<CardView>,
    /// Resolved theme of the page
    pub theme: ThemeMode,
    /// Called with the card key (feature index) on press-end
    pub on_press: EventHandler<usize>,
}

/// Vertical list of feature cards, keyed by feature index.
#[component]
pub fn FeatureList(props: FeatureListProps) -> Element {
    let on_press = props.on_press;

    rsx! {
        div { class: "feature-list",
            for card in props.cards.iter() {
                {
                    let index = card.key;
                    rsx! {
                        Card {
                            key: "{index}",
                            title: card.heading.clone(),
                            theme: props.theme,
                            on_press: move |_| on_press.call(index),
                            "{card.body}"
                        }
                    }
                }
            }
        }
    }
}
