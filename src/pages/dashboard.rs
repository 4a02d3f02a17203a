//! Dashboard page - the single screen of Pulseboard.
//!
//! Scroll position drives the collapsing header; everything else is derived
//! from the launch content and the resolved theme.

use std::time::Instant;

use dioxus::prelude::*;
use pulseboard_core::layout::{
    CONTENT_PADDING_BOTTOM, CONTENT_PADDING_HORIZONTAL, CONTENT_PADDING_TOP,
};
use pulseboard_core::{
    AnimatedValue, CardAction, DashboardContent, DashboardLayout, ScrollSample, ScrollSampler,
};
use pulseboard_ui::StatusBar;

use crate::components::{CollapsingHeader, FeatureList, ProfileBlock, StatsRow};
use crate::context::{use_card_action, use_settings, use_theme};

/// DOM id of the scroll container the listener attaches to
pub const SCROLL_CONTAINER_ID: &str = "dashboard-scroll";

/// Forwards `scrollTop` of the container on every scroll event.
fn scroll_listener_script(container_id: &str) -> String {
    format!(
        r#"
let el = document.getElementById("{container_id}");
while (!el) {{
    await new Promise((resolve) => requestAnimationFrame(resolve));
    el = document.getElementById("{container_id}");
}}
dioxus.send(el.scrollTop);
el.addEventListener("scroll", () => dioxus.send(el.scrollTop), {{ passive: true }});
await new Promise(() => {{}});
"#
    )
}

/// Forwards a press on the card at `index` to the injected action.
///
/// Returns `false` when no feature sits at that index.
pub fn dispatch_card_press(
    content: &DashboardContent,
    action: &dyn CardAction,
    index: usize,
) -> bool {
    match content.features.get(index) {
        Some(feature) => {
            action.card_pressed(feature);
            true
        }
        None => {
            tracing::warn!(index, "Press on unknown card ignored");
            false
        }
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let settings = use_settings();
    let theme = use_theme();
    let action = use_card_action();

    // Owned by this page instance for its whole life; never rebuilt
    let mut scroll = use_signal(AnimatedValue::default);
    let mut sampler = use_signal(ScrollSampler::default);

    use_future(move || async move {
        let mut eval = document::eval(&scroll_listener_script(SCROLL_CONTAINER_ID));
        while let Ok(offset) = eval.recv::<f64>().await {
            let sample = sampler.write().offer(offset, Instant::now());
            match sample {
                ScrollSample::Apply(offset) => scroll.write().set_value(offset),
                ScrollSample::Defer(wait) => {
                    // Delivers the last offset of a burst once the interval passes
                    spawn(async move {
                        tokio::time::sleep(wait).await;
                        let pending = sampler.write().flush(Instant::now());
                        if let Some(offset) = pending {
                            scroll.write().set_value(offset);
                        }
                    });
                }
                ScrollSample::Coalesced | ScrollSample::Ignored => {}
            }
        }
        tracing::debug!("Scroll listener closed");
    });

    let layout = DashboardLayout::build(&settings.content, theme(), scroll.read().value());
    let palette = layout.palette();

    let on_card_press = {
        let content = settings.content.clone();
        move |index: usize| {
            dispatch_card_press(&content, action.as_ref(), index);
        }
    };

    rsx! {
        div {
            class: "dashboard",
            style: "background-color: {palette.background};",

            StatusBar { theme: layout.theme }

            CollapsingHeader { header: layout.header.clone() }

            div {
                id: SCROLL_CONTAINER_ID,
                class: "dashboard__scroll",
                style: "background-color: {palette.background};",

                div {
                    class: "dashboard__content",
                    style: "padding: {CONTENT_PADDING_TOP}px {CONTENT_PADDING_HORIZONTAL}px {CONTENT_PADDING_BOTTOM}px;",

                    ProfileBlock { profile: layout.profile.clone(), theme: layout.theme }

                    h2 {
                        class: "section-heading",
                        style: "color: {palette.heading_text};",
                        "{layout.section_heading}"
                    }

                    FeatureList {
                        cards: layout.cards.clone(),
                        theme: layout.theme,
                        on_press: on_card_press,
                    }

                    StatsRow { stats: layout.stats.clone(), theme: layout.theme }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulseboard_core::RecordingAction;

    #[test]
    fn listener_targets_the_scroll_container() {
        let script = scroll_listener_script(SCROLL_CONTAINER_ID);
        assert!(script.contains(r#"getElementById("dashboard-scroll")"#));
        assert!(script.contains("dioxus.send(el.scrollTop)"));
    }

    #[test]
    fn card_press_reaches_the_action() {
        let content = DashboardContent::default();
        let action = RecordingAction::new();

        assert!(dispatch_card_press(&content, &action, 0));
        assert!(dispatch_card_press(&content, &action, 3));

        assert_eq!(
            action.pressed(),
            vec![content.features[0].title.clone(), content.features[3].title.clone()]
        );
    }

    #[test]
    fn press_on_missing_card_is_ignored() {
        let content = DashboardContent::default();
        let action = RecordingAction::new();

        assert!(!dispatch_card_press(&content, &action, 99));
        assert!(action.pressed().is_empty());
    }
}
