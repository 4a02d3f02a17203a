//! Feature Card Component
//!
//! Elevated, themed container with a title and body. Springs to 0.95 on
//! press-start and back to 1.0 on press-end, then calls `on_press`.

use std::time::Duration;

use dioxus::prelude::*;
use pulseboard_core::{Palette, PressScale, ThemeMode};

/// Spring frame interval (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Properties for the Card component
#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    /// Header text, e.g. "🌟 Discover Amazing Features"
    pub title: String,
    /// Resolved theme of the page
    pub theme: ThemeMode,
    /// Called once per press-end
    #[props(default)]
    pub on_press: Option<EventHandler<()>>,
    /// Body content
    pub children: Element,
}

/// Inline style of the card container at a given scale
pub fn card_style(palette: &Palette, scale: f64) -> String {
    format!(
        "background-color: {}; box-shadow: 0 2px 4px color-mix(in srgb, {} 10%, transparent); transform: scale({:.4});",
        palette.card_background, palette.card_shadow, scale
    )
}

/// Advances the press spring by the measured frame time.
///
/// Returns `false` once the spring has settled or a newer press has taken
/// over the animation, which ends that frame loop.
pub fn step_frame(state: &mut PressScale, generation: u64, elapsed: Duration) -> bool {
    state.generation() == generation && state.tick(elapsed)
}

/// Feature card with spring press feedback
///
/// The press state is created once per card instance with `use_signal` and
/// mutated in place, so re-renders never reset a running spring.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         title: feature.heading(),
///         theme: theme(),
///         on_press: move |_| tracing::info!("pressed"),
///         "{feature.content}"
///     }
/// }
/// ```
#[component]
pub fn Card(props: CardProps) -> Element {
    let mut press = use_signal(PressScale::new);
    let palette = props.theme.palette();
    let on_press = props.on_press;

    let (scale, content_opacity) = {
        let state = press.read();
        (state.scale(), state.phase().content_opacity())
    };
    let container_style = card_style(palette, scale);

    // Steps the spring by real elapsed time until it settles or a newer
    // press retargets it. Late frames advance further instead of slowing
    // the animation down.
    let drive = move |generation: u64| {
        spawn(async move {
            let mut last = tokio::time::Instant::now();
            loop {
                tokio::time::sleep(FRAME_INTERVAL).await;
                let now = tokio::time::Instant::now();
                let elapsed = now.duration_since(last);
                last = now;
                if !step_frame(&mut press.write(), generation, elapsed) {
                    break;
                }
            }
        });
    };

    let press_start = move |_: PointerEvent| {
        let started = press.write().press_in();
        if let Some(generation) = started {
            tracing::debug!(generation, "Card pressed in");
            drive(generation);
        }
    };

    let press_end = move |_: PointerEvent| {
        let released = press.write().press_out();
        if let Some(generation) = released {
            tracing::debug!(generation, "Card released");
            drive(generation);
            if let Some(handler) = on_press {
                handler.call(());
            }
        }
    };

    rsx! {
        div {
            class: "feature-card",
            style: "{container_style}",
            div {
                class: "feature-card__touchable",
                role: "button",
                style: "opacity: {content_opacity};",
                onpointerdown: press_start,
                onpointerup: press_end,
                onpointerleave: press_end,
                onpointercancel: press_end,
                h3 {
                    class: "feature-card__title",
                    style: "color: {palette.card_title};",
                    "{props.title}"
                }
                div {
                    class: "feature-card__body",
                    style: "color: {palette.card_body};",
                    {props.children}
                }
            }
        }
    }
}
