//! Collapsing Header - app title block that shrinks and fades on scroll.

use dioxus::prelude::*;
use pulseboard_core::HeaderView;

/// Inline style for the header at its current metrics
pub fn header_style(header: &HeaderView) -> String {
    let metrics = &header.metrics;
    format!(
        "height: {:.2}px; opacity: {:.3}; background-color: {};",
        metrics.height, metrics.opacity, metrics.background
    )
}

/// Props for the collapsing header component.
#[derive(Props, Clone, PartialEq)]
pub struct CollapsingHeaderProps {
    /// Title, subtitle and scroll-derived metrics
    pub header: HeaderView,
}

/// Header pinned over the top of the scroll area.
#[component]
pub fn CollapsingHeader(props: CollapsingHeaderProps) -> Element {
    let style = header_style(&props.header);

    rsx! {
        header {
            class: "collapsing-header",
            style: "{style}",
            div { class: "collapsing-header__content",
                h1 { class: "collapsing-header__title", "{props.header.title}" }
                p { class: "collapsing-header__subtitle", "{props.header.subtitle}" }
            }
        }
    }
}
