//! Profile Block - avatar with greeting and user name.

use dioxus::prelude::*;
use pulseboard_core::{Profile, ThemeMode};

/// Props for the profile block component.
#[derive(Props, Clone, PartialEq)]
pub struct ProfileBlockProps {
    pub profile: Profile,
    /// Resolved theme of the page
    pub theme: ThemeMode,
}

/// Profile row shown above the feature list.
///
/// A failed avatar load falls back to the webview's broken-image rendering.
#[component]
pub fn ProfileBlock(props: ProfileBlockProps) -> Element {
    let palette = props.theme.palette();
    let profile = &props.profile;

    rsx! {
        div { class: "profile-block",
            img {
                class: "profile-block__avatar",
                src: "{profile.avatar_url}",
                alt: "{profile.name}",
                style: "border-color: {palette.avatar_border};",
            }
            div {
                p {
                    class: "profile-block__greeting",
                    style: "color: {palette.heading_text};",
                    "{profile.greeting}"
                }
                p {
                    class: "profile-block__name",
                    style: "color: {palette.accent};",
                    "{profile.name}"
                }
            }
        }
    }
}
