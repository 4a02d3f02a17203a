use dioxus::desktop::tao::window::Theme;
use dioxus::prelude::*;
use pulseboard_core::ThemeMode;

use crate::context::use_settings;
use crate::pages::Dashboard;
use crate::theme::GLOBAL_STYLES;

/// Reports the host color scheme now and on every change.
const SYSTEM_THEME_SCRIPT: &str = r#"
const query = window.matchMedia("(prefers-color-scheme: dark)");
dioxus.send(query.matches);
query.addEventListener("change", (event) => dioxus.send(event.matches));
await new Promise(() => {});
"#;

/// Maps the window system theme onto a page theme.
fn theme_from_host(theme: Theme) -> ThemeMode {
    match theme {
        Theme::Dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Root application component.
///
/// Resolves the theme once for the whole tree and provides it as context.
#[component]
pub fn App() -> Element {
    let settings = use_settings();
    let preference = settings.theme;

    // Read the host scheme from the window before the first paint so a dark
    // desktop never shows a light frame; the script below tracks changes.
    let mut theme: Signal<ThemeMode> = use_signal(|| {
        let host = if preference.follows_system() {
            theme_from_host(dioxus::desktop::window().window.theme())
        } else {
            ThemeMode::Light
        };
        preference.resolve(host)
    });
    use_context_provider(|| theme);

    // Follow the host color scheme when asked to
    use_future(move || async move {
        if !preference.follows_system() {
            return;
        }
        let mut eval = document::eval(SYSTEM_THEME_SCRIPT);
        loop {
            match eval.recv::<bool>().await {
                Ok(dark) => {
                    let mode = ThemeMode::from_dark_flag(dark);
                    if *theme.peek() != mode {
                        tracing::debug!("Host theme changed to {}", mode);
                        theme.set(mode);
                    }
                }
                Err(e) => {
                    tracing::warn!("Host theme detection stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Dashboard {}
    }
}
