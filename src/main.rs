#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use pulseboard_core::{DashboardContent, LogAction, ThemePreference};
use tracing_subscriber::EnvFilter;

use crate::context::AppSettings;

/// Pulseboard - single-screen dashboard
#[derive(Parser, Debug)]
#[command(name = "pulseboard-desktop")]
#[command(about = "Pulseboard - collapsing-header dashboard with feature cards and stats")]
struct Args {
    /// Theme: system, light or dark
    #[arg(short, long, default_value = "system")]
    theme: ThemePreference,

    /// JSON file with the dashboard content (features, stats, profile)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn load_content(path: Option<&PathBuf>) -> anyhow::Result<DashboardContent> {
    match path {
        Some(path) => DashboardContent::load(path)
            .with_context(|| format!("Failed to load dashboard content from {}", path.display())),
        None => Ok(DashboardContent::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let content = load_content(args.content.as_ref())?;

    tracing::info!(
        "Starting '{}' with {} feature cards, theme {:?}",
        content.app_title,
        content.features.len(),
        args.theme
    );

    let title = content.app_title.clone();
    let settings = AppSettings::new(content, args.theme, Arc::new(LogAction));

    // Configure desktop window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        )
        .with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.to_string(),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(settings)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["pulseboard-desktop"]).unwrap();
        assert_eq!(args.theme, ThemePreference::System);
        assert!(args.content.is_none());
        assert_eq!(args.width, 420.0);
        assert_eq!(args.height, 860.0);
    }

    #[test]
    fn explicit_theme_and_content() {
        let args = Args::try_parse_from([
            "pulseboard-desktop",
            "--theme",
            "dark",
            "--content",
            "content.json",
        ])
        .unwrap();
        assert_eq!(args.theme, ThemePreference::Dark);
        assert_eq!(args.content, Some(PathBuf::from("content.json")));
    }

    #[test]
    fn unknown_theme_rejected() {
        assert!(Args::try_parse_from(["pulseboard-desktop", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn content_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "app_title": "Pulse" }}"#).unwrap();
        let content = load_content(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(content.app_title, "Pulse");
    }

    #[test]
    fn bad_content_file_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "stats": [] }}"#).unwrap();
        let path = file.path().to_path_buf();
        let err = load_content(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains(&path.display().to_string()));
    }
}
