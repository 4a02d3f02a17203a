//! Dashboard screen layout.
//!
//! [`DashboardLayout::build`] derives everything the page shows from three
//! inputs: content, theme and scroll offset. The renderer only turns this
//! value into elements, so the screen contract can be checked without a
//! host.

use crate::content::{DashboardContent, Profile};
use crate::interpolate::{HEADER_HEIGHT, HEADER_OPACITY};
use crate::theme::{Palette, StatusBarStyle, ThemeMode};

/// Scroll content padding above the first block, clears the expanded header
pub const CONTENT_PADDING_TOP: f64 = 220.0;
pub const CONTENT_PADDING_BOTTOM: f64 = 40.0;
pub const CONTENT_PADDING_HORIZONTAL: f64 = 20.0;
/// Stat tile width is the viewport width divided by this
pub const STAT_TILE_WIDTH_DIVISOR: f64 = 3.5;

/// Collapsing header metrics at one scroll offset
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderMetrics {
    pub height: f64,
    pub opacity: f64,
    pub background: &'static str,
}

impl HeaderMetrics {
    pub fn at(scroll_offset: f64, theme: ThemeMode) -> Self {
        Self {
            height: HEADER_HEIGHT.map(scroll_offset),
            opacity: HEADER_OPACITY.map(scroll_offset),
            background: theme.palette().header_background,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub metrics: HeaderMetrics,
}

/// One feature card; `key` is the feature's index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub key: usize,
    pub heading: String,
    pub body: String,
}

/// One stat tile; `key` is the stat's index, labels may repeat
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatView {
    pub key: usize,
    pub value: String,
    pub label: String,
}

/// The whole visible page, top to bottom
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardLayout {
    pub theme: ThemeMode,
    pub status_bar: StatusBarStyle,
    pub header: HeaderView,
    pub profile: Profile,
    pub section_heading: String,
    pub cards: Vec<CardView>,
    pub stats: Vec<StatView>,
}

impl DashboardLayout {
    pub fn build(content: &DashboardContent, theme: ThemeMode, scroll_offset: f64) -> Self {
        let cards = content
            .features
            .iter()
            .enumerate()
            .map(|(key, feature)| CardView {
                key,
                heading: feature.heading(),
                body: feature.content.clone(),
            })
            .collect();

        let stats = content
            .stats
            .iter()
            .enumerate()
            .map(|(key, stat)| StatView {
                key,
                value: stat.value.clone(),
                label: stat.label.clone(),
            })
            .collect();

        Self {
            theme,
            status_bar: theme.palette().status_bar,
            header: HeaderView {
                title: content.app_title.clone(),
                subtitle: content.app_subtitle.clone(),
                metrics: HeaderMetrics::at(scroll_offset, theme),
            },
            profile: content.profile.clone(),
            section_heading: content.section_heading.clone(),
            cards,
            stats,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Stat;

    #[test]
    fn cards_keyed_by_index() {
        let layout = DashboardLayout::build(&DashboardContent::default(), ThemeMode::Light, 0.0);
        let keys: Vec<usize> = layout.cards.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn stats_keyed_by_index_even_with_repeated_labels() {
        let content = DashboardContent {
            stats: vec![
                Stat::new("1", "Runs"),
                Stat::new("2", "Runs"),
                Stat::new("3", "Runs"),
            ],
            ..DashboardContent::default()
        };
        let layout = DashboardLayout::build(&content, ThemeMode::Light, 0.0);
        let keys: Vec<usize> = layout.stats.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(layout.stats[2].value, "3");
    }

    #[test]
    fn header_follows_scroll() {
        let content = DashboardContent::default();
        let top = DashboardLayout::build(&content, ThemeMode::Light, 0.0);
        let mid = DashboardLayout::build(&content, ThemeMode::Light, 50.0);
        assert_eq!(top.header.metrics.height, 200.0);
        assert!((mid.header.metrics.height - 140.0).abs() < 1e-9);
        assert_eq!(mid.header.metrics.opacity, 0.8);
    }

    #[test]
    fn header_text_comes_from_content() {
        let layout = DashboardLayout::build(&DashboardContent::default(), ThemeMode::Dark, 0.0);
        assert_eq!(layout.header.title, "Awesome App");
        assert_eq!(layout.section_heading, "Featured Today");
    }
}
