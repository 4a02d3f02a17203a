//! Pulseboard Core Library
//!
//! Host-independent model of the Pulseboard dashboard.
//!
//! ## Overview
//!
//! The dashboard is a single scrollable page: a collapsing header, a
//! profile block, a list of feature cards that spring when pressed, and a
//! row of statistic tiles. This crate holds everything about that page that
//! does not need a renderer:
//!
//! - [`interpolate`]: clamped range mapping for the header height/opacity
//! - [`animated`]: animated scalars and spring physics
//! - [`press`]: the card press state machine
//! - [`theme`]: light/dark palettes
//! - [`content`]: feature and stat records, loadable from JSON
//! - [`scroll`]: scroll event sampling
//! - [`layout`]: the full page derived from content, theme and scroll
//! - [`action`]: injectable card press handlers
//!
//! ## Quick Start
//!
//! ```
//! use pulseboard_core::{DashboardContent, DashboardLayout, ThemeMode};
//!
//! let content = DashboardContent::default();
//! let layout = DashboardLayout::build(&content, ThemeMode::Dark, 50.0);
//! assert_eq!(layout.cards.len(), 4);
//! assert!((layout.header.metrics.height - 140.0).abs() < 1e-9);
//! ```

pub mod action;
pub mod animated;
pub mod content;
pub mod error;
pub mod interpolate;
pub mod layout;
pub mod press;
pub mod scroll;
pub mod theme;

pub use action::{CardAction, LogAction, RecordingAction, SharedCardAction};
pub use animated::{AnimatedValue, ListenerId, SpringAnimation, SpringConfig, SpringState};
pub use content::{DashboardContent, Feature, Profile, Stat, STAT_TILE_COUNT};
pub use error::{DashboardError, DashboardResult};
pub use interpolate::{Extrapolate, Interpolation, HEADER_HEIGHT, HEADER_OPACITY};
pub use layout::{CardView, DashboardLayout, HeaderMetrics, HeaderView, StatView};
pub use press::{PressPhase, PressScale, PRESSED_OPACITY, PRESSED_SCALE, REST_SCALE};
pub use scroll::{ScrollSample, ScrollSampler, SCROLL_EVENT_THROTTLE};
pub use theme::{Palette, StatusBarStyle, ThemeMode, ThemePreference};
