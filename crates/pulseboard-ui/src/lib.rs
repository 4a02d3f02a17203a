//! Pulseboard UI Components
//!
//! Dioxus components for the Pulseboard dashboard. Every component takes
//! the resolved [`ThemeMode`](pulseboard_core::ThemeMode) as a prop and
//! reads its colors from the matching palette; none of them query the host
//! theme on their own.
//!
//! ## Components
//!
//! - [`Card`]: feature card that springs to 0.95 while held
//! - [`StatTile`]: one value/label tile of the statistics row
//! - [`StatusBar`]: themed strip standing in for the mobile status bar

pub mod components;

pub use components::*;
