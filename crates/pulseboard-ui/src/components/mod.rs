//! Reusable dashboard components
//!
//! Colors come from the palette of the theme passed in; sizes and spacing
//! live in the app's global stylesheet.

mod card;
mod stat_tile;
mod status_bar;

pub use card::*;
pub use stat_tile::*;
pub use status_bar::*;
