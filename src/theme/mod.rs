//! Global stylesheet for Pulseboard.
//!
//! Colors are not here: they come from the active palette and are set
//! inline by each component.

mod styles;

pub use styles::GLOBAL_STYLES;
