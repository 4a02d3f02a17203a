//! Page components for Pulseboard.

mod dashboard;

pub use dashboard::Dashboard;
