//! Dashboard building blocks.
//!
//! Screen-specific sections; the reusable pieces (cards, stat tiles,
//! status bar) live in `pulseboard-ui`.

mod collapsing_header;
mod feature_list;
mod profile_block;
mod stats_row;

pub use collapsing_header::CollapsingHeader;
pub use feature_list::FeatureList;
pub use profile_block::ProfileBlock;
pub use stats_row::StatsRow;
