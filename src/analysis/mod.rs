// Ranking of the sector board
pub mod ranking;

pub use ranking::{apply_override, apply_override_to, compare_for_mode, momentum, rank};
