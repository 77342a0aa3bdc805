// Domain types and value objects
mod mode;
mod road_status;
mod scores;
mod sector;

pub use mode::Mode;
pub use road_status::{RoadStatus, Tone};
pub use scores::{ScoreTriple, bar_fraction, format_score, score_to_pct};
pub use sector::{ModeTable, ModeView, SectorIcon, SectorRecord};
