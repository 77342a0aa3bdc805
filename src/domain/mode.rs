use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Operating preset selecting which (status, scores) view of a sector is active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Mode {
    Fast,
    #[default]
    Normal,
    Stable,
}
