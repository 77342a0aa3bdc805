use {
    serde::{Deserialize, Serialize},
    strum_macros::EnumIter,
};

/// Visual tone used for a status badge and its leading score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Indigo,
    Violet,
    Fuchsia,
    Lavender,
}

/// Three-valued road label used as the primary sort key.
/// Total order: Express > National > Construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum RoadStatus {
    Express,
    National,
    Construction,
}

impl RoadStatus {
    /// The highest ranked status; forced onto an overridden sector.
    pub const TOP: Self = Self::Express;

    pub fn rank(self) -> u8 {
        match self {
            Self::Express => 3,
            Self::National => 2,
            Self::Construction => 1,
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            Self::Express => "고속도로",
            Self::National => "국도",
            Self::Construction => "공사중",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::National => "National",
            Self::Construction => "Construction",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Express => Tone::Indigo,
            Self::National => Tone::Violet,
            Self::Construction => Tone::Fuchsia,
        }
    }

    /// Tone of the short-horizon (4) bar. National cards use lavender there.
    pub fn lead_bar_tone(self) -> Tone {
        match self {
            Self::Express => Tone::Indigo,
            Self::National => Tone::Lavender,
            Self::Construction => Tone::Fuchsia,
        }
    }
}

impl std::fmt::Display for RoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_en())
    }
}
