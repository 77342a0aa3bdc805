use {
    crate::domain::{Mode, RoadStatus, ScoreTriple},
    std::fmt,
};

/// Icon reference for a sector card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorIcon {
    Chart,
    Bitcoin,
    Chip,
    Sigma,
    Flame,
    Droplets,
    Factory,
    Landmark,
    Globe,
    Sprout,
}

impl SectorIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Chart => "📈",
            Self::Bitcoin => "₿",
            Self::Chip => "🔲",
            Self::Sigma => "Σ",
            Self::Flame => "🔥",
            Self::Droplets => "💧",
            Self::Factory => "🏭",
            Self::Landmark => "🏛",
            Self::Globe => "🌐",
            Self::Sprout => "🌱",
        }
    }
}

/// The (status, scores) pair a sector shows in one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeView {
    pub status: RoadStatus,
    pub scores: ScoreTriple,
}

impl ModeView {
    pub const fn new(status: RoadStatus, scores: ScoreTriple) -> Self {
        Self { status, scores }
    }
}

/// One `ModeView` per mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeTable {
    pub fast: ModeView,
    pub normal: ModeView,
    pub stable: ModeView,
}

impl ModeTable {
    pub const fn uniform(view: ModeView) -> Self {
        Self {
            fast: view,
            normal: view,
            stable: view,
        }
    }

    pub fn get(&self, mode: Mode) -> &ModeView {
        match mode {
            Mode::Fast => &self.fast,
            Mode::Normal => &self.normal,
            Mode::Stable => &self.stable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorRecord {
    pub id: &'static str,
    pub name_ko: &'static str,
    pub name_en: &'static str,
    pub icon: SectorIcon,
    pub by_mode: ModeTable,
}

impl SectorRecord {
    pub fn view(&self, mode: Mode) -> &ModeView {
        self.by_mode.get(mode)
    }

    /// Copy of this record with every mode replaced by `view`.
    pub fn with_uniform_view(&self, view: ModeView) -> Self {
        Self {
            by_mode: ModeTable::uniform(view),
            ..*self
        }
    }
}

impl fmt::Display for SectorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.name_en)
    }
}
