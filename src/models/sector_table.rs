use crate::domain::{
    ModeTable, ModeView,
    RoadStatus::{self, Construction, Express, National},
    ScoreTriple, SectorIcon, SectorRecord,
};

const fn view(status: RoadStatus, s4: f64, s14: f64, s54: f64) -> ModeView {
    ModeView::new(status, ScoreTriple::new(s4, s14, s54))
}

/// Baseline sector table. Sole source of card data; the override only ever
/// produces modified copies.
pub const SECTORS: &[SectorRecord] = &[
    SectorRecord {
        id: "nasdaq",
        name_ko: "나스닥",
        name_en: "Nasdaq",
        icon: SectorIcon::Chart,
        by_mode: ModeTable {
            fast: view(Express, 78.0, 66.0, 58.0),
            normal: view(National, 64.0, 70.0, 62.0),
            stable: view(Express, 52.0, 68.0, 76.0),
        },
    },
    SectorRecord {
        id: "bitcoin",
        name_ko: "비트코인",
        name_en: "Bitcoin",
        icon: SectorIcon::Bitcoin,
        by_mode: ModeTable {
            fast: view(Express, 86.0, 61.0, 49.0),
            normal: view(National, 68.0, 64.0, 56.0),
            stable: view(Construction, 44.0, 57.0, 64.0),
        },
    },
    SectorRecord {
        id: "semiconductor",
        name_ko: "반도체",
        name_en: "Semiconductor",
        icon: SectorIcon::Chip,
        by_mode: ModeTable {
            fast: view(National, 62.0, 72.0, 67.0),
            normal: view(Express, 74.0, 76.0, 63.0),
            stable: view(Express, 58.0, 70.0, 78.0),
        },
    },
    SectorRecord {
        id: "ethereum",
        name_ko: "이더리움",
        name_en: "Ethereum",
        icon: SectorIcon::Sigma,
        by_mode: ModeTable {
            fast: view(National, 60.0, 58.0, 55.0),
            normal: view(National, 56.0, 63.0, 61.0),
            stable: view(Express, 48.0, 60.0, 73.0),
        },
    },
    SectorRecord {
        id: "ai",
        name_ko: "AI/클라우드",
        name_en: "AI/Cloud",
        icon: SectorIcon::Flame,
        by_mode: ModeTable {
            fast: view(Express, 82.0, 69.0, 59.0),
            normal: view(National, 67.0, 71.0, 65.0),
            stable: view(National, 54.0, 66.0, 74.0),
        },
    },
    SectorRecord {
        id: "energy",
        name_ko: "에너지",
        name_en: "Energy",
        icon: SectorIcon::Droplets,
        by_mode: ModeTable {
            fast: view(Construction, 41.0, 52.0, 61.0),
            normal: view(National, 53.0, 60.0, 67.0),
            stable: view(Express, 47.0, 58.0, 79.0),
        },
    },
    SectorRecord {
        id: "defense",
        name_ko: "방산",
        name_en: "Defense",
        icon: SectorIcon::Factory,
        by_mode: ModeTable {
            fast: view(National, 58.0, 66.0, 70.0),
            normal: view(Express, 69.0, 73.0, 71.0),
            stable: view(Express, 55.0, 68.0, 82.0),
        },
    },
    SectorRecord {
        id: "finance",
        name_ko: "금융",
        name_en: "Finance",
        icon: SectorIcon::Landmark,
        by_mode: ModeTable {
            fast: view(Construction, 38.0, 49.0, 63.0),
            normal: view(National, 51.0, 61.0, 68.0),
            stable: view(Express, 46.0, 59.0, 80.0),
        },
    },
    SectorRecord {
        id: "emerging",
        name_ko: "신흥국",
        name_en: "Emerging",
        icon: SectorIcon::Globe,
        by_mode: ModeTable {
            fast: view(National, 55.0, 57.0, 60.0),
            normal: view(National, 52.0, 62.0, 64.0),
            stable: view(Express, 45.0, 58.0, 77.0),
        },
    },
    SectorRecord {
        id: "green",
        name_ko: "친환경",
        name_en: "Green",
        icon: SectorIcon::Sprout,
        by_mode: ModeTable {
            fast: view(Construction, 36.0, 50.0, 66.0),
            normal: view(National, 49.0, 59.0, 70.0),
            stable: view(National, 43.0, 56.0, 78.0),
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = SECTORS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTORS.len());
        assert_eq!(SECTORS.len(), 10);
    }

    #[test]
    fn designated_sector_is_present() {
        assert!(
            SECTORS
                .iter()
                .any(|s| s.id == crate::config::LABS_STORE.designated_sector)
        );
    }
}
