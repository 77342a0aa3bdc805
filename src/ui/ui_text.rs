use crate::app::Lang;

pub const ICON_SUN: &str = "☀";
pub const ICON_MOON: &str = "🌙";
pub const ICON_SORT_RULE: &str = "⋯";
pub const ICON_FAST: &str = "🔥";
pub const ICON_NORMAL: &str = "🛣";
pub const ICON_STABLE: &str = "🚧";

pub const HOME_URL: &str = "https://qspicoin.com";

/// Localised strings for one language.
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub current_status: &'static str,
    pub score_label: &'static str,
    pub score_range: &'static str,
    pub momentum: &'static str,
    pub sort_rule: &'static str,
    pub sort_rule_desc: &'static str,
    pub realtime: &'static str,
    pub loading_override: &'static str,
    pub override_failed: &'static str,
    pub weather_heading: &'static str,
    pub weather_moves: &'static str,
    pub home_link: &'static str,
    pub copyright: &'static str,
    pub label_theme_light: &'static str,
    pub label_theme_dark: &'static str,
}

pub static UI_TEXT_KO: UiText = UiText {
    title: "코인 마켓 실험실",
    subtitle: "오직 수익에만 집중하는 실험 공간으로 공식 수치와는 다른 독자적인 로직을 적용하며 실험 성과에 따라 예고 없이 종료될 수 있습니다.",
    current_status: "현재 상태",
    score_label: "4 / 14 / 54 점수",
    score_range: "0–100",
    momentum: "Momentum",
    sort_rule: "정렬 규칙",
    sort_rule_desc: "상태 우선(고속도로 > 국도 > 공사중), 다음으로 4·14·54 가중 합산 모멘텀 순으로 정렬됩니다.",
    realtime: "실시간",
    loading_override: "실시간 점수를 불러오는 중…",
    override_failed: "실시간 점수를 불러오지 못했습니다. 기본 데이터를 표시합니다.",
    weather_heading: "코인 날씨",
    weather_moves: "최근 가격 변동 (%)",
    home_link: "홈으로 이동",
    copyright: "Copyright © QSPI Coin. All rights reserved.",
    label_theme_light: "라이트",
    label_theme_dark: "다크",
};

pub static UI_TEXT_EN: UiText = UiText {
    title: "Coin Market Lab",
    subtitle: "An experimental space focused solely on profits. We apply our own logic different from official figures and may discontinue without notice depending on experimental results.",
    current_status: "Status",
    score_label: "4 / 14 / 54 scores",
    score_range: "0–100",
    momentum: "Momentum",
    sort_rule: "Sort rules",
    sort_rule_desc: "Status first (Express > National > Construction), then by weighted 4·14·54 momentum.",
    realtime: "Live",
    loading_override: "Loading live score…",
    override_failed: "Live score unavailable. Showing default data.",
    weather_heading: "Coin weather",
    weather_moves: "Recent price moves (%)",
    home_link: "Back to Home",
    copyright: "Copyright © QSPI Coin. All rights reserved.",
    label_theme_light: "Light",
    label_theme_dark: "Dark",
};

pub fn ui_text(lang: Lang) -> &'static UiText {
    match lang {
        Lang::Ko => &UI_TEXT_KO,
        Lang::En => &UI_TEXT_EN,
    }
}

/// Sector / status / weather names follow the active language.
pub trait Localized {
    fn localized(&self, lang: Lang) -> &'static str;
}

impl Localized for crate::domain::SectorRecord {
    fn localized(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ko => self.name_ko,
            Lang::En => self.name_en,
        }
    }
}

impl Localized for crate::domain::RoadStatus {
    fn localized(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ko => self.label_ko(),
            Lang::En => self.label_en(),
        }
    }
}

impl Localized for crate::models::Weather {
    fn localized(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ko => self.label_ko(),
            Lang::En => self.label_en(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoadStatus;

    #[test]
    fn language_switches_every_label() {
        assert_eq!(ui_text(Lang::Ko).title, "코인 마켓 실험실");
        assert_eq!(ui_text(Lang::En).title, "Coin Market Lab");
        assert_eq!(RoadStatus::Express.localized(Lang::Ko), "고속도로");
        assert_eq!(RoadStatus::Express.localized(Lang::En), "Express");
    }
}
