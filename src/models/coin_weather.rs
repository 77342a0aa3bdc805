/// Illustrative "weather" for a coin. Decorative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Sunny,
    PartlyCloudy,
    Rainy,
    Stormy,
}

impl Weather {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Rainy => "🌧",
            Self::Stormy => "⛈",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            Self::Sunny => "맑음",
            Self::PartlyCloudy => "구름 조금",
            Self::Rainy => "비",
            Self::Stormy => "폭풍",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
        }
    }
}

pub struct CoinWeather {
    pub symbol: &'static str,
    pub weather: Weather,
    /// Recent period-over-period price moves in percent, oldest first.
    pub recent_moves_pct: &'static [f64],
}

pub const COIN_WEATHER: &[CoinWeather] = &[
    CoinWeather {
        symbol: "BTC",
        weather: Weather::Sunny,
        recent_moves_pct: &[1.2, 0.8, -0.4, 2.1, 1.5, -0.2, 0.9],
    },
    CoinWeather {
        symbol: "ETH",
        weather: Weather::PartlyCloudy,
        recent_moves_pct: &[0.6, -1.1, 0.4, 1.3, -0.7, 0.2, 0.5],
    },
    CoinWeather {
        symbol: "XRP",
        weather: Weather::Rainy,
        recent_moves_pct: &[-0.9, -1.6, 0.3, -2.2, 0.8, -1.0, -0.4],
    },
    CoinWeather {
        symbol: "SOL",
        weather: Weather::Stormy,
        recent_moves_pct: &[3.4, -4.1, 2.7, -3.3, 4.6, -2.8, 1.9],
    },
];
