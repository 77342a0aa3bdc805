mod coin_weather;
mod sector_table;

pub use coin_weather::{COIN_WEATHER, CoinWeather, Weather};
pub use sector_table::SECTORS;
