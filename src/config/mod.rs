use serde::Deserialize;
use std::env;

use crate::venue::StadiumRecord;

const ENV_PREFIX: &str = "SEATING";

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub venue: VenueConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Стадион, который сервис обслуживает. Вместимость приходит снаружи
// (фид данных), ядро только проверяет её.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    pub id: String,
    pub name: String,
    pub city: String,
    pub general_seats: i64,
    pub vip_seats: i64,
}

impl VenueConfig {
    pub fn record(&self) -> StadiumRecord {
        StadiumRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            city: self.city.clone(),
            capacity: [self.general_seats, self.vip_seats],
        }
    }
}

impl Config {
    /// Reads `SEATING_APP__PORT`, `SEATING_VENUE__GENERAL_SEATS` and friends
    /// from the environment. `RUST_LOG`, when set, wins over
    /// `SEATING_APP__RUST_LOG`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
            env::var("RUST_LOG").ok(),
        )
    }

    fn from_source<S>(source: S, rust_log: Option<String>) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8000)?
            .set_default("app.environment", "development")?
            .set_default("app.rust_log", "stadium_seating=debug,tower_http=debug")?
            .add_source(source)
            .set_override_option("app.rust_log", rust_log)?
            .build()?
            .try_deserialize()
    }
}
