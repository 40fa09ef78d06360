pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod venue;

pub use error::{Result, SeatingError};
pub use models::{Location, MatchId, Seat, SeatAddress, SeatClass, Section, SectionLetter};
pub use venue::Stadium;

use std::collections::HashMap;
use std::sync::Arc;

use services::{SaleLedger, StadiumRegistry};

// Shared state для всего приложения.
// Пока сервис работает, продажи живут только в `ledgers`; деревья в
// `registry` хранят состояние на момент запуска. Актуальная копия - `snapshot`.
pub struct AppState {
    pub registry: StadiumRegistry,
    pub ledgers: HashMap<String, SaleLedger>,
    pub config: config::Config,
}

impl AppState {
    /// Builds the configured stadium and its sale ledger.
    pub fn new(config: config::Config) -> Result<Arc<Self>> {
        let registry = StadiumRegistry::from_records(&[config.venue.record()])?;
        Ok(Self::with_registry(registry, config))
    }

    pub fn with_registry(registry: StadiumRegistry, config: config::Config) -> Arc<Self> {
        let ledgers = registry
            .iter()
            .map(|stadium| (stadium.id().to_string(), SaleLedger::from_stadium(stadium)))
            .collect();
        Arc::new(Self {
            registry,
            ledgers,
            config,
        })
    }

    pub fn stadium(&self, id: &str) -> Result<(&Stadium, &SaleLedger)> {
        let stadium = self.registry.get(id)?;
        let ledger = self
            .ledgers
            .get(id)
            .ok_or_else(|| SeatingError::StadiumNotFound(id.to_string()))?;
        Ok((stadium, ledger))
    }

    /// Copy of the stadium with the ledger's current sales written into it.
    pub fn snapshot(&self, id: &str) -> Result<Stadium> {
        let (stadium, ledger) = self.stadium(id)?;
        let mut snapshot = stadium.clone();
        ledger.write_back(&mut snapshot)?;
        Ok(snapshot)
    }
}
