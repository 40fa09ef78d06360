use tracing::info;

use crate::error::{Result, SeatingError};
use crate::venue::{Stadium, StadiumRecord};

/// All stadiums known to the process, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StadiumRegistry {
    stadiums: Vec<Stadium>,
}

impl StadiumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every stadium from feed records. Fails on the first invalid
    /// record or duplicated id.
    pub fn from_records(records: &[StadiumRecord]) -> Result<Self> {
        let mut registry = Self::new();
        for record in records {
            registry.add(Stadium::from_record(record)?)?;
        }
        Ok(registry)
    }

    pub fn add(&mut self, stadium: Stadium) -> Result<()> {
        if self.by_id(stadium.id()).is_some() {
            return Err(SeatingError::DuplicateStadium(stadium.id().to_string()));
        }
        info!("Registered stadium {} ({})", stadium.id(), stadium);
        self.stadiums.push(stadium);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Stadium> {
        let index = self.stadiums.iter().position(|s| s.id() == id)?;
        info!("Removed stadium {}", id);
        Some(self.stadiums.remove(index))
    }

    pub fn by_id(&self, id: &str) -> Option<&Stadium> {
        self.stadiums.iter().find(|s| s.id() == id)
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Stadium> {
        self.stadiums.iter_mut().find(|s| s.id() == id)
    }

    /// Same as [`StadiumRegistry::by_id`] but reports a missing stadium.
    pub fn get(&self, id: &str) -> Result<&Stadium> {
        self.by_id(id)
            .ok_or_else(|| SeatingError::StadiumNotFound(id.to_string()))
    }

    pub fn by_name(&self, name: &str) -> Option<&Stadium> {
        self.stadiums.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stadium> {
        self.stadiums.iter()
    }

    pub fn len(&self) -> usize {
        self.stadiums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stadiums.is_empty()
    }

    pub fn records(&self) -> Vec<StadiumRecord> {
        self.stadiums.iter().map(Stadium::record).collect()
    }
}
