use crate::error::Result;
use crate::types::{ActivityRow, EntityRow};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Supplier of the two provenance tables, in their original row order.
pub trait RowSource {
    fn entity_rows(&self) -> Result<Vec<EntityRow>>;
    fn activity_rows(&self) -> Result<Vec<ActivityRow>>;
}

/// Row source backed by two JSON files, each a top-level array of row
/// objects keyed the way the provenance spreadsheet exports them
/// (`derivedFrom`, `inputEntities`, ...).
pub struct JsonRowSource {
    entities: PathBuf,
    activities: PathBuf,
}

impl JsonRowSource {
    pub fn new(entities: impl Into<PathBuf>, activities: impl Into<PathBuf>) -> Self {
        Self {
            entities: entities.into(),
            activities: activities.into(),
        }
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl RowSource for JsonRowSource {
    fn entity_rows(&self) -> Result<Vec<EntityRow>> {
        Self::read(&self.entities)
    }

    fn activity_rows(&self) -> Result<Vec<ActivityRow>> {
        Self::read(&self.activities)
    }
}
