//! Batch document: engine config plus entity inputs, stored as JSON.

use std::fs;
use std::path::Path;

use life_engine::{EngineConfig, EntityInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// On-disk batch description consumed by `life-cli batch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDocument {
    #[serde(default)]
    pub config: EngineConfig,

    #[serde(default)]
    pub entities: Vec<EntityInput>,
}

impl BatchDocument {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let document: BatchDocument = serde_json::from_str(&raw)
            .map_err(|e| CliError::json(path.display().to_string(), e))?;
        debug!(
            path = %path.display(),
            entities = document.entities.len(),
            "batch document loaded"
        );
        Ok(document)
    }

    pub fn to_json(&self) -> CliResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CliError::json("batch document", e))
    }

    pub fn save(&self, path: &Path) -> CliResult<()> {
        fs::write(path, self.to_json()?).map_err(|e| CliError::io(path, e))
    }
}
