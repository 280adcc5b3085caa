use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::PlotConfig;

pub const PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PlotConfig,
}

impl PlotConfig {
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize plot config: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotConfigJsonContractV1 {
            schema_version: PLOT_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plot config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(config) = serde_json::from_str::<PlotConfig>(input) {
            return Ok(config);
        }
        let payload: PlotConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plot config json payload: {e}"))
        })?;
        if payload.schema_version != PLOT_CONFIG_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported plot config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
