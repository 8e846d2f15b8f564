//! Simulator configuration.

use crate::error::{DeviceError, DeviceResult};
use crate::state::DeviceSnapshot;
use eyewear_events::DEFAULT_INDICATOR_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for constructing a `SimulatedDevice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulatorConfig {
    /// Values the device starts with and returns to on `reset_state`.
    pub initial_state: DeviceSnapshot,
    /// How long the UI should show the touchpad indicator.
    pub indicator_duration_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_state: DeviceSnapshot::default(),
            indicator_duration_ms: DEFAULT_INDICATOR_DURATION_MS,
        }
    }
}

impl SimulatorConfig {
    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> DeviceResult<Self> {
        serde_json::from_str(json).map_err(DeviceError::Config)
    }

    pub fn indicator_duration(&self) -> Duration {
        Duration::from_millis(self.indicator_duration_ms)
    }
}
