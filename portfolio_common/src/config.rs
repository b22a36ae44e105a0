use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::live::LoadJitter;

/// Runtime knobs, embedded in the app as JSON.
///
/// ```rust,ignore
/// let config = DashboardConfig::from_json(r#"{ "live_tick_ms": 1000 }"#)?;
/// assert_eq!(config.load_tick_ms, 2000);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    pub live_tick_ms: u64,
    pub load_tick_ms: u64,
    /// Random fill bars and the grid-load walk.
    pub demo_jitter: bool,
    pub load_min: f64,
    pub load_max: f64,
    pub initial_load: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            live_tick_ms: 3000,
            load_tick_ms: 2000,
            demo_jitter: true,
            load_min: 60.0,
            load_max: 95.0,
            initial_load: 78.0,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.level().is_none() {
            return Err(DashboardError::InvalidConfig(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        if self.live_tick_ms == 0 || self.load_tick_ms == 0 {
            return Err(DashboardError::InvalidConfig(
                "tick periods must be greater than 0".to_string(),
            ));
        }
        if !(self.load_min < self.load_max) {
            return Err(DashboardError::InvalidConfig(format!(
                "load_min {} must be below load_max {}",
                self.load_min, self.load_max
            )));
        }
        if !(self.load_min..=self.load_max).contains(&self.initial_load) {
            return Err(DashboardError::InvalidConfig(format!(
                "initial_load {} is outside [{}, {}]",
                self.initial_load, self.load_min, self.load_max
            )));
        }
        Ok(())
    }

    pub fn level(&self) -> Option<log::Level> {
        self.log_level.parse().ok()
    }

    pub fn live_tick(&self) -> Duration {
        Duration::from_millis(self.live_tick_ms)
    }

    pub fn load_tick(&self) -> Duration {
        Duration::from_millis(self.load_tick_ms)
    }

    /// Grid load walk seeded from this config. Fields are public, so the
    /// whole config is validated first.
    pub fn load_jitter(&self) -> Result<LoadJitter, DashboardError> {
        self.validate()?;
        LoadJitter::new(self.initial_load, self.load_min, self.load_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.live_tick(), Duration::from_secs(3));
        assert_eq!(config.load_tick(), Duration::from_secs(2));
        assert_eq!(config.level(), Some(log::Level::Info));
    }

    #[test]
    fn test_partial_json() {
        let config = DashboardConfig::from_json(r#"{ "log_level": "debug", "demo_jitter": false }"#)
            .unwrap();
        assert_eq!(config.level(), Some(log::Level::Debug));
        assert!(!config.demo_jitter);
        assert_eq!(config.live_tick_ms, 3000);
        assert_eq!(config.initial_load, 78.0);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = DashboardConfig::from_json(r#"{ "load_min": 95, "load_max": 60 }"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_initial_load_out_of_bounds() {
        assert!(DashboardConfig::from_json(r#"{ "initial_load": 99.5 }"#).is_err());
    }

    #[test]
    fn test_rejects_zero_period() {
        assert!(DashboardConfig::from_json(r#"{ "live_tick_ms": 0 }"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(DashboardConfig::from_json(r#"{ "log_level": "chatty" }"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(DashboardConfig::from_json("{ live_tick_ms: 1 }").is_err());
    }
}
