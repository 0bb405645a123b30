use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

/// Callback receiving human-readable progress lines.
pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Settings for controlling daily sales aggregation.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Drop aggregated days whose total is exactly zero.
    pub drop_zero_amounts: bool,

    /// Optional callback for progress lines, on top of `log` records.
    #[serde(skip)]
    pub log_callback: Option<LogCallback>,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            drop_zero_amounts: false,
            log_callback: None,
        }
    }
}

impl fmt::Debug for AggregationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregationSettings")
            .field("drop_zero_amounts", &self.drop_zero_amounts)
            .field("log_callback", &self.log_callback.is_some())
            .finish()
    }
}

impl AggregationSettings {
    /// Creates a new instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Sets whether zero totals are dropped from the output.
    pub fn with_drop_zero_amounts(mut self, drop: bool) -> Self {
        self.drop_zero_amounts = drop;
        self
    }

    /// Sets the progress callback.
    pub fn with_log_callback(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log_callback = Some(Arc::new(callback));
        self
    }

    pub(crate) fn log(&self, message: &str) {
        if let Some(callback) = &self.log_callback {
            callback(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_input_untouched() {
        let settings = AggregationSettings::default();
        assert!(!settings.drop_zero_amounts);
        assert!(settings.log_callback.is_none());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let settings = AggregationSettings::from_json(r#"{"drop_zero_amounts": true}"#).unwrap();
        assert!(settings.drop_zero_amounts);
    }

    #[test]
    fn from_json_ignores_unknown_keys() {
        let settings = AggregationSettings::from_json(r#"{"verify_sorted_days": true}"#).unwrap();
        assert!(!settings.drop_zero_amounts);
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(AggregationSettings::from_json("{ not json").is_err());
    }
}
