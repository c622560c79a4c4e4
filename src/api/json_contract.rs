use crate::error::SparkResult;

use super::SparkViewConfig;
use super::validation::validate_config;

impl SparkViewConfig {
    /// Parses and validates a JSON config. Missing optional fields take defaults.
    pub fn from_json_str(input: &str) -> SparkResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SparkResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
