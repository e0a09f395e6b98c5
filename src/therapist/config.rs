use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::DEFAULT_LOG_SPEC;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_serving_addr")]
    pub serving_addr: String,

    #[serde(default = "default_static_serving_dir")]
    pub static_serving_dir: PathBuf,

    /// Visits beyond this number get the "again?!" treatment.
    #[serde(default = "default_repeat_threshold")]
    pub repeat_threshold: u32,

    /// How many session identifiers are remembered at once.
    #[serde(default = "default_usage_cache_capacity")]
    pub usage_cache_capacity: usize,

    /// flexi_logger spec, e.g. `warn,mirrormirror=info`.
    #[serde(default = "default_log_spec")]
    pub log_spec: String,
}

fn default_serving_addr() -> String {
    "0.0.0.0:5000".into()
}

fn default_static_serving_dir() -> PathBuf {
    "ui/dist".into()
}

fn default_repeat_threshold() -> u32 {
    3
}

fn default_usage_cache_capacity() -> usize {
    1024
}

fn default_log_spec() -> String {
    DEFAULT_LOG_SPEC.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serving_addr: default_serving_addr(),
            static_serving_dir: default_static_serving_dir(),
            repeat_threshold: default_repeat_threshold(),
            usage_cache_capacity: default_usage_cache_capacity(),
            log_spec: default_log_spec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn partial_config_uses_defaults() -> Result<()> {
        let config: Config = serde_yaml::from_str("repeatThreshold: 5\n")?;
        assert_eq!(
            config,
            Config {
                repeat_threshold: 5,
                ..Default::default()
            }
        );
        Ok(())
    }

    #[test]
    fn log_spec_is_configurable() -> Result<()> {
        let config: Config = serde_yaml::from_str("logSpec: info\n")?;
        assert_eq!(config.log_spec, "info");
        assert_eq!(Config::default().log_spec, DEFAULT_LOG_SPEC);
        Ok(())
    }
}
