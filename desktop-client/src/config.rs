use serde::Deserialize;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate};

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Deserialize, Clone)]
pub struct Config {
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 1000 {
            return Err("tick_interval_ms must not exceed 1000".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // 5 ticks per second.
            tick_interval_ms: 200,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_tick_interval_bounds() {
        let too_fast = Config {
            tick_interval_ms: 10,
            ..Config::default()
        };
        assert!(too_fast.validate().is_err());

        let too_slow = Config {
            tick_interval_ms: 5000,
            ..Config::default()
        };
        assert!(too_slow.validate().is_err());
    }
}
