use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub tick_interval_ms: u32,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_interval_below_minimum() {
        let config = ClientConfig {
            tick_interval_ms: 10,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_interval_above_maximum() {
        let config = ClientConfig {
            tick_interval_ms: 10_000,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let serializer = YamlConfigSerializer::new();
        let config = ClientConfig {
            tick_interval_ms: 250,
        };
        let yaml = serializer.serialize(&config).unwrap();
        let restored: ClientConfig = serializer.deserialize(&yaml).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<ClientConfig, String> = serializer.deserialize("tick_interval_ms: fast");
        assert!(result.is_err());
    }
}
