use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_engine.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub verbose: bool,
    pub log_prefix: Option<String>,
    pub print_board: bool,
    pub seed: Option<u64>,
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.log_prefix.as_deref().is_some_and(|prefix| prefix.trim().is_empty()) {
            return Err("log_prefix must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub verbose: bool,
    pub use_log_prefix: bool,
    pub print_board: bool,
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Command-line flags win over the file; flags can only switch options on.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        self.verbose |= overrides.verbose;
        self.print_board |= overrides.print_board;
        if overrides.use_log_prefix && self.log_prefix.is_none() {
            self.log_prefix = Some("Engine".to_string());
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{InMemoryConfigProvider, YamlConfigSerializer, load_config};

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let provider = InMemoryConfigProvider::new(Some("print_board: true\nseed: 42\n".to_string()));

        let config: EngineConfig = load_config(&provider, &YamlConfigSerializer).unwrap();

        assert!(config.print_board);
        assert!(!config.verbose);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_prefix, None);
    }

    #[test]
    fn test_blank_log_prefix_is_invalid() {
        let config = EngineConfig {
            log_prefix: Some("  ".to_string()),
            ..EngineConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = EngineConfig {
            seed: Some(1),
            log_prefix: Some("File".to_string()),
            ..EngineConfig::default()
        };
        let overrides = ConfigOverrides {
            verbose: true,
            use_log_prefix: true,
            print_board: false,
            seed: Some(7),
        };

        let merged = file.with_overrides(&overrides);

        assert!(merged.verbose);
        assert!(!merged.print_board);
        assert_eq!(merged.seed, Some(7));
        assert_eq!(merged.log_prefix.as_deref(), Some("File"));
    }

    #[test]
    fn test_use_log_prefix_sets_default_prefix() {
        let overrides = ConfigOverrides {
            use_log_prefix: true,
            ..ConfigOverrides::default()
        };

        let merged = EngineConfig::default().with_overrides(&overrides);

        assert_eq!(merged.log_prefix.as_deref(), Some("Engine"));
        assert_eq!(merged.seed, None);
    }
}
