use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub trait ConfigSerializer<TConfig> {
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }

    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}

/// Reads a config file; a missing file is not an error.
pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }
}

pub struct InMemoryConfigProvider {
    content: Option<String>,
}

impl InMemoryConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }
}

impl ConfigContentProvider for InMemoryConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        Ok(self.content.clone())
    }
}

/// Loads and validates a config, falling back to `TConfig::default()` when
/// the provider has no content.
pub fn load_config<TConfig, TProvider, TSerializer>(
    provider: &TProvider,
    serializer: &TSerializer,
) -> Result<TConfig, String>
where
    TConfig: Validate + Default,
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<TConfig>,
{
    let Some(content) = provider.get_config_content()? else {
        return Ok(TConfig::default());
    };

    let config = serializer.deserialize(&content)?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

pub fn load_yaml_config<TConfig>(file_path: impl Into<PathBuf>) -> Result<TConfig, String>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    load_config(&FileContentConfigProvider::new(file_path), &YamlConfigSerializer)
}
