use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Reads and writes a validated config through a content provider.
/// Nothing stored yields `TConfig::default()`.
pub struct ConfigLoader<TProvider, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
{
    provider: TProvider,
    serializer: TSerializer,
}

impl ConfigLoader<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path), YamlConfigSerializer)
    }
}

impl<TProvider, TSerializer> ConfigLoader<TProvider, TSerializer>
where
    TProvider: ConfigContentProvider,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self { provider, serializer }
    }

    pub fn load<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
        TSerializer: ConfigSerializer<TConfig>,
    {
        let Some(content) = self.provider.read_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn store<TConfig>(&self, config: &TConfig) -> Result<(), String>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate,
        TSerializer: ConfigSerializer<TConfig>,
    {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = self.serializer.serialize(config)?;
        self.provider.write_content(&content)
    }
}
