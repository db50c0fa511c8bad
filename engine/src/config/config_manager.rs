use serde::Deserialize;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
{
    config_content_provider: TConfigContentProvider,
    config_serializer: TConfigSerializer,
}

impl ConfigManager<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            config_content_provider: FileContentConfigProvider::new(file_path),
            config_serializer: YamlConfigSerializer,
        }
    }
}

impl<TConfigContentProvider, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
{
    pub fn get_config<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: for<'de> Deserialize<'de> + Validate + Default,
        TConfigSerializer: ConfigSerializer<TConfig>,
    {
        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }
}
