mod config_content_provider;
mod config_loader;
mod config_serializer;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider, InMemoryConfigProvider};
pub use config_loader::ConfigLoader;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use game_config::GameConfig;
pub use validate::Validate;
