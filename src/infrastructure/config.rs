use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_panels")]
    pub panels: Vec<PanelConfig>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            panels: default_panels(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PanelConfig {
    pub title: String,
    pub source: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    768
}

// The panel shipped when no configuration file is present
fn default_panels() -> Vec<PanelConfig> {
    vec![PanelConfig {
        title: "Gen9 1024x1024".to_string(),
        source: "reports/Demo1.html".to_string(),
        width: default_width(),
        height: default_height(),
    }]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("panel {index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("panel {index} has an empty source")]
    EmptySource { index: usize },
    #[error("viewer configuration declares no panels")]
    NoPanels,
}

/// Load the viewer configuration from `config/viewer.toml`. The file is
/// optional; without it the built-in single panel is used.
pub fn load_viewer_config() -> Result<ViewerConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/viewer").required(false))
        .build()?;

    let cfg: ViewerConfig = settings.try_deserialize()?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &ViewerConfig) -> Result<(), ConfigError> {
    if cfg.panels.is_empty() {
        return Err(ConfigError::NoPanels);
    }
    for (index, panel) in cfg.panels.iter().enumerate() {
        if panel.title.is_empty() {
            return Err(ConfigError::EmptyTitle { index });
        }
        if panel.source.is_empty() {
            return Err(ConfigError::EmptySource { index });
        }
    }
    Ok(())
}
