use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Product Categories"

[logging]
level = "debug"
"#;

/// Load configuration
///
/// The embedded default is parsed first; `CATALOG_LOG_LEVEL` set at build
/// time overrides the logging level.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(level) = option_env!("CATALOG_LOG_LEVEL") {
        config.logging.level = level.to_string();
    }
    Ok(config)
}

impl AppConfig {
    /// Unknown level names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(self.logging.level.trim()).unwrap_or(log::Level::Info)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                title: "Product Categories".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
