use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::assets::AssetManifest;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    pub site: Option<SiteConfig>,
    pub assets: Option<AssetManifest>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// Fixed document title applied to every assembled page
    pub title: String,
    pub brand: Link,
    pub nav: Vec<Link>,
    /// Links rendered with target="_blank"
    pub external: Vec<Link>,
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            brand: Link {
                text: "My Blog".to_string(),
                link: "../index.html".to_string(),
            },
            nav: vec![
                Link {
                    text: "Blog".to_string(),
                    link: "../blog.html".to_string(),
                },
                Link {
                    text: "About".to_string(),
                    link: "../about.html".to_string(),
                },
            ],
            external: Vec::new(),
            copyright: "&copy; 2026 My Blog. All rights reserved".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Link {
    pub text: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            [site]
            title = "Three Fine Days"
            brand = { text = "Three Fine Days", link = "../index.html" }
            nav = [
                { text = "Blog", link = "../blog.html" },
                { text = "Music", link = "../music.html" },
            ]
            external = [{ text = "Github", link = "https://github.com/example" }]
            copyright = "&copy; 2015 Three Fine Days"

            [assets]
            stylesheets = ["../css/tomorrow.css"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let site = config.site.unwrap();
        assert_eq!(site.title, "Three Fine Days");
        assert_eq!(site.nav.len(), 2);
        assert_eq!(site.external.len(), 1);
        assert_eq!(config.assets.unwrap().stylesheets.len(), 1);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.site.is_none());

        let site = config.site.unwrap_or_default();
        assert!(!site.title.is_empty());
        assert!(!site.nav.is_empty());
    }
}
