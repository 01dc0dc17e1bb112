use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct InstallerConfig {
    pub steps: StepsConfig,
    pub fonts: FontsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepsConfig {
    pub root_import: bool,
    pub index_html: bool,
    pub scaffold: bool,
    pub stylesheet: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontsConfig {
    pub family: String,
    pub weights: Vec<u16>,
}

impl InstallerConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        let mut config = Self::defaults()?;

        if let Some(config_path) = user_config_path() {
            if config_path.exists() {
                let user_str = fs::read_to_string(&config_path)?;
                config = toml::from_str(&user_str)?;
                tracing::debug!("loaded user config from {}", config_path.display());
            }
        }

        Ok(config)
    }

    pub fn defaults() -> Result<Self> {
        Ok(toml::from_str(DEFAULTS)?)
    }
}

impl FontsConfig {
    /// Query value for the font stylesheet URL, e.g. `Roboto:wght@300;400`.
    pub fn family_query(&self) -> String {
        let family = self.family.trim().replace(' ', "+");
        if self.weights.is_empty() {
            return family;
        }

        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();
        let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
        format!("{family}:wght@{}", weights.join(";"))
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "bx-add").map(|d| d.config_dir().join("config.toml"))
}
