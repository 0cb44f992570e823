pub mod keybindings;

use config::ConfigError;
use ratatui::style::Color;
use serde::Deserialize;

pub use keybindings::KeyBindings;

use crate::infrastructure::capability::HoverSupport;
use crate::model::trail::{Trail, TrailError};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Shape and colour of the cursor trail.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailSettings {
    pub length: usize,
    pub head_alpha: f64,
    pub tail_alpha: f64,
    /// Explicit coefficients, one per node. Overrides `head_alpha`/`tail_alpha`.
    pub alphas: Option<Vec<f64>>,
    pub color: Color,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            length: 12,
            head_alpha: 0.15,
            tail_alpha: 0.04,
            alphas: None,
            color: Color::Rgb(0xe1, 0x1d, 0x48),
        }
    }
}

impl TrailSettings {
    pub fn build(&self) -> Result<Trail, TrailError> {
        match &self.alphas {
            Some(alphas) if alphas.len() != self.length => Err(TrailError::LengthMismatch {
                expected: self.length,
                actual: alphas.len(),
            }),
            Some(alphas) => Trail::new(alphas.clone()),
            None => Trail::tapered(self.length, self.head_alpha, self.tail_alpha),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub trail: TrailSettings,
    #[serde(default)]
    pub hover: HoverSupport,
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Config {
    /// Configuration bundled with the binary.
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Bundled defaults overlaid with the user's config file, if any.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        if cfg.targets.is_empty() {
            cfg.targets.clone_from(&default_config.targets);
        }

        Ok(cfg)
    }
}
