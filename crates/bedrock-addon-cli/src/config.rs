use std::path::{Path, PathBuf};

use bedrock_addon_pack::AddonConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub addon: AddonSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
pub struct AddonSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Derived from `name` when absent.
    #[serde(default)]
    pub namespace: Option<String>,
}

fn default_name() -> String {
    "Template Addon".into()
}

fn default_description() -> String {
    "A bedrock addon created using AddonManager!".into()
}

impl Default for AddonSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            namespace: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Erased and regenerated on every run.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("out")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Flat `defaults.json` shape: `{"name", "description", "namespace"}`, all optional.
#[derive(Debug, Deserialize)]
struct JsonDefaults {
    name: Option<String>,
    description: Option<String>,
    namespace: Option<String>,
}

impl From<JsonDefaults> for CliConfig {
    fn from(defaults: JsonDefaults) -> Self {
        let mut config = CliConfig::default();
        if let Some(name) = defaults.name {
            config.addon.name = name;
        }
        if let Some(description) = defaults.description {
            config.addon.description = description;
        }
        config.addon.namespace = defaults.namespace;
        config
    }
}

impl CliConfig {
    /// Read a TOML config, or a flat JSON defaults file when the extension is `.json`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let config: Self = if is_json {
            serde_json::from_str::<JsonDefaults>(&contents)?.into()
        } else {
            toml::from_str(&contents)?
        };
        Ok(config)
    }

    /// Like [`CliConfig::load`], but a missing or broken file yields the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                println!("Found defaults in {}, proceeding...", path.display());
                config
            }
            Err(e) => {
                println!(
                    "Couldn't load defaults from {} ({e}), proceeding with built-in defaults...",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Manager configuration; `output_override` wins over `[output] directory`.
    pub fn addon_config(&self, output_override: Option<PathBuf>) -> AddonConfig {
        let output_dir = output_override.unwrap_or_else(|| self.output.directory.clone());
        let config = AddonConfig::new(&self.addon.name, &self.addon.description, output_dir);
        match &self.addon.namespace {
            Some(namespace) => config.namespace(namespace),
            None => config,
        }
    }
}
