use crate::filter::DEFAULT_FILTER_NAME;
use crate::text::{validate_words_per_line, DEFAULT_WORDS_PER_LINE};
use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

const APP_NAME: &str = "wrap-text";
const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "WRAPTEXT";

// Define potential errors during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Serde struct for deserializing config file values.
// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    // Signed so that negative values reach validation instead of failing to parse
    words_per_line: Option<i64>,
    filter_name: Option<String>,
}

/// Resolved settings for the wrap helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Width used when a template calls the helper without one
    pub words_per_line: usize,
    /// Name the helper is registered under
    pub filter_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            words_per_line: DEFAULT_WORDS_PER_LINE,
            filter_name: DEFAULT_FILTER_NAME.to_string(),
        }
    }
}

// Command line arguments defined using clap.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Wrap text into groups of words separated by <br>",
    long_about = None
)]
pub struct CliArgs {
    /// Text file to wrap (reads stdin when omitted)
    #[arg(conflicts_with = "template")]
    pub input: Option<PathBuf>,

    /// Number of words per line
    #[arg(short, long, allow_negative_numbers = true)]
    pub words_per_line: Option<i64>,

    /// Name the template helper is registered under
    #[arg(long)]
    pub filter_name: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Handlebars template to render with the helper registered
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// JSON file with the template data
    #[arg(short, long, requires = "template")]
    pub data: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

// Function to load configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    // Build environment source separately
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);
    // Missing env vars are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let mut config_builder = ConfigCrate::builder();

    // An explicit --config must exist; the default location is optional.
    if let Some(ref path) = args.config {
        config_builder = config_builder.add_source(File::from(path.clone()).required(true));
    } else if let Some(path) = default_config_path() {
        config_builder = config_builder.add_source(File::from(path).required(false));
    }

    // Overrides (environment or test map) win over the file
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let words_per_line = match args.words_per_line.or(loaded_sources.words_per_line) {
        Some(value) => validate_words_per_line(value)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?,
        None => DEFAULT_WORDS_PER_LINE,
    };

    let config = Config {
        words_per_line,
        filter_name: args
            .filter_name
            .clone()
            .or(loaded_sources.filter_name)
            .unwrap_or_else(|| DEFAULT_FILTER_NAME.to_string()),
    };

    validate_config(&config)?;
    debug!(?config, "resolved configuration");

    Ok(config)
}

/// Validates the loaded configuration for required fields and consistency.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let name = config.filter_name.as_str();
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::ValidationError(format!(
            "filter_name must be a non-empty identifier, got {:?}",
            name
        )));
    }

    Ok(())
}
