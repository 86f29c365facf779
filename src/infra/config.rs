use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Default ignore patterns (in addition to .gitignore)
    pub ignore_patterns: Vec<String>,

    /// File extensions considered for snippet scanning
    pub extensions: Vec<String>,

    /// Default extraction settings
    pub extract: ExtractConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig
{
    /// Root directory emitted snippets are written under
    pub out_dir: String,

    /// Include hidden (dot) files when walking
    pub include_hidden: bool,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            ignore_patterns: vec![
                "node_modules/".to_string(),
                "dist/".to_string(),
                "build/".to_string(),
                "target/".to_string(),
                ".git/".to_string(),
            ],
            extensions: vec!["js".to_string(), "ts".to_string()],
            extract: ExtractConfig::default(),
        }
    }
}

impl Default for ExtractConfig
{
    fn default() -> Self
    {
        Self { out_dir: "snippets".to_string(), include_hidden: false }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["snipgen.toml", ".snipgen.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with SNIPGEN_ prefix
    builder = builder.add_source(config::Environment::with_prefix("SNIPGEN").separator("_"));

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("snipgen.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
