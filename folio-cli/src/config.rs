use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FolioConfig {
    /// Build configuration
    pub build: BuildConfig,
    /// Site configuration (from folio-core)
    #[serde(flatten)]
    pub site: folio_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Content directory with one subdirectory per category
    pub content: String,
    /// Output directory for generated pages
    pub output: String,
    /// Theme directory
    pub theme: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "./contents".to_string(),
            output: "./out".to_string(),
            theme: "./theme".to_string(),
            config: "./folio.toml".to_string(),
        }
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            site: folio_core::config::Config::default(),
        }
    }
}

impl FolioConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (FOLIO_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .unwrap_or(&"./folio.toml".to_string())
            .clone();

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with FOLIO_ prefix
        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        let mut cli_overrides = std::collections::HashMap::new();

        if let Some(content) = args.get_one::<String>("content") {
            cli_overrides.insert("build.content".to_string(), content.clone());
        }
        if let Some(output) = args.get_one::<String>("output") {
            cli_overrides.insert("build.output".to_string(), output.clone());
        }
        if let Some(theme) = args.get_one::<String>("theme") {
            cli_overrides.insert("build.theme".to_string(), theme.clone());
        }
        if let Some(config) = args.get_one::<String>("config") {
            cli_overrides.insert("build.config".to_string(), config.clone());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        // Build and deserialize
        let config = builder.build()?;
        let folio_config: FolioConfig = config.try_deserialize()?;

        Ok(folio_config)
    }

    /// Get the site configuration for passing to folio-core
    pub fn site_config(&self) -> folio_core::SiteConfig {
        self.site.site.clone().unwrap_or_default()
    }

    /// Get the build configuration
    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }
}

/// Load configuration specifically for build commands
pub fn load_build_config(args: &ArgMatches) -> Result<FolioConfig> {
    FolioConfig::load(args)
}
