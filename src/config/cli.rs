use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "endpoints-docgen")]
#[command(about = "Append the custom service endpoint list to the provider guide")]
pub struct CliConfig {
    /// Directory the source and target paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Service catalogue CSV (overrides the config file)
    #[arg(long)]
    pub source: Option<String>,

    /// Guide page the list is appended to (overrides the config file)
    #[arg(long)]
    pub target: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,

    /// Print the rendered text instead of appending it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(source) = &self.source {
            tracing::debug!("🔧 Source path overridden to: {}", source);
            config.source.path = source.clone();
        }

        if let Some(target) = &self.target {
            tracing::debug!("🔧 Target path overridden to: {}", target);
            config.target.path = target.clone();
        }

        Ok(config)
    }
}
