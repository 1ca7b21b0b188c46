#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::{KlConfig, OutputFormat};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "kl")]
#[command(about = "Small utilities: base64, string hashes, splitting")]
#[command(version)]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Output format: text, json, yaml")]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋檔案設定
    pub fn apply_to(&self, config: &mut KlConfig) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
        if let cli::Command::Split { delims, keep_empty, .. } = &self.command {
            if let Some(delims) = delims {
                config.split.delimiters = delims.clone();
            }
            if *keep_empty {
                config.split.skip_empty = false;
            }
        }
    }
}
