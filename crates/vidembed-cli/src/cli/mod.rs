//! CLI for vidembed.

mod commands;
mod output;
mod stage;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vidembed_core::config::{self, OutputFormat};
use vidembed_core::Resolver;

use commands::{run_page, run_resolve, run_watch};

/// Top-level CLI for vidembed.
#[derive(Debug, Parser)]
#[command(name = "vidembed")]
#[command(about = "vidembed: paste a video URL, get an embeddable player", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format flag; maps onto the config's [`OutputFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one URL and print what to render.
    Resolve {
        /// YouTube, Vimeo, direct video file, or any other http(s) URL.
        url: String,
        /// Output format (defaults to `default_format` from config.toml).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Read URLs from stdin, one per line; each replaces the previous player.
    Watch {
        /// Output format (defaults to `default_format` from config.toml).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Write a standalone HTML page with the player for a URL.
    Page {
        /// URL to embed.
        url: String,
        /// Write the page here instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = Resolver::from_config(&cfg);
        tracing::debug!(
            "direct video extensions: {:?}",
            resolver.video_extensions()
        );
        let pick = |f: Option<FormatArg>| f.map(OutputFormat::from).unwrap_or(cfg.default_format);

        match cli.command {
            CliCommand::Resolve { url, format } => run_resolve(&resolver, &url, pick(format))?,
            CliCommand::Watch { format } => run_watch(&resolver, pick(format))?,
            CliCommand::Page { url, output } => run_page(&resolver, &url, output.as_deref())?,
        }

        Ok(())
    }
}
