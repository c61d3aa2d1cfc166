//! CLI binary for AOTUI: render declarative component documents to agent-readable markup.

use anyhow::{Context, Result};
use aotui_core::config::AotuiConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "aotui", about = "Agent-oriented semantic markup encoder")]
struct Cli {
    /// Project root holding .aotui/config.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON component document to markup
    Render {
        /// Document path; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Spaces per nesting level (overrides config)
        #[arg(long)]
        indent: Option<usize>,

        /// Force single-line output
        #[arg(long, conflicts_with = "indent")]
        compact: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;

    match cli.command {
        Commands::Render {
            file,
            indent,
            compact,
        } => cmd_render(&project_root, file.as_deref(), indent, compact),
        Commands::Config => cmd_config(&project_root),
    }
}

fn cmd_render(
    project_root: &Path,
    file: Option<&Path>,
    indent: Option<usize>,
    compact: bool,
) -> Result<()> {
    let config = AotuiConfig::load(project_root)?;
    let doc = aotui_cli::read_document(file)?;
    let opts = aotui_cli::markup_options(&config, indent, compact);
    let markup = aotui_cli::render_document(&doc, &config, opts)?;

    tracing::debug!(bytes = markup.len(), "rendered markup");
    if markup.ends_with('\n') {
        print!("{}", markup);
    } else {
        println!("{}", markup);
    }
    Ok(())
}

fn cmd_config(project_root: &Path) -> Result<()> {
    let config = AotuiConfig::load(project_root)?;
    let text = toml::to_string_pretty(&config).context("failed to serialize config")?;
    print!("{}", text);
    Ok(())
}
