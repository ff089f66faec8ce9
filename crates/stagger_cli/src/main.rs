//! Stagger CLI
//!
//! Animate title markup from the command line:
//!
//! ```text
//! stagger animate title.html            # fragment in, fragment out
//! stagger page index.html -o out.html   # animate title elements of a page
//! stagger init                          # write a default stagger.toml
//! ```

mod config;
mod init;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use stagger_markup::{PageAnimator, TitleAnimator, TitleSelection};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::{StaggerConfig, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(name = "stagger")]
#[command(version)]
#[command(about = "Wrap title text into per-glyph spans with staggered animation delays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./stagger.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: AnimatorOverrides,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Command-line overrides for the [animator] config section
#[derive(Args, Debug, Default)]
struct AnimatorOverrides {
    /// Container tag whose words skip the word wrapper
    #[arg(long, global = true, value_name = "TAG")]
    container: Option<String>,

    /// Delay added per glyph, in seconds
    #[arg(long, global = true, value_name = "SECS")]
    step: Option<f64>,

    /// Delay of the first glyph, in seconds
    #[arg(long, global = true, value_name = "SECS")]
    initial: Option<f64>,

    /// Keep character references such as &amp; as one glyph
    #[arg(long, global = true)]
    keep_entities: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a markup fragment
    Animate {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Animate the title elements of a full page
    Page {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Title class to match (repeatable, replaces the configured classes)
        #[arg(long = "class", value_name = "CLASS")]
        classes: Vec<String>,
    },

    /// Write a default stagger.toml
    Init {
        /// Where to write the config
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { path, force } => init::write_default_config(&path, force),
        Commands::Animate { input, output } => {
            let config = load_config(cli.config.as_deref(), &cli.overrides)?;
            let animator = TitleAnimator::new(config.animator).context("Invalid animator config")?;

            let fragment = read_input(input.as_deref())?;
            let result = animator.animate_detailed(&fragment);
            tracing::info!(
                glyphs = result.glyphs,
                words = result.words,
                "animated fragment"
            );
            write_output(output.as_deref(), &result.markup)
        }
        Commands::Page {
            input,
            output,
            classes,
        } => {
            let mut config = load_config(cli.config.as_deref(), &cli.overrides)?;
            if !classes.is_empty() {
                config.selection = TitleSelection::new(classes);
            }
            let animator = TitleAnimator::new(config.animator).context("Invalid animator config")?;
            let page = PageAnimator::new(animator, config.selection)
                .context("Invalid title selection")?;

            let html = read_input(input.as_deref())?;
            let report = page
                .animate_page(&html)
                .context("Failed to rewrite page")?;
            if report.elements == 0 {
                tracing::warn!("no title elements matched");
            } else {
                tracing::info!(
                    elements = report.elements,
                    glyphs = report.glyphs,
                    "animated page"
                );
            }
            write_output(output.as_deref(), &report.html)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, overrides: &AnimatorOverrides) -> Result<StaggerConfig> {
    let mut config = StaggerConfig::discover(path)?;
    apply_overrides(&mut config, overrides);
    Ok(config)
}

fn apply_overrides(config: &mut StaggerConfig, overrides: &AnimatorOverrides) {
    let animator = &mut config.animator;

    if let Some(tag) = &overrides.container {
        animator.container_tag = tag.clone();
    }
    if let Some(step) = overrides.step {
        animator.timing.step_secs = step;
    }
    if let Some(initial) = overrides.initial {
        animator.timing.initial_secs = initial;
    }
    if overrides.keep_entities {
        animator.keep_entities = true;
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}
