// SPDX-License-Identifier: PMPL-1.0-or-later
//! accessibility-analyzer CLI - static accessibility checks for HTML pages
//!
//! Reads markup that is already on disk (or stdin) and prints a scored report.

use accessibility_analyzer::config::{self, Config};
use accessibility_analyzer::engine;
use accessibility_analyzer::report::{render, render_all, OutputFormat};
use accessibility_analyzer::rules::RuleRegistry;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Static accessibility rule engine for HTML pages
#[derive(Parser)]
#[command(name = "accessibility-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single HTML document
    Analyze {
        /// File to analyze, or "-" for stdin
        file: PathBuf,

        /// Source identifier shown in the report (defaults to the file path)
        #[arg(long)]
        source: Option<String>,

        /// Output format (overrides the config file)
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze every HTML file in a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format (overrides the config file)
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the active rules
    Rules {
        /// Config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default config file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("accessibility_analyzer=debug")
    } else {
        EnvFilter::new("accessibility_analyzer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config::default_config_path);
    config::load_config(&path).with_context(|| format!("loading config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, source, format, output, config, verbose } => {
            init_logging(verbose);
            let config = load(config.as_deref())?;
            let rules = RuleRegistry::from_config(&config.rules);
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);

            let (markup, default_source) = if file.as_os_str() == "-" {
                let mut buf = Vec::new();
                std::io::stdin().read_to_end(&mut buf)?;
                (buf, "stdin".to_string())
            } else {
                let buf = std::fs::read(&file)
                    .with_context(|| format!("reading {}", file.display()))?;
                (buf, file.display().to_string())
            };

            let source = source.unwrap_or(default_source);
            let report = engine::analyze(&markup, &source, &rules)?;
            write_output(&render(&report, format)?, output.as_deref())?;

            if report.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Check { dir, format, output, config, verbose } => {
            init_logging(verbose);
            let config = load(config.as_deref())?;
            let rules = RuleRegistry::from_config(&config.rules);
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);

            let reports = engine::analyze_directory(&dir, &rules)?;
            write_output(&render_all(&reports, format)?, output.as_deref())?;

            if reports.iter().any(|r| r.has_errors()) {
                std::process::exit(1);
            }
        }

        Commands::Rules { config } => {
            init_logging(false);
            let config = load(config.as_deref())?;
            let rules = RuleRegistry::from_config(&config.rules);
            for rule in rules.iter() {
                println!("{:<20} {}", rule.name(), rule.description());
            }
        }

        Commands::InitConfig { path } => {
            init_logging(false);
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_default_config(&path)?;
            eprintln!("Config written to {}", path.display());
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
