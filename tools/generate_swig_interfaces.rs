// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
SWIG Interface Generator

Generates the PyGeNN SWIG interfaces and Custom model sources for a GeNN tree.

Usage:
  cargo run --bin generate_swig_interfaces -- <genn_path> [--config FILE] [--debug CRATE] [--json]

Every missing family header is reported on stdout as
`Error: The include/<header> file is missing` and the tool exits with status 1
before anything is written.
*/

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use pygenn_codegen::config::{load_config, validate_config};
use pygenn_codegen::observability::{debug_flags_help, init_logging, parse_debug_flags};
use pygenn_codegen::swig::{Generator, SwigGenError};

/// Generate SWIG interfaces for PyGeNN
#[derive(Parser, Debug)]
#[command(name = "generate_swig_interfaces", version, about, after_help = debug_flags_help())]
struct Args {
    /// Path to GeNN
    #[arg(value_name = "DIR")]
    genn_path: PathBuf,

    /// Configuration file (default: <DIR>/pygenn_codegen.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Header directory below DIR
    #[arg(long)]
    include_dir: Option<String>,

    /// Output directory below DIR
    #[arg(long)]
    swig_dir: Option<String>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable debug logging for a crate (repeatable, or "all")
    #[arg(long = "debug", value_name = "CRATE")]
    debug: Vec<String>,

    /// Print the generation report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Do not print the generation report
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Args {
    fn cli_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        let options = [
            ("include_dir", &self.include_dir),
            ("swig_dir", &self.swig_dir),
            ("log_level", &self.log_level),
        ];
        for (key, value) in options {
            if let Some(value) = value {
                overrides.insert(key.to_string(), value.clone());
            }
        }
        overrides
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(
        args.config.as_deref(),
        Some(args.genn_path.as_path()),
        Some(&args.cli_overrides()),
    )
    .context("Failed to load configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let debug_flags = parse_debug_flags(args.debug.iter().cloned());
    init_logging(&debug_flags, &config.logging.level)?;
    debug!(?config, "Configuration loaded");

    let generator = Generator::new(&args.genn_path, &config);
    let report = match generator.run() {
        Ok(report) => report,
        Err(SwigGenError::MissingInputs(paths)) => {
            for path in paths {
                println!("Error: The {} file is missing", path.display());
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !args.quiet {
        println!("{}", report);
    }
    Ok(())
}
