//! CLI front-end for minify-service.
//!
//! Minifies local files through the same engine the HTTP endpoint uses,
//! without requiring a running server.
//!
//! # Usage
//!
//! ```bash
//! # Minify a file; the type is inferred from the extension
//! cargo run --bin minifyctl -- file app.js
//!
//! # Force the type and output path
//! cargo run --bin minifyctl -- file bundle.txt -t js -o bundle.min.js
//!
//! # Overwrite an existing output without asking
//! cargo run --bin minifyctl -- file styles.css -y
//!
//! # Smoke-test the three transforms
//! cargo run --bin minifyctl -- check
//! ```

use minify_service::minify::{self, ContentKind};
use minify_service::utils::byte_size::{format_bytes, format_reduction};
use minify_service::workbench::{LocalGateway, Workbench};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI tool for minify-service.
#[derive(Parser)]
#[command(name = "minifyctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Minify a local file
    File {
        /// Path to the source file
        path: PathBuf,

        /// Content type (inferred from the extension if omitted)
        #[arg(short = 't', long = "type")]
        kind: Option<KindArg>,

        /// Output path (defaults to output.min.<ext> in the working directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Run each transform on a canned snippet and report pass/fail
    Check,
}

/// Content type argument, mirroring the wire names.
#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Js,
    Css,
    Html,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Js => ContentKind::Script,
            KindArg::Css => ContentKind::Stylesheet,
            KindArg::Html => ContentKind::Markup,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::File {
            path,
            kind,
            output,
            yes,
        } => minify_file(&path, kind, output, yes).await,
        Commands::Check => run_checks(),
    }
}

/// Reads, minifies and writes a single file.
async fn minify_file(
    path: &Path,
    kind: Option<KindArg>,
    output: Option<PathBuf>,
    yes: bool,
) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut workbench = Workbench::new(LocalGateway);
    workbench.ingest_file(&file_name, contents);

    if let Some(kind) = kind {
        workbench.set_kind(kind.into());
    } else if ContentKind::from_file_name(&file_name).is_none() {
        anyhow::bail!(
            "Cannot infer the content type of '{}'; pass one with --type",
            file_name
        );
    }

    let outcome = match workbench.minify().await {
        Ok(outcome) => outcome,
        Err(e) => anyhow::bail!("Minification failed: {e}"),
    };

    let out_path = output.unwrap_or_else(|| PathBuf::from(workbench.output_file_name()));

    if out_path.exists() && !yes {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", out_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    fs::write(&out_path, workbench.result())
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!("{} {}", "Wrote".green().bold(), out_path.display());
    println!("  Type:      {}", workbench.kind());
    println!("  Original:  {}", format_bytes(outcome.original_size));
    println!("  Minified:  {}", format_bytes(outcome.minified_size));
    println!(
        "  Reduction: {}",
        format_reduction(outcome.original_size, outcome.minified_size).cyan()
    );

    Ok(())
}

/// Smoke-tests the three transform adapters.
fn run_checks() -> Result<()> {
    let checks = [
        (ContentKind::Script, "var answer = 42;"),
        (ContentKind::Stylesheet, ".a {\n  color: black;\n}"),
        (ContentKind::Markup, "<p>  check  </p>"),
    ];

    let mut failed = false;
    for (kind, snippet) in checks {
        match minify::minify(kind, snippet) {
            Ok(outcome) => println!(
                "{} {:<10} {} -> {} bytes",
                "✓".green(),
                kind.to_string(),
                outcome.original_size,
                outcome.minified_size
            ),
            Err(e) => {
                failed = true;
                println!("{} {:<10} {}", "✗".red(), kind.to_string(), e);
            }
        }
    }

    if failed {
        anyhow::bail!("One or more transforms failed");
    }

    println!("{}", "All transforms operational.".green());
    Ok(())
}
