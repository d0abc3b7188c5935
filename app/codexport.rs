//! Command-line interface for codexport.
//!
//! Collects source files under a directory into a single Markdown document.

use clap::Parser;
use codexport::{ExportBuilder, ExportOptions, ExportSummary, export};
use std::path::PathBuf;
use std::process::exit;

/// codexport — export source files into one Markdown document
#[derive(Parser)]
#[command(name = "codexport", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output file (default code.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extension to export, e.g. `.ts` (can be repeated; replaces the default set)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Exclude glob pattern (can be repeated)
    #[arg(short = 'x', long = "exclude")]
    exclude_patterns: Vec<String>,

    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Keep filesystem order instead of sorting entries by name
    #[arg(long)]
    no_sort: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging on stderr
    #[cfg(feature = "logging")]
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> Result<ExportOptions, codexport::ExportError> {
        let base = match &self.config {
            Some(path) => ExportOptions::from_json_file(path)?,
            None => ExportOptions::default(),
        };
        let mut builder = ExportBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions);
        }
        let mut options = builder.build();
        options.exclude_patterns.extend(self.exclude_patterns);
        options.follow_links |= self.follow_links;
        options.sort &= !self.no_sort;
        Ok(options)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    let json = cli.json;

    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match export(&options) {
        Ok(summary) => {
            report(&summary, json);
            if !summary.is_complete() {
                exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn report(summary: &ExportSummary, json: bool) {
    if json {
        let out = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", out);
        return;
    }
    println!(
        "Done! Exported {} files to {}",
        summary.exported,
        summary.output_path.display()
    );
    if !summary.lossy.is_empty() {
        println!(
            "warning: {} file(s) contained invalid UTF-8 and were exported with replacement characters",
            summary.lossy.len()
        );
    }
    if summary.skipped_cycles > 0 {
        println!(
            "warning: {} directories skipped as already visited",
            summary.skipped_cycles
        );
    }
    for failure in &summary.failures {
        println!("warning: skipped: {}", failure.message);
    }
}
