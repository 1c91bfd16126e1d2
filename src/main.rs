//! cssmin - CLI entry point

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use humansize::{format_size, DECIMAL};

use cssmin::{MinifyStats, Pipeline};

#[derive(Parser)]
#[command(name = "cssmin")]
#[command(about = "Naive CSS minifier - lexical rewrite passes, no parsing")]
#[command(version)]
struct Cli {
    /// Input stylesheet
    file: Option<PathBuf>,

    /// Write the minified output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print per-pass byte savings to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print a final size summary to stderr
    #[arg(short, long)]
    summary: bool,

    /// Emit per-pass statistics as JSON to stderr
    #[arg(long)]
    json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "cssmin", &mut io::stdout());
        return Ok(());
    }

    let Some(file) = cli.file else {
        bail!("missing input file (try 'cssmin --help')");
    };

    let input = fs::read(&file)
        .with_context(|| format!("couldn't open file: {}", file.display()))?;

    let mut stats = MinifyStats::default();
    let minified = Pipeline::standard().run(&input, &mut stats);

    if cli.verbose {
        for report in &stats.passes {
            eprintln!(
                "pass {} ({}): {} -> {} bytes (saved {})",
                report.index,
                report.name,
                report.bytes_before,
                report.bytes_after,
                report.saved()
            );
        }
    }

    if cli.summary {
        eprintln!(
            "{} -> {} (saved {})",
            format_size(stats.input_bytes(), DECIMAL),
            format_size(stats.output_bytes(), DECIMAL),
            format_size(stats.total_saved(), DECIMAL)
        );
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&stats).context("couldn't encode statistics")?;
        eprintln!("{}", json);
    }

    // Verbatim, no appended newline.
    match cli.output {
        Some(path) => fs::write(&path, &minified)
            .with_context(|| format!("couldn't write output: {}", path.display()))?,
        None => io::stdout()
            .write_all(&minified)
            .context("couldn't write to stdout")?,
    }

    Ok(())
}
