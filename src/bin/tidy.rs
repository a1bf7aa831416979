/// Run clang-tidy over C++ sources and total the errors and warnings

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::{Context, Result};
use clap::Parser;
use huedra_tools::lint::{lint_targets, write_result, LintPass, LintSummary};
use huedra_tools::logging::init_logging;
use huedra_tools::{Palette, SystemRunner, ToolsConfig, WorkerPool, EXIT_SETUP_ERROR};

#[derive(Debug, Parser)]
#[command(name = "tidy", version, about = "Aggregate clang-tidy diagnostics")]
struct Args {
    /// Root directories with files to check
    dirs: Vec<PathBuf>,

    /// File to check
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Exit non-zero when any warning is found
    #[arg(long)]
    warnings_as_errors: bool,

    /// Linter processes to run at once (0 = one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Configuration file (defaults to ./huedra-tools.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<u8> {
    let mut config = ToolsConfig::discover(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(jobs) = args.jobs {
        config.jobs = jobs;
    }

    let palette = Palette::detect(args.no_color);
    if !palette.is_enabled() {
        config.lint.use_color = false;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Running {}...", config.lint.tool)?;
    out.flush()?;

    let runner = SystemRunner;
    let pass = LintPass::new(&config.lint, &runner);
    let targets = pass
        .targets(args.file.as_deref(), &args.dirs)
        .context("Failed to collect files to lint")?;

    let pool = WorkerPool::new(config.worker_count())?;
    let results = lint_targets(&pass, &targets, &pool);

    for result in &results {
        write_result(&mut out, result, &config.lint.tool, &palette)?;
    }

    let summary = LintSummary::from_results(&results);
    summary.write_to(&mut out, &palette)?;
    out.flush()?;

    Ok(summary.exit_code(args.warnings_as_errors))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("tidy: {:#}", e);
            ExitCode::from(EXIT_SETUP_ERROR)
        }
    }
}
