/// Remove compiled SPIR-V artifacts under the given directories

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::{Context, Result};
use clap::Parser;
use huedra_tools::logging::init_logging;
use huedra_tools::shaders::clean_shaders;
use huedra_tools::{ToolsConfig, EXIT_FAILURE, EXIT_SETUP_ERROR, EXIT_SUCCESS};

#[derive(Debug, Parser)]
#[command(name = "clean-shaders", version, about = "Delete compiled SPIR-V shaders")]
struct Args {
    /// Directories to clean
    #[arg(default_value = ".")]
    dirs: Vec<PathBuf>,

    /// List the files that would be removed without deleting them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Configuration file (defaults to ./huedra-tools.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<u8> {
    let config = ToolsConfig::discover(args.config.as_deref())
        .context("Failed to load configuration")?;
    let extension = &config.shaders.output_extension;

    let report = clean_shaders(&args.dirs, extension, args.dry_run)
        .context("Failed to collect compiled shaders")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;

    Ok(if report.is_success() { EXIT_SUCCESS } else { EXIT_FAILURE })
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("clean-shaders: {:#}", e);
            ExitCode::from(EXIT_SETUP_ERROR)
        }
    }
}
