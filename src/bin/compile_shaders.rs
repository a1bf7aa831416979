/// Compile every GLSL shader under the given directories to SPIR-V
///
/// Each source `foo.vert` is handed to the configured compiler and written
/// next to it as `foo.vert.spv`.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::{Context, Result};
use clap::Parser;
use huedra_tools::logging::init_logging;
use huedra_tools::shaders::compile_shaders;
use huedra_tools::{
    Palette, SystemRunner, ToolsConfig, WorkerPool, EXIT_FAILURE, EXIT_SETUP_ERROR, EXIT_SUCCESS,
};

#[derive(Debug, Parser)]
#[command(name = "compile-shaders", version, about = "Compile GLSL shaders to SPIR-V")]
struct Args {
    /// Directories to search for shader sources
    #[arg(default_value = ".")]
    dirs: Vec<PathBuf>,

    /// Only print the summary line
    #[arg(short, long)]
    quiet: bool,

    /// Compiler processes to run at once (0 = one per CPU)
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

    let pool = WorkerPool::new(config.worker_count())?;
    let report = compile_shaders(&args.dirs, &config.shaders, &SystemRunner, &pool)
        .context("Failed to collect shader sources")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out, &Palette::detect(args.no_color), args.quiet)?;
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
            eprintln!("compile-shaders: {:#}", e);
            ExitCode::from(EXIT_SETUP_ERROR)
        }
    }
}
