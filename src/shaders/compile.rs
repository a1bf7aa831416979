use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::ShaderConfig;
use crate::error::ToolResult;
use crate::external::{Invocation, ToolOutput, ToolRunner};
use crate::pool::WorkerPool;
use crate::style::{Palette, RED};
use crate::walker::{collect_files, FileFilter};

/// Result of handing one source to the compiler
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderOutcome {
    Compiled,
    Failed { output: ToolOutput },
    SpawnFailed { message: String },
}

/// Per-shader record, kept in walk order
#[derive(Debug, Clone)]
pub struct ShaderResult {
    pub source: PathBuf,
    pub output: PathBuf,
    pub invocation: Invocation,
    pub outcome: ShaderOutcome,
}

/// Outcome of a whole compile run
#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    pub results: Vec<ShaderResult>,
}

impl CompileReport {
    pub fn compiled(&self) -> usize {
        self.count(|o| matches!(o, ShaderOutcome::Compiled))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ShaderOutcome::Failed { .. }))
    }

    pub fn spawn_failures(&self) -> usize {
        self.count(|o| matches!(o, ShaderOutcome::SpawnFailed { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.spawn_failures() == 0
    }

    fn count(&self, pred: impl Fn(&ShaderOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Write per-shader lines (unless `quiet`) and the summary
    pub fn write_to(&self, out: &mut impl Write, palette: &Palette, quiet: bool) -> io::Result<()> {
        if !quiet {
            for result in &self.results {
                let source = result.source.display();
                match &result.outcome {
                    ShaderOutcome::Compiled => {
                        writeln!(out, "Successfully compiled {}", source)?;
                    }
                    ShaderOutcome::Failed { output } => {
                        let header = format!("Error compiling {}:", source);
                        writeln!(out, "{}", palette.paint(&[RED], &header))?;
                        writeln!(out, "{}", output.stdout.trim_end())?;
                        if !output.stderr.trim().is_empty() {
                            writeln!(out, "{}", output.stderr.trim_end())?;
                        }
                    }
                    ShaderOutcome::SpawnFailed { message } => {
                        writeln!(out, "Failed to run command: {}", result.invocation)?;
                        writeln!(out, "{}", message)?;
                    }
                }
            }
        }

        let failed = self.failed() + self.spawn_failures();
        let summary = format!("Compiled {} shader(s), {} failed", self.compiled(), failed);
        if failed == 0 {
            writeln!(out, "{}", palette.success(&summary))
        } else {
            writeln!(out, "{}", palette.error(&summary))
        }
    }
}

/// Path the compiled artifact is written to: the source path plus `.{extension}`
pub fn output_path(source: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Compiler command line for one source
pub fn compiler_invocation(config: &ShaderConfig, source: &Path) -> Invocation {
    let output = output_path(source, &config.output_extension);
    Invocation::new(config.compiler.as_str())
        .args(config.compiler_args.iter().map(String::as_str))
        .path_arg(source)
        .arg("-o")
        .path_arg(&output)
}

/// Shader sources under `root`
pub fn shader_sources(root: &Path, config: &ShaderConfig) -> ToolResult<Vec<PathBuf>> {
    let filter = FileFilter::any()
        .excluding(&[config.output_extension.as_str()])
        .excluding(&config.skip_extensions);
    collect_files(root, &filter)
}

/// Compile every shader source under `roots`
///
/// Sources are compiled on `pool`; the report keeps walk order. A failing
/// shader never stops the run.
pub fn compile_shaders<R>(
    roots: &[PathBuf],
    config: &ShaderConfig,
    runner: &R,
    pool: &WorkerPool,
) -> ToolResult<CompileReport>
where
    R: ToolRunner + ?Sized,
{
    let mut sources = Vec::new();
    for root in roots {
        sources.extend(shader_sources(root, config)?);
    }

    log::info!(
        "Compiling {} shader(s) with {} on {} thread(s)",
        sources.len(),
        config.compiler,
        pool.threads()
    );
    let start = Instant::now();

    let results = pool.map_ordered(&sources, |source| {
        let invocation = compiler_invocation(config, source);
        log::debug!("Running: {}", invocation);

        let outcome = match runner.run(&invocation) {
            Ok(output) if output.success() => ShaderOutcome::Compiled,
            Ok(output) => ShaderOutcome::Failed { output },
            Err(e) => ShaderOutcome::SpawnFailed { message: e.to_string() },
        };

        ShaderResult {
            source: source.clone(),
            output: output_path(source, &config.output_extension),
            invocation,
            outcome,
        }
    });

    log::info!("Shader compilation finished in {:.2?}", start.elapsed());
    Ok(CompileReport { results })
}
