use std::path::{Path, PathBuf};
use crate::config::LintConfig;
use crate::error::ToolResult;
use crate::external::{Invocation, ToolRunner};
use crate::pool::WorkerPool;
use crate::walker::{collect_files, FileFilter};
use super::{count_diagnostics, DiagnosticCounts};

/// What one linter run reported
#[derive(Debug, Clone, PartialEq)]
pub enum LintOutcome {
    /// Exit code zero and no warnings
    Clean,

    /// Non-zero exit or at least one warning
    Flagged {
        exit_failed: bool,
        counts: DiagnosticCounts,
        output: String,
    },

    /// The linter could not be started
    SpawnFailed { message: String },
}

/// Per-file lint record, kept in input order
#[derive(Debug, Clone)]
pub struct LintResult {
    pub path: PathBuf,
    pub outcome: LintOutcome,
}

/// A configured linter
pub struct LintPass<'a, R: ToolRunner + ?Sized> {
    config: &'a LintConfig,
    runner: &'a R,
    filter: FileFilter,
}

impl<'a, R: ToolRunner + ?Sized> LintPass<'a, R> {
    pub fn new(config: &'a LintConfig, runner: &'a R) -> Self {
        Self {
            config,
            runner,
            filter: FileFilter::new(&config.extensions),
        }
    }

    /// Check if a file should be linted
    pub fn accepts(&self, path: &Path) -> bool {
        self.filter.matches(path)
    }

    /// Linter command line for one file
    pub fn invocation(&self, path: &Path) -> Invocation {
        let mut invocation = Invocation::new(self.config.tool.as_str())
            .args(self.config.extra_args.iter().map(String::as_str))
            .arg("-p")
            .path_arg(&self.config.build_dir);
        if self.config.use_color {
            invocation = invocation.arg("--use-color");
        }
        invocation.path_arg(path)
    }

    /// Lint a single file
    pub fn run(&self, path: &Path) -> LintOutcome {
        let invocation = self.invocation(path);
        log::debug!("Running: {}", invocation);

        let output = match self.runner.run(&invocation) {
            Ok(output) => output,
            Err(e) => return LintOutcome::SpawnFailed { message: e.to_string() },
        };

        let counts = count_diagnostics(&output.stdout);
        let exit_failed = !output.success();
        if !exit_failed && counts.warnings == 0 {
            return LintOutcome::Clean;
        }

        // Crash reports only show up on stderr
        let mut text = output.stdout;
        if exit_failed && !output.stderr.trim().is_empty() {
            text.push_str(&output.stderr);
        }

        LintOutcome::Flagged {
            exit_failed,
            counts,
            output: text,
        }
    }

    /// Files to lint: the explicit file first, then each directory in order
    pub fn targets(&self, file: Option<&Path>, dirs: &[PathBuf]) -> ToolResult<Vec<PathBuf>> {
        let mut targets = Vec::new();

        if let Some(file) = file {
            if self.accepts(file) {
                targets.push(file.to_path_buf());
            } else {
                log::warn!(
                    "Skipping {}: extension is not one of {:?}",
                    file.display(),
                    self.config.extensions
                );
            }
        }

        for dir in dirs {
            targets.extend(collect_files(dir, &self.filter)?);
        }

        Ok(targets)
    }
}

/// Lint every target on `pool`, keeping input order
pub fn lint_targets<R>(
    pass: &LintPass<'_, R>,
    targets: &[PathBuf],
    pool: &WorkerPool,
) -> Vec<LintResult>
where
    R: ToolRunner + ?Sized,
{
    log::info!(
        "Linting {} file(s) with {} on {} thread(s)",
        targets.len(),
        pass.config.tool,
        pool.threads()
    );

    pool.map_ordered(targets, |path| LintResult {
        path: path.clone(),
        outcome: pass.run(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{spawn_error, ToolError};
    use crate::external::ToolOutput;

    struct FixedRunner(Result<ToolOutput, String>);

    impl ToolRunner for FixedRunner {
        fn run(&self, invocation: &Invocation) -> ToolResult<ToolOutput> {
            self.0
                .clone()
                .map_err(|e| spawn_error(&invocation.program, e))
        }
    }

    fn output(code: i32, stdout: &str) -> ToolOutput {
        ToolOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_default_invocation() {
        let config = LintConfig::default();
        let runner = FixedRunner(Ok(output(0, "")));
        let pass = LintPass::new(&config, &runner);

        assert_eq!(
            pass.invocation(Path::new("huedra/core/log.cpp")).to_string(),
            "clang-tidy -p build --use-color huedra/core/log.cpp"
        );
    }

    #[test]
    fn test_invocation_without_color_with_extras() {
        let config = LintConfig {
            use_color: false,
            extra_args: vec!["--quiet".to_string()],
            ..LintConfig::default()
        };
        let runner = FixedRunner(Ok(output(0, "")));
        let pass = LintPass::new(&config, &runner);

        assert_eq!(
            pass.invocation(Path::new("a.hpp")).args,
            vec!["--quiet", "-p", "build", "a.hpp"]
        );
    }

    #[test]
    fn test_clean_run() {
        let config = LintConfig::default();
        let runner = FixedRunner(Ok(output(0, "1 warning generated.\n")));
        let pass = LintPass::new(&config, &runner);

        assert_eq!(pass.run(Path::new("a.cpp")), LintOutcome::Clean);
    }

    #[test]
    fn test_warnings_flag_file() {
        let config = LintConfig::default();
        let stdout = "a.cpp:1:1: warning: x\na.cpp:2:1: warning: y\n";
        let runner = FixedRunner(Ok(output(0, stdout)));
        let pass = LintPass::new(&config, &runner);

        assert_eq!(
            pass.run(Path::new("a.cpp")),
            LintOutcome::Flagged {
                exit_failed: false,
                counts: DiagnosticCounts { errors: 0, warnings: 2 },
                output: stdout.to_string(),
            }
        );
    }

    #[test]
    fn test_nonzero_exit_flags_file() {
        let config = LintConfig::default();
        let runner = FixedRunner(Ok(output(1, "a.cpp:1:1: error: boom\n")));
        let pass = LintPass::new(&config, &runner);

        match pass.run(Path::new("a.cpp")) {
            LintOutcome::Flagged { exit_failed, counts, .. } => {
                assert!(exit_failed);
                assert_eq!(counts, DiagnosticCounts { errors: 1, warnings: 0 });
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_silent_failure_flags_file() {
        let config = LintConfig::default();
        let killed = ToolOutput {
            code: None,
            stdout: String::new(),
            stderr: "Segmentation fault".to_string(),
        };

        let runner = FixedRunner(Ok(killed));
        let pass = LintPass::new(&config, &runner);
        assert_eq!(
            pass.run(Path::new("a.cpp")),
            LintOutcome::Flagged {
                exit_failed: true,
                counts: DiagnosticCounts::default(),
                output: "Segmentation fault".to_string(),
            }
        );

        let runner = FixedRunner(Ok(output(1, "")));
        let pass = LintPass::new(&config, &runner);
        assert_eq!(
            pass.run(Path::new("a.cpp")),
            LintOutcome::Flagged {
                exit_failed: true,
                counts: DiagnosticCounts::default(),
                output: String::new(),
            }
        );
    }

    #[test]
    fn test_spawn_failure() {
        let config = LintConfig::default();
        let runner = FixedRunner(Err("No such file or directory".to_string()));
        let pass = LintPass::new(&config, &runner);

        match pass.run(Path::new("a.cpp")) {
            LintOutcome::SpawnFailed { message } => {
                assert_eq!(message, "Failed to run clang-tidy: No such file or directory")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_targets_filters_explicit_file() {
        let config = LintConfig::default();
        let runner = FixedRunner(Ok(output(0, "")));
        let pass = LintPass::new(&config, &runner);

        let targets = pass
            .targets(Some(Path::new("CMakeLists.txt")), &[])
            .expect("No directories to walk");
        assert!(targets.is_empty());

        let targets = pass
            .targets(Some(Path::new("main.cpp")), &[])
            .expect("No directories to walk");
        assert_eq!(targets, vec![PathBuf::from("main.cpp")]);
    }

    #[test]
    fn test_targets_missing_dir() {
        let config = LintConfig::default();
        let runner = FixedRunner(Ok(output(0, "")));
        let pass = LintPass::new(&config, &runner);

        let err = pass
            .targets(None, &[PathBuf::from("/definitely/not/a/huedra/dir")])
            .unwrap_err();
        assert!(matches!(err, ToolError::Walk { .. }));
    }
}
