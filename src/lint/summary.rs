use std::io::{self, Write};
use crate::style::Palette;
use super::{LintOutcome, LintResult};

/// Totals across every linted file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    /// Flagged files, each counted once
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,

    /// Linter runs that exited non-zero or were killed
    pub failed_runs: usize,
    pub spawn_failures: usize,
}

impl LintSummary {
    pub fn from_results(results: &[LintResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(&result.outcome);
        }
        summary
    }

    pub fn record(&mut self, outcome: &LintOutcome) {
        match outcome {
            LintOutcome::Clean => {}
            LintOutcome::Flagged { exit_failed, counts, .. } => {
                self.files += 1;
                if *exit_failed {
                    self.failed_runs += 1;
                }
                self.errors += counts.errors;
                self.warnings += counts.warnings;
            }
            LintOutcome::SpawnFailed { .. } => self.spawn_failures += 1,
        }
    }

    /// Process exit code for this run
    pub fn exit_code(&self, warnings_as_errors: bool) -> u8 {
        let failed = self.errors > 0
            || self.failed_runs > 0
            || self.spawn_failures > 0
            || (warnings_as_errors && self.warnings > 0);
        if failed {
            1
        } else {
            0
        }
    }

    /// Final totals line
    pub fn write_to(&self, out: &mut impl Write, palette: &Palette) -> io::Result<()> {
        if self.files != 0 {
            writeln!(
                out,
                "Found {} {} and {} {} in {} file(s)",
                self.errors,
                palette.error("error(s)"),
                self.warnings,
                palette.warning("warning(s)"),
                self.files
            )?;
        } else {
            writeln!(out, "{}", palette.success("0 errors/warnings found!"))?;
        }

        if self.failed_runs != 0 {
            writeln!(
                out,
                "{} linter run(s) exited unsuccessfully",
                palette.error(&self.failed_runs.to_string())
            )?;
        }
        if self.spawn_failures != 0 {
            writeln!(
                out,
                "{} file(s) could not be linted",
                palette.error(&self.spawn_failures.to_string())
            )?;
        }
        Ok(())
    }
}

/// Per-file section: header, what was found and the linter output
pub fn write_result(
    out: &mut impl Write,
    result: &LintResult,
    tool: &str,
    palette: &Palette,
) -> io::Result<()> {
    let header = format!("{}:", result.path.display());
    writeln!(out, "{}", palette.heading(&header))?;

    match &result.outcome {
        LintOutcome::Clean => {}
        LintOutcome::Flagged { exit_failed, counts, output } => {
            if *exit_failed {
                writeln!(out, "Found {} running {}:", palette.error("errors"), tool)?;
            }
            if counts.warnings != 0 {
                writeln!(out, "Found {} running {}:", palette.warning("warnings"), tool)?;
            }
            writeln!(out, "{}", output.trim_end())?;
        }
        LintOutcome::SpawnFailed { message } => {
            writeln!(out, "Failed to run {} on path: {}", tool, result.path.display())?;
            writeln!(out, "{}", message)?;
        }
    }
    Ok(())
}
