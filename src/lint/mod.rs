/// Lint Aggregation
///
/// Runs clang-tidy over C++ sources and totals the diagnostics it prints.
/// Diagnostics are recognised purely by the `error:` and `warning:`
/// substrings in the linter's stdout.

pub mod pass;
pub mod summary;

pub use pass::{lint_targets, LintOutcome, LintPass, LintResult};
pub use summary::{write_result, LintSummary};

const ERROR_MARKER: &str = "error:";
const WARNING_MARKER: &str = "warning:";

/// Diagnostic totals for one lint pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl DiagnosticCounts {
    pub fn is_empty(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

/// Count non-overlapping `error:` and `warning:` occurrences in linter output
pub fn count_diagnostics(text: &str) -> DiagnosticCounts {
    DiagnosticCounts {
        errors: text.matches(ERROR_MARKER).count(),
        warnings: text.matches(WARNING_MARKER).count(),
    }
}
