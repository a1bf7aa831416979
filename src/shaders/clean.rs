use std::io::{self, Write};
use std::path::PathBuf;
use crate::error::ToolResult;
use crate::walker::{collect_files, FileFilter};

/// Compiled artifacts found (and removed unless dry run)
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,

    /// Files that could not be removed, with the reason
    pub failed: Vec<(PathBuf, String)>,
    pub dry_run: bool,
}

impl CleanReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if self.dry_run {
            for path in &self.removed {
                writeln!(out, "Would remove {}", path.display())?;
            }
            return writeln!(out, "Would remove {} compiled shader(s)", self.removed.len());
        }

        for (path, message) in &self.failed {
            writeln!(out, "Failed to remove {}: {}", path.display(), message)?;
        }
        writeln!(out, "Removed {} compiled shader(s)", self.removed.len())
    }
}

/// Delete every file under `roots` carrying the compiled `extension`
///
/// Every root is walked before anything is deleted, so a missing root
/// leaves the tree untouched. Files that cannot be removed are recorded
/// in the report and the rest are still cleaned.
pub fn clean_shaders(
    roots: &[PathBuf],
    extension: &str,
    dry_run: bool,
) -> ToolResult<CleanReport> {
    let filter = FileFilter::new(&[extension]);
    let mut artifacts = Vec::new();
    for root in roots {
        artifacts.extend(collect_files(root, &filter)?);
    }

    Ok(remove_artifacts(artifacts, dry_run))
}

/// Remove `paths`, carrying on past failures
pub fn remove_artifacts(paths: Vec<PathBuf>, dry_run: bool) -> CleanReport {
    let mut report = CleanReport {
        dry_run,
        ..CleanReport::default()
    };

    for path in paths {
        if dry_run {
            report.removed.push(path);
            continue;
        }

        match std::fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Removed {}", path.display());
                report.removed.push(path);
            }
            Err(e) => {
                log::warn!("Failed to remove {}: {}", path.display(), e);
                report.failed.push((path, e.to_string()));
            }
        }
    }

    report
}
