//! External tool invocation
//!
//! The compiler and the linter are driven through the `ToolRunner` trait so
//! the orchestration code can be exercised without the real binaries.

use std::fmt;
use std::path::Path;
use std::process::Command;
use crate::error::{spawn_error, ToolResult};

/// A single external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy().into_owned())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of an external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands
pub trait ToolRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> ToolResult<ToolOutput>;
}

/// Runs commands as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> ToolResult<ToolOutput> {
        log::trace!("Spawning: {}", invocation);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| spawn_error(&invocation.program, e))?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    #[test]
    fn test_invocation_display() {
        let invocation = Invocation::new("glslangValidator")
            .arg("-V")
            .path_arg(Path::new("./basic.vert"))
            .args(["-o", "./basic.vert.spv"]);

        assert_eq!(
            invocation.to_string(),
            "glslangValidator -V ./basic.vert -o ./basic.vert.spv"
        );
    }

    #[test]
    fn test_output_success() {
        let ok = ToolOutput { code: Some(0), ..Default::default() };
        let failed = ToolOutput { code: Some(2), ..Default::default() };
        let killed = ToolOutput { code: None, ..Default::default() };

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let invocation = Invocation::new("huedra-tools-definitely-not-installed").arg("--help");
        let err = SystemRunner.run(&invocation).unwrap_err();

        match err {
            ToolError::Spawn { program, .. } => {
                assert_eq!(program, "huedra-tools-definitely-not-installed")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_output() {
        let invocation = Invocation::new("sh")
            .arg("-c")
            .arg("echo 'warning: unused'; echo oops >&2; exit 3");
        let output = SystemRunner.run(&invocation).expect("sh should be available");

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, "warning: unused\n");
        assert_eq!(output.stderr, "oops\n");
    }
}
