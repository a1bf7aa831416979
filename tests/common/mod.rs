//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use huedra_tools::{Invocation, ToolOutput, ToolResult, ToolRunner};

/// Runner that answers from a closure and records every invocation
pub struct ScriptedRunner<F> {
    respond: F,
    calls: Mutex<Vec<Invocation>>,
}

impl<F> ScriptedRunner<F>
where
    F: Fn(&Invocation) -> ToolResult<ToolOutput> + Send + Sync,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recorded invocations, sorted so parallel runs compare deterministically
    pub fn calls(&self) -> Vec<Invocation> {
        let mut calls = self.calls.lock().expect("Runner call log poisoned").clone();
        calls.sort_by(|a, b| a.args.cmp(&b.args));
        calls
    }
}

impl<F> ToolRunner for ScriptedRunner<F>
where
    F: Fn(&Invocation) -> ToolResult<ToolOutput> + Send + Sync,
{
    fn run(&self, invocation: &Invocation) -> ToolResult<ToolOutput> {
        self.calls
            .lock()
            .expect("Runner call log poisoned")
            .push(invocation.clone());
        (self.respond)(invocation)
    }
}

pub fn output(code: i32, stdout: &str) -> ToolOutput {
    ToolOutput {
        code: Some(code),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Write `files` (relative path, contents) under `root`
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
    }
}
