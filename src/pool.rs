//! Worker pool for running external tools in parallel
//!
//! Results always come back in input order, so reports stay deterministic
//! however many threads run.

use rayon::prelude::*;
use crate::error::{ToolError, ToolResult};

/// Thread pool for external tool runs
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    threads: usize,
}

impl WorkerPool {
    pub fn new(threads: usize) -> ToolResult<Self> {
        let threads = threads.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("huedra-tools-worker-{}", i))
            .build()
            .map_err(|e| ToolError::ThreadPool { message: e.to_string() })?;

        log::debug!("Created worker pool with {} thread(s)", threads);
        Ok(Self { pool, threads })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Apply `f` to every item in parallel, keeping input order in the result
    pub fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        self.pool.install(|| items.par_iter().map(|item| f(item)).collect())
    }
}
