//! Build helpers for the Huedra engine tree
//!
//! `compile-shaders`, `clean-shaders` and `tidy` are thin binaries over this
//! library: each walks a directory tree, hands matching files to an
//! external tool and reports totals through its exit code.

pub mod config;
pub mod error;
pub mod external;
pub mod lint;
pub mod logging;
pub mod pool;
pub mod shaders;
pub mod style;
pub mod walker;

pub use config::{LintConfig, ShaderConfig, ToolsConfig};
pub use error::{ToolError, ToolResult};
pub use external::{Invocation, SystemRunner, ToolOutput, ToolRunner};
pub use pool::WorkerPool;
pub use style::Palette;
pub use walker::{collect_files, FileFilter};

/// Exit code when every file was processed cleanly
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when at least one file failed
pub const EXIT_FAILURE: u8 = 1;

/// Exit code when the run could not start (bad arguments, config or paths)
pub const EXIT_SETUP_ERROR: u8 = 2;
