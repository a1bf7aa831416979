//! Tool configuration
//!
//! Loaded from `huedra-tools.toml`. Every key is optional; anything missing
//! falls back to the defaults below, which drive `glslangValidator` and
//! `clang-tidy` the way the engine tree expects.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{ErrorContext, ToolError, ToolResult};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "huedra-tools.toml";

/// Shader compiler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// GLSL to SPIR-V compiler executable
    pub compiler: String,

    /// Arguments placed before the source path
    pub compiler_args: Vec<String>,

    /// Extension appended to each source path for the compiled artifact
    pub output_extension: String,

    /// Extensions that are never handed to the compiler
    pub skip_extensions: Vec<String>,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            compiler: "glslangValidator".to_string(),
            compiler_args: vec!["-V".to_string()],
            output_extension: "spv".to_string(),
            skip_extensions: vec!["py".to_string(), "toml".to_string()],
        }
    }
}

/// Linter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Linter executable
    pub tool: String,

    /// Build directory holding `compile_commands.json`
    pub build_dir: PathBuf,

    /// Extensions of files to lint
    pub extensions: Vec<String>,

    /// Ask the linter for colored diagnostics
    pub use_color: bool,

    /// Extra arguments placed before `-p`
    pub extra_args: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            tool: "clang-tidy".to_string(),
            build_dir: PathBuf::from("build"),
            extensions: vec!["hpp".to_string(), "cpp".to_string()],
            use_color: true,
            extra_args: Vec::new(),
        }
    }
}

/// Top level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub shaders: ShaderConfig,
    pub lint: LintConfig,

    /// Worker threads for external tool runs, 0 for one per logical CPU
    pub jobs: usize,
}

impl ToolsConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(raw: &str, origin: &Path) -> ToolResult<Self> {
        let config: ToolsConfig = toml::from_str(raw).map_err(|e| ToolError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> ToolResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).io_context(path)?;
        let config = Self::from_toml(&raw, path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `huedra-tools.toml` in the
    /// working directory is used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> ToolResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = Path::new(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            Self::load(implicit)
        } else {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Number of worker threads to use
    pub fn worker_count(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        }
    }

    fn validate(&self, origin: &Path) -> ToolResult<()> {
        let invalid = |message: &str| ToolError::Config {
            path: origin.to_path_buf(),
            message: message.to_string(),
        };

        if self.shaders.compiler.trim().is_empty() {
            return Err(invalid("shaders.compiler must not be empty"));
        }
        if self.shaders.output_extension.trim().is_empty() {
            return Err(invalid("shaders.output_extension must not be empty"));
        }
        if self.lint.tool.trim().is_empty() {
            return Err(invalid("lint.tool must not be empty"));
        }
        if self.lint.extensions.is_empty() {
            return Err(invalid("lint.extensions must list at least one extension"));
        }
        Ok(())
    }
}
