/// Shader Tooling
///
/// Compiles GLSL sources found under a directory tree to SPIR-V through an
/// external compiler, and removes the compiled artifacts again.

pub mod compile;
pub mod clean;

pub use compile::{
    compile_shaders, compiler_invocation, output_path, CompileReport, ShaderOutcome, ShaderResult,
};
pub use clean::{clean_shaders, remove_artifacts, CleanReport};
