//! Runtime shader compilation and program linking.
//!
//! Each stage is compiled into its own `wgpu::ShaderModule`; linking builds
//! the render pipeline from both. Device validation errors are captured with
//! error scopes and turned into bounded info logs instead of reaching the
//! uncaptured-error handler.

mod info_log;
mod program;
mod stage;

pub use info_log::{InfoLog, INFO_LOG_CAPACITY};
pub use program::{
    build_program, compile, link, BuildStep, CompileStatus, CompiledShader, ProgramDesc,
    ProgramReport, ShaderDiagnostic, ShaderProgram, ShaderSources,
};
pub use stage::ShaderStage;
