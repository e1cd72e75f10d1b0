use prism_engine::device::GpuInit;
use prism_engine::logging::LoggingConfig;
use prism_engine::paint::Color;
use prism_engine::window::RuntimeConfig;

/// What to do when the shader program cannot be built.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderFailurePolicy {
    /// Keep the window open and the loop running; frames show only the clear color.
    Continue,
    /// Close the loop and exit with status -1.
    Abort,
}

impl ShaderFailurePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Abort } else { Self::Continue }
    }
}

impl Default for ShaderFailurePolicy {
    /// `Continue`, unless built with the `strict-shaders` feature.
    fn default() -> Self {
        Self::from_strict(cfg!(feature = "strict-shaders"))
    }
}

/// Everything the program is configured with. There is no config file or CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    pub clear_color: Color,
    pub shader_failure: ShaderFailurePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: "prism triangle".to_string(),
                ..Default::default()
            },
            gpu: GpuInit::default(),
            logging: LoggingConfig::default(),
            clear_color: Color::rgba(0.2, 0.3, 0.3, 1.0),
            shader_failure: ShaderFailurePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_scene() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.runtime.initial_size.width, 800.0);
        assert_eq!(cfg.runtime.initial_size.height, 600.0);
        assert_eq!(cfg.clear_color.to_rgba8(), [51, 77, 77, 255]);
        assert!(!cfg.gpu.prefer_srgb);
        assert_eq!(
            cfg.shader_failure == ShaderFailurePolicy::Abort,
            cfg!(feature = "strict-shaders")
        );
    }

    #[test]
    fn strict_builds_abort_on_shader_failure() {
        assert_eq!(ShaderFailurePolicy::from_strict(true), ShaderFailurePolicy::Abort);
        assert_eq!(ShaderFailurePolicy::from_strict(false), ShaderFailurePolicy::Continue);
    }
}
