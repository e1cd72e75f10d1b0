//! Helpers for tests that need a real device.

use crate::shader::ShaderSources;

pub(crate) const VERTEX_WGSL: &str = "\
@vertex
fn vs_main(@location(0) a_pos: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(a_pos, 1.0);
}
";

pub(crate) const FRAGMENT_WGSL: &str = "\
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.5, 0.2, 1.0);
}
";

pub(crate) const GOOD_SOURCES: ShaderSources<'static> = ShaderSources {
    vertex: VERTEX_WGSL,
    fragment: FRAGMENT_WGSL,
};

/// Target format the device tests link against; no surface is involved.
pub(crate) const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Creates a surface-less device, or `None` when the machine has no adapter.
///
/// Callers return early on `None` so the suite still passes without a GPU.
pub(crate) fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = match pollster::block_on(instance.request_adapter(
        &wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        },
    )) {
        Ok(adapter) => adapter,
        Err(err) => {
            eprintln!("no adapter, skipping device test: {err}");
            return None;
        }
    };

    pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some("prism test device"),
        required_features: wgpu::Features::empty(),
        required_limits: adapter.limits(),
        experimental_features: wgpu::ExperimentalFeatures::disabled(),
        memory_hints: wgpu::MemoryHints::default(),
        trace: wgpu::Trace::Off,
    }))
    .ok()
}
