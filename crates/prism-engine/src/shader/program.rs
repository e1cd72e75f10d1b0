use std::fmt;

use super::info_log::InfoLog;
use super::stage::ShaderStage;

/// WGSL source text for both stages of a program.
#[derive(Debug, Copy, Clone)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

/// Outcome of compiling one stage.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompileStatus {
    Compiled,
    Failed(InfoLog),
}

/// A compiled stage. Consumed by [`link`], which drops the module afterwards.
pub struct CompiledShader {
    pub stage: ShaderStage,
    pub module: wgpu::ShaderModule,
    pub status: CompileStatus,
}

impl CompiledShader {
    pub fn is_compiled(&self) -> bool {
        self.status == CompileStatus::Compiled
    }
}

/// Fixed-function state the program is linked against.
#[derive(Debug, Clone)]
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub target_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
}

/// Linked program: a render pipeline that no longer references the stage modules.
#[derive(Debug)]
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

/// Which step of program construction a diagnostic belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BuildStep {
    Compile(ShaderStage),
    Link,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::Compile(stage) => write!(f, "{stage} shader compilation"),
            BuildStep::Link => f.write_str("shader program link"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShaderDiagnostic {
    pub step: BuildStep,
    pub log: InfoLog,
}

impl fmt::Display for ShaderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed:\n{}", self.step, self.log)
    }
}

/// Result of [`build_program`].
///
/// `program` is only present when both stages compiled and the link
/// succeeded; a pipeline built from an invalid module is never handed out.
#[derive(Debug)]
pub struct ProgramReport {
    pub program: Option<ShaderProgram>,
    pub diagnostics: Vec<ShaderDiagnostic>,
}

impl ProgramReport {
    pub fn is_usable(&self) -> bool {
        self.program.is_some()
    }

    pub fn failed(&self, step: BuildStep) -> bool {
        self.diagnostics.iter().any(|d| d.step == step)
    }
}

/// Runs `f` inside a validation error scope and returns whatever error it raised.
fn capture_validation<T>(
    device: &wgpu::Device,
    f: impl FnOnce() -> T,
) -> (T, Option<wgpu::Error>) {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = f();
    let error = pollster::block_on(scope.pop());
    (value, error)
}

/// Compiles one stage from WGSL source.
pub fn compile(device: &wgpu::Device, stage: ShaderStage, source: &str) -> CompiledShader {
    let (module, error) = capture_validation(device, || {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(stage.label()),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        })
    });

    let status = match error {
        None => CompileStatus::Compiled,
        Some(err) => CompileStatus::Failed(InfoLog::from_error(&err)),
    };

    CompiledShader {
        stage,
        module,
        status,
    }
}

/// Links both stages into a render pipeline.
///
/// The link is attempted even when a stage failed to compile, so its own
/// diagnostic is reported too. Both modules are dropped on return.
pub fn link(
    device: &wgpu::Device,
    vertex: CompiledShader,
    fragment: CompiledShader,
    desc: &ProgramDesc<'_>,
) -> (wgpu::RenderPipeline, Option<InfoLog>) {
    debug_assert_eq!(vertex.stage, ShaderStage::Vertex);
    debug_assert_eq!(fragment.stage, ShaderStage::Fragment);

    let (pipeline, error) = capture_validation(device, || {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &vertex.module,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: desc.vertex_buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment.module,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: desc.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    });

    drop(vertex);
    drop(fragment);

    (pipeline, error.map(|e| InfoLog::from_error(&e)))
}

/// Compiles both stages, links them and reports every failure at `error` level.
///
/// Failures are not fatal here; the caller decides what an unusable report means.
pub fn build_program(
    device: &wgpu::Device,
    sources: ShaderSources<'_>,
    desc: &ProgramDesc<'_>,
) -> ProgramReport {
    let mut diagnostics = Vec::new();

    let vertex = compile(device, ShaderStage::Vertex, sources.vertex);
    let fragment = compile(device, ShaderStage::Fragment, sources.fragment);

    for shader in [&vertex, &fragment] {
        if let CompileStatus::Failed(log) = &shader.status {
            diagnostics.push(ShaderDiagnostic {
                step: BuildStep::Compile(shader.stage),
                log: log.clone(),
            });
        }
    }

    let stages_ok = vertex.is_compiled() && fragment.is_compiled();
    let (pipeline, link_error) = link(device, vertex, fragment, desc);

    if let Some(log) = link_error {
        diagnostics.push(ShaderDiagnostic {
            step: BuildStep::Link,
            log,
        });
    }

    for d in &diagnostics {
        log::error!("{d}");
    }

    let program = (stages_ok && diagnostics.is_empty()).then(|| ShaderProgram { pipeline });
    if program.is_some() {
        log::debug!("linked shader program `{}`", desc.label);
    }

    ProgramReport {
        program,
        diagnostics,
    }
}
