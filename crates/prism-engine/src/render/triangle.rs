use crate::geometry::{Vertex, VertexBuffer};
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{self, ProgramDesc, ShaderDiagnostic, ShaderProgram, ShaderSources};

/// Draws a fixed, non-indexed triangle list with one program.
///
/// All GPU state is created once in [`TriangleRenderer::new`] and never
/// mutated afterwards. If the program failed to build, `draw` records nothing
/// and the frame shows only the clear color.
pub struct TriangleRenderer {
    program: Option<ShaderProgram>,
    geometry: VertexBuffer,
    diagnostics: Vec<ShaderDiagnostic>,
}

impl TriangleRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        sources: ShaderSources<'_>,
        vertices: &[Vertex],
    ) -> Self {
        let report = shader::build_program(
            device,
            sources,
            &ProgramDesc {
                label: "prism triangle pipeline",
                vertex_buffers: &[Vertex::layout()],
                target_format: surface_format,
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );

        let geometry = VertexBuffer::upload(device, "prism triangle vbo", vertices);

        Self {
            program: report.program,
            geometry,
            diagnostics: report.diagnostics,
        }
    }

    /// `false` when compilation or linking failed.
    pub fn is_usable(&self) -> bool {
        self.program.is_some()
    }

    pub fn diagnostics(&self) -> &[ShaderDiagnostic] {
        &self.diagnostics
    }

    /// Records one draw of every vertex, starting at index 0.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let Some(program) = self.program.as_ref() else { return };

        let vp = ctx.viewport;
        if !vp.is_valid() {
            return;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("prism triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(vp.x, vp.y, vp.width, vp.height, 0.0, 1.0);
        rpass.set_pipeline(program.pipeline());
        rpass.set_vertex_buffer(0, self.geometry.slice());
        rpass.draw(0..self.geometry.vertex_count(), 0..1);
    }
}
