//! The fixed content: one triangle and the shader pair that draws it.

use prism_engine::geometry::Vertex;
use prism_engine::shader::ShaderSources;

pub const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert.wgsl");
pub const FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag.wgsl");

pub const SOURCES: ShaderSources<'static> = ShaderSources {
    vertex: VERTEX_SHADER,
    fragment: FRAGMENT_SHADER,
};

/// Counter-clockwise, centered, in NDC.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(0.0, 0.5, 0.0),
];
