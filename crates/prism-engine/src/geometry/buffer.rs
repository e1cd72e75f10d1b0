use wgpu::util::DeviceExt;

use super::vertex::Vertex;

/// Immutable vertex buffer, initialised once at creation.
///
/// Created without `COPY_DST`, so the device rejects any later write.
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexBuffer {
    pub fn upload(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("uploaded {} vertices to `{label}`", vertices.len());

        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::headless_device;

    #[test]
    fn upload_holds_every_vertex() {
        let Some((device, _queue)) = headless_device() else { return };

        let verts = [
            Vertex::new(-0.5, -0.5, 0.0),
            Vertex::new(0.5, -0.5, 0.0),
            Vertex::new(0.0, 0.5, 0.0),
        ];
        let vb = VertexBuffer::upload(&device, "test vbo", &verts);

        assert_eq!(vb.vertex_count(), 3);
        assert_eq!(vb.buffer.size(), 9 * 4);
        assert_eq!(vb.buffer.usage(), wgpu::BufferUsages::VERTEX);
    }
}
