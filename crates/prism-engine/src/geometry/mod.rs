//! Vertex data and its device-side storage.

mod buffer;
mod vertex;

pub use buffer::VertexBuffer;
pub use vertex::Vertex;
