//! Color values passed to the GPU.

mod color;

pub use color::Color;
