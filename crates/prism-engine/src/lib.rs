//! Prism engine crate.
//!
//! Owns the platform + GPU runtime pieces the triangle program is built from:
//! window/event loop, graphics context, shader compile/link, vertex upload.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;

#[cfg(test)]
mod test_support;
