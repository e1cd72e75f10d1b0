//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources and record into a [`RenderTarget`]
//! after the frame's clear pass.

mod ctx;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
