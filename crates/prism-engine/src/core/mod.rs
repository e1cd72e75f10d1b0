//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: the `App` trait, the per-frame context and the loop state.

mod app;
mod ctx;
mod state;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use state::LoopState;
