//! Core rendering abstractions for roll-paper documents.
//!
//! This crate provides:
//! - the `DrawingSurface` trait, the primitive set a printer backend exposes
//! - the `DocumentRenderer`, which walks a layout template and draws it
//! - `RecordingSurface`, an instrumented surface for dry inspection and tests

mod error;
pub mod recording;
mod renderer;
mod traits;
mod types;

pub use error::RenderError;
pub use recording::{DrawOp, RecordingSurface};
pub use renderer::DocumentRenderer;
pub use traits::DrawingSurface;
pub use types::{Primitive, TextAlign};
