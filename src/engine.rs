//! Batch rendering engine

pub mod batch;

pub use batch::{BatchRenderer, BatchResult, RenderedValue, render_with};
