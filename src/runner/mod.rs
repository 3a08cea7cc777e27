//! Bootstrap orchestration.

pub mod pipeline;

pub use pipeline::{Pipeline, PipelineResult};
