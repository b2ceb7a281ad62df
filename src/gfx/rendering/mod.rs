//! Core rendering functionality
//!
//! Handles render pipelines, shader sources and frame rendering.

pub mod pipeline_manager;
pub mod render_engine;
pub mod shaders;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager, PipelineStats};
pub use render_engine::RenderEngine;
pub use shaders::ShaderSources;
