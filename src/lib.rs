//! Workroom viewer
//!
//! Builds a furnished room out of procedural meshes and lets you fly
//! through it under a single Phong-lit point light, rendered with wgpu.

pub mod app;
pub mod config;
pub mod error;
pub mod frame;
pub mod gfx;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewerApp;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
