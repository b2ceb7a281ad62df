//! Error types for the workroom viewer
//!
//! Only environment setup and shader handling can fail. Mesh generation and
//! transform composition work on literal inputs and have no error paths.

use std::path::PathBuf;

/// Errors raised while bringing up the window, the GPU or the shaders.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("failed to create or run the event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the window")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create the rendering surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open the GPU device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("the window surface is not supported by the GPU adapter")]
    UnsupportedSurface,

    #[error("failed to acquire the next frame")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("failed to read shader source {path:?}")]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader '{name}' failed to compile:\n{message}")]
    ShaderCompile { name: String, message: String },

    #[error("failed to create render pipeline '{name}': {message}")]
    Pipeline { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
