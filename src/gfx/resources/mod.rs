//! GPU resource management
//!
//! Global uniforms, per-object bind group layout and the depth buffer.

pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{
    create_object_bind_group_layout, update_global_ubo, GlobalBindings, GlobalUBO,
    GlobalUBOContent,
};
pub use texture_resource::TextureResource;
