//! # Workroom Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use workroom::prelude::*;
//!
//! let room = Scene::furnished_room(
//!     RoomDimensions::default(),
//!     &Palette::default(),
//!     Point3::new(0.0, 3.5, 0.0),
//! );
//! let desk = generate_desk(Vector3::new(0.55, 0.4, 0.25));
//! assert!(!desk.is_empty());
//! ViewerApp::new(ViewerConfig::default())?.run()?;
//! # Ok::<(), ViewerError>(())
//! ```

// Re-export core application types
pub use crate::app::ViewerApp;
pub use crate::config::ViewerConfig;
pub use crate::error::{Result, ViewerError};
pub use crate::frame::{FrameContext, FrameTimer};

// Re-export geometry and scene types
pub use crate::gfx::camera::{CameraManager, FlyCamera, ViewPreset};
pub use crate::gfx::geometry::{
    add_quad, furniture::*, generate_box, generate_frustum_fan, room::*, Mesh, Rgb,
};
pub use crate::gfx::lighting::{LightState, LightingPreset};
pub use crate::gfx::scene::{Palette, RoomDimensions, Scene, SceneObject, Shading, Vertex3D};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Point3, Vector3, Zero};
