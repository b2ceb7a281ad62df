//! # Graphics Module
//!
//! Everything between the mesh generators and the screen.
//!
//! - **Geometry** ([`geometry`]) - Procedural meshes for the room and furniture
//! - **Scene Management** ([`scene`]) - Placed objects in a fixed draw order
//! - **Camera System** ([`camera`]) - Free-flying first-person camera and its input
//! - **Lighting** ([`lighting`]) - Point light state and Phong presets
//! - **Rendering Pipeline** ([`rendering`]) - Phong and light marker programs
//! - **Resource Management** ([`resources`]) - Global uniforms and the depth buffer
//!
//! ```no_run
//! use workroom::gfx::{camera::FlyCamera, scene::{Palette, RoomDimensions, Scene}};
//!
//! let scene = Scene::furnished_room(
//!     RoomDimensions::default(),
//!     &Palette::default(),
//!     cgmath::Point3::new(0.0, 3.5, 0.0),
//! );
//! let camera = FlyCamera::default();
//! // The render engine is created by ViewerApp once a window exists
//! ```

pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::FlyCamera;
pub use rendering::render_engine::RenderEngine;
