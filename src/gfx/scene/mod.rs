//! # Scene Management Module
//!
//! Holds the fixed, ordered set of objects that make up the room. Each
//! [`SceneObject`] owns its mesh, a position/rotation/scale transform, and
//! the GPU buffers created when the scene is uploaded.
//!
//! ## Key Components
//!
//! - [`Scene`] - Ordered object list, drawn in insertion order
//! - [`SceneObject`] - A named mesh with a `T * Rx * Ry * Rz * S` model matrix
//! - [`SceneBuilder`] - Builder used to assemble a scene
//! - [`Vertex3D`] - Position, normal and color, 36 bytes per vertex
//!
//! ## Usage
//!
//! ```no_run
//! use cgmath::Point3;
//! use workroom::gfx::scene::{Palette, RoomDimensions, Scene};
//!
//! let scene = Scene::furnished_room(
//!     RoomDimensions::default(),
//!     &Palette::default(),
//!     Point3::new(0.0, 3.5, 0.0),
//! );
//! assert_eq!(scene.objects.len(), 14);
//! ```

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, ObjectUniform, SceneObject, Shading};
pub use scene::{Palette, RoomDimensions, Scene, SceneBuilder, SceneStatistics};
pub use vertex::Vertex3D;
