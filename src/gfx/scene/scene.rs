use cgmath::{vec3, Point3, Vector3};
use log::{debug, info};

use crate::gfx::geometry::{
    furniture::{
        generate_book, generate_cabinet, generate_ceiling_lamp, generate_chair, generate_desk,
        generate_keyboard, generate_light_marker, generate_monitor,
    },
    room::{generate_ceiling, generate_door, generate_floor, generate_walls, generate_window},
    Rgb,
};

use super::object::{SceneObject, Shading};

/// Interior size of the room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 4.0,
            depth: 8.0,
        }
    }
}

/// Base colors for every piece in the room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub floor: Rgb,
    pub wall: Rgb,
    pub ceiling: Rgb,
    pub window_frame: Rgb,
    pub window_glass: Rgb,
    pub door: Rgb,
    pub desk: Rgb,
    pub chair: Rgb,
    pub monitor_frame: Rgb,
    pub keyboard: Rgb,
    pub cabinet: Rgb,
    pub lamp_bulb: Rgb,
    pub book_covers: [Rgb; 2],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            floor: vec3(0.6, 0.5, 0.4),
            wall: vec3(0.9, 0.88, 0.82),
            ceiling: vec3(0.95, 0.95, 0.95),
            window_frame: vec3(0.4, 0.3, 0.2),
            window_glass: vec3(0.6, 0.8, 0.95),
            door: vec3(0.5, 0.35, 0.2),
            desk: vec3(0.55, 0.4, 0.25),
            chair: vec3(0.15, 0.15, 0.15),
            monitor_frame: vec3(0.2, 0.2, 0.2),
            keyboard: vec3(0.15, 0.15, 0.15),
            cabinet: vec3(0.6, 0.45, 0.3),
            lamp_bulb: vec3(1.0, 0.95, 0.8),
            book_covers: [vec3(0.8, 0.2, 0.2), vec3(0.2, 0.4, 0.8)],
        }
    }
}

/// Collects scene objects in draw order
#[derive(Default)]
pub struct SceneBuilder {
    objects: Vec<SceneObject>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            objects: self.objects,
        }
    }
}

/// Ordered, fixed set of scene objects
///
/// Objects are drawn in insertion order. The set never changes after
/// construction; only transforms are updated between frames.
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Assemble the furnished workroom
    ///
    /// Furniture placements are literal world coordinates: the desk stands
    /// against the back wall, the chair faces it, and the monitor and
    /// keyboard rest on the desktop.
    pub fn furnished_room(
        room: RoomDimensions,
        palette: &Palette,
        light_position: Point3<f32>,
    ) -> Self {
        let RoomDimensions {
            width,
            height,
            depth,
        } = room;

        let scene = SceneBuilder::new()
            .add(SceneObject::new("floor", generate_floor(width, depth, palette.floor)))
            .add(SceneObject::new("walls", generate_walls(width, height, depth, palette.wall)))
            .add(SceneObject::new(
                "ceiling",
                generate_ceiling(width, depth, height, palette.ceiling),
            ))
            .add(
                SceneObject::new(
                    "window",
                    generate_window(palette.window_frame, palette.window_glass),
                )
                .at(0.0, 0.0, -depth / 2.0 + 0.01),
            )
            .add(
                SceneObject::new("door", generate_door(palette.door))
                    .at(width / 2.0 - 0.01, 0.0, 1.5)
                    .rotated(0.0, -90.0, 0.0),
            )
            .add(SceneObject::new("desk", generate_desk(palette.desk)).at(-2.5, 0.0, -3.6))
            .add(
                SceneObject::new("chair", generate_chair(palette.chair))
                    .at(-2.5, 0.0, -2.3)
                    .rotated(0.0, 180.0, 0.0),
            )
            .add(
                SceneObject::new("monitor", generate_monitor(palette.monitor_frame))
                    .at(-2.5, 0.78, -3.7),
            )
            .add(
                SceneObject::new("keyboard", generate_keyboard(palette.keyboard))
                    .at(-2.5, 0.78, -3.4),
            )
            .add(SceneObject::new("cabinet", generate_cabinet(palette.cabinet)).at(-4.0, 0.0, -3.5))
            .add(
                SceneObject::new("lamp", generate_ceiling_lamp(palette.lamp_bulb))
                    .at(0.0, height - 0.3, 0.0),
            )
            .add(
                SceneObject::new("book 1", generate_book(palette.book_covers[0]))
                    .at(-3.0, 0.795, -3.3)
                    .rotated(90.0, 15.0, 0.0),
            )
            .add(
                SceneObject::new("book 2", generate_book(palette.book_covers[1]))
                    .at(-3.0, 0.82, -3.3)
                    .rotated(90.0, -5.0, 0.0),
            )
            .add(
                SceneObject::new("light marker", generate_light_marker())
                    .at(light_position.x, light_position.y, light_position.z)
                    .with_shading(Shading::LightMarker),
            )
            .build();

        let stats = scene.get_statistics();
        info!(
            "Built room {}x{}x{}: {} objects, {} triangles",
            width, height, depth, stats.object_count, stats.total_triangles
        );

        scene
    }

    /// Initializes GPU resources for all objects
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &wgpu::Device, transform_layout: &wgpu::BindGroupLayout) {
        for object in self.objects.iter_mut() {
            object.upload(device, transform_layout);
        }

        let uploaded = self.objects.iter().filter(|object| object.is_uploaded()).count();
        debug!("Uploaded {} of {} objects", uploaded, self.objects.len());
    }

    /// Releases GPU resources for all objects
    pub fn release_gpu_resources(&mut self) {
        for object in self.objects.iter_mut() {
            object.release();
        }
    }

    /// Updates all object transforms and syncs to GPU
    pub fn update_all_transforms(&self, queue: &wgpu::Queue) {
        for object in &self.objects {
            object.update_transform(queue);
        }
    }

    /// Moves every light marker onto the light
    pub fn track_light(&mut self, light_position: Point3<f32>) {
        let position = Vector3::new(light_position.x, light_position.y, light_position.z);
        for object in self
            .objects
            .iter_mut()
            .filter(|object| object.shading == Shading::LightMarker)
        {
            object.position = position;
        }
    }

    /// Gets immutable reference to an object by name
    pub fn get_object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Gets all object names in draw order
    pub fn get_object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|object| object.name.as_str()).collect()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            total_vertices: self.objects.iter().map(|o| o.mesh().vertex_count()).sum(),
            total_triangles: self.objects.iter().map(|o| o.mesh().triangle_count()).sum(),
        }
    }
}

/// Scene statistics for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_vertices: usize,
    pub total_triangles: usize,
}
