//! Room shell generators: floor, walls, ceiling, window, door and rug.
//!
//! The room is centered on the origin in X and Z with the floor at `y = 0`.
//! Wall openings are not cut out of boxes. Each punctured wall is tiled with
//! rectangles that leave the opening's footprint empty, and the opening
//! extents below are fixed literals.

use cgmath::{vec3, Vector3};

use super::{add_quad, generate_box, Mesh, Rgb};

/// Number of tiles along each side of the checkerboard floor
pub const FLOOR_TILES: u32 = 8;

/// Window opening in the back wall: x in `[-1.5, 1.5]`, y in `[0.8, 2.5]`
pub const WINDOW_HALF_WIDTH: f32 = 1.5;
pub const WINDOW_SILL_HEIGHT: f32 = 0.8;
pub const WINDOW_HEAD_HEIGHT: f32 = 2.5;

/// Door opening in the right wall: z in `[1.0, 2.0]`, y in `[0.0, 2.2]`
pub const DOOR_OPENING_NEAR_Z: f32 = 1.0;
pub const DOOR_OPENING_FAR_Z: f32 = 2.0;
pub const DOOR_HEIGHT: f32 = 2.2;

/// Side walls are shaded slightly darker than the back wall
const SIDE_WALL_SHADE: f32 = 0.95;

/// Checkerboard floor at `y = 0`
///
/// Splits `width x depth` into an 8x8 grid. Tile `(i, j)` (column along X,
/// row along Z) uses `color` when `(i + j)` is even and 70% of it otherwise.
pub fn generate_floor(width: f32, depth: f32, color: Rgb) -> Mesh {
    let mut mesh = Mesh::with_capacity((FLOOR_TILES * FLOOR_TILES * 6) as usize);
    let w = width / 2.0;
    let d = depth / 2.0;
    let tile_w = width / FLOOR_TILES as f32;
    let tile_d = depth / FLOOR_TILES as f32;

    for i in 0..FLOOR_TILES {
        for j in 0..FLOOR_TILES {
            let x1 = -w + i as f32 * tile_w;
            let x2 = x1 + tile_w;
            let z1 = -d + j as f32 * tile_d;
            let z2 = z1 + tile_d;

            let tile_color = if (i + j) % 2 == 0 { color } else { color * 0.7 };

            add_quad(
                &mut mesh,
                [vec3(x1, 0.0, z2), vec3(x2, 0.0, z2), vec3(x2, 0.0, z1), vec3(x1, 0.0, z1)],
                Vector3::unit_y(),
                tile_color,
            );
        }
    }

    mesh
}

/// Back, left and right walls, all facing into the room
///
/// The back wall (`z = -depth/2`) is punctured by the window opening and the
/// right wall (`x = width/2`) by the door opening. There is no front wall.
pub fn generate_walls(width: f32, height: f32, depth: f32, color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();
    let w = width / 2.0;
    let d = depth / 2.0;
    let into_room = Vector3::unit_z();
    let ww = WINDOW_HALF_WIDTH;

    // Back wall, left of the window
    add_quad(
        &mut mesh,
        [vec3(-w, 0.0, -d), vec3(-ww, 0.0, -d), vec3(-ww, height, -d), vec3(-w, height, -d)],
        into_room,
        color,
    );

    // Back wall, right of the window
    add_quad(
        &mut mesh,
        [vec3(ww, 0.0, -d), vec3(w, 0.0, -d), vec3(w, height, -d), vec3(ww, height, -d)],
        into_room,
        color,
    );

    // Back wall, above the window
    add_quad(
        &mut mesh,
        [
            vec3(-ww, WINDOW_HEAD_HEIGHT, -d),
            vec3(ww, WINDOW_HEAD_HEIGHT, -d),
            vec3(ww, height, -d),
            vec3(-ww, height, -d),
        ],
        into_room,
        color,
    );

    // Back wall, below the window
    add_quad(
        &mut mesh,
        [
            vec3(-ww, 0.0, -d),
            vec3(ww, 0.0, -d),
            vec3(ww, WINDOW_SILL_HEIGHT, -d),
            vec3(-ww, WINDOW_SILL_HEIGHT, -d),
        ],
        into_room,
        color,
    );

    let side_color = color * SIDE_WALL_SHADE;

    // Left wall
    add_quad(
        &mut mesh,
        [vec3(-w, 0.0, d), vec3(-w, 0.0, -d), vec3(-w, height, -d), vec3(-w, height, d)],
        Vector3::unit_x(),
        side_color,
    );

    let into_room = -Vector3::unit_x();
    let near = DOOR_OPENING_NEAR_Z;
    let far = DOOR_OPENING_FAR_Z;

    // Right wall, above the door, out to the front edge
    add_quad(
        &mut mesh,
        [
            vec3(w, DOOR_HEIGHT, near),
            vec3(w, DOOR_HEIGHT, d),
            vec3(w, height, d),
            vec3(w, height, near),
        ],
        into_room,
        side_color,
    );

    // Right wall, behind the door
    add_quad(
        &mut mesh,
        [vec3(w, 0.0, -d), vec3(w, 0.0, near), vec3(w, height, near), vec3(w, height, -d)],
        into_room,
        side_color,
    );

    // Right wall, in front of the door
    add_quad(
        &mut mesh,
        [vec3(w, 0.0, far), vec3(w, 0.0, d), vec3(w, height, d), vec3(w, height, far)],
        into_room,
        side_color,
    );

    // Right wall, lintel strip directly over the opening
    add_quad(
        &mut mesh,
        [
            vec3(w, DOOR_HEIGHT, near),
            vec3(w, DOOR_HEIGHT, far),
            vec3(w, height, far),
            vec3(w, height, near),
        ],
        into_room,
        side_color,
    );

    mesh
}

/// Flat ceiling at `y = height`, facing down
pub fn generate_ceiling(width: f32, depth: f32, height: f32, color: Rgb) -> Mesh {
    let mut mesh = Mesh::with_capacity(6);
    let w = width / 2.0;
    let d = depth / 2.0;

    add_quad(
        &mut mesh,
        [vec3(-w, height, -d), vec3(w, height, -d), vec3(w, height, d), vec3(-w, height, d)],
        -Vector3::unit_y(),
        color,
    );

    mesh
}

/// Window frame and pane, in the plane `z = 0` facing +Z
///
/// Sized to fill the back wall opening exactly. Place it just in front of
/// the back wall. The pane sits 1cm behind the frame bars.
pub fn generate_window(frame_color: Rgb, glass_color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();
    let normal = Vector3::unit_z();
    let ww = WINDOW_HALF_WIDTH;
    let sill = WINDOW_SILL_HEIGHT;
    let head = WINDOW_HEAD_HEIGHT;
    let bar = 0.1;

    // Top rail
    add_quad(
        &mut mesh,
        [vec3(-ww, head - bar, 0.0), vec3(ww, head - bar, 0.0), vec3(ww, head, 0.0), vec3(-ww, head, 0.0)],
        normal,
        frame_color,
    );

    // Bottom rail
    add_quad(
        &mut mesh,
        [vec3(-ww, sill, 0.0), vec3(ww, sill, 0.0), vec3(ww, sill + bar, 0.0), vec3(-ww, sill + bar, 0.0)],
        normal,
        frame_color,
    );

    // Left stile
    add_quad(
        &mut mesh,
        [vec3(-ww, sill, 0.0), vec3(-ww + bar, sill, 0.0), vec3(-ww + bar, head, 0.0), vec3(-ww, head, 0.0)],
        normal,
        frame_color,
    );

    // Right stile
    add_quad(
        &mut mesh,
        [vec3(ww - bar, sill, 0.0), vec3(ww, sill, 0.0), vec3(ww, head, 0.0), vec3(ww - bar, head, 0.0)],
        normal,
        frame_color,
    );

    // Center mullion
    add_quad(
        &mut mesh,
        [vec3(-0.05, sill, 0.0), vec3(0.05, sill, 0.0), vec3(0.05, head, 0.0), vec3(-0.05, head, 0.0)],
        normal,
        frame_color,
    );

    // Center transom
    add_quad(
        &mut mesh,
        [vec3(-ww, 1.6, 0.0), vec3(ww, 1.6, 0.0), vec3(ww, 1.7, 0.0), vec3(-ww, 1.7, 0.0)],
        normal,
        frame_color,
    );

    // Glass
    add_quad(
        &mut mesh,
        [
            vec3(-ww + bar, sill + bar, -0.01),
            vec3(ww - bar, sill + bar, -0.01),
            vec3(ww - bar, head - bar, -0.01),
            vec3(-ww + bar, head - bar, -0.01),
        ],
        normal,
        glass_color,
    );

    mesh
}

/// Door leaf with a handle and two inset panels
///
/// The leaf is 1.0 wide, 2.2 tall and 5cm thick, standing on `y = 0` and
/// centered on `x = 0`. Its front faces +Z.
pub fn generate_door(color: Rgb) -> Mesh {
    let mut mesh = Mesh::new();
    let door_width = 1.0;
    let door_depth = 0.05;

    mesh.append_offset(
        generate_box(door_width, DOOR_HEIGHT, door_depth, color),
        vec3(0.0, DOOR_HEIGHT / 2.0, 0.0),
    );

    let handle_color = vec3(0.8, 0.7, 0.2);
    mesh.append_offset(
        generate_box(0.05, 0.15, 0.08, handle_color),
        vec3(0.35, 1.1, 0.05),
    );

    let panel_color = color * 0.8;
    let normal = Vector3::unit_z();

    // Upper panel
    add_quad(
        &mut mesh,
        [vec3(-0.35, 1.4, 0.03), vec3(0.25, 1.4, 0.03), vec3(0.25, 2.0, 0.03), vec3(-0.35, 2.0, 0.03)],
        normal,
        panel_color,
    );

    // Lower panel
    add_quad(
        &mut mesh,
        [vec3(-0.35, 0.2, 0.03), vec3(0.25, 0.2, 0.03), vec3(0.25, 1.2, 0.03), vec3(-0.35, 1.2, 0.03)],
        normal,
        panel_color,
    );

    mesh
}

/// Rug lying just above the floor, with darker border strips front and back
pub fn generate_rug(width: f32, depth: f32, color: Rgb) -> Mesh {
    let mut mesh = Mesh::with_capacity(18);
    let w = width / 2.0;
    let d = depth / 2.0;
    let up = Vector3::unit_y();
    let border = 0.1;
    let border_color = color * 0.7;

    add_quad(
        &mut mesh,
        [vec3(-w, 0.01, d), vec3(w, 0.01, d), vec3(w, 0.01, -d), vec3(-w, 0.01, -d)],
        up,
        color,
    );

    // Front border
    add_quad(
        &mut mesh,
        [vec3(-w, 0.012, d), vec3(w, 0.012, d), vec3(w, 0.012, d - border), vec3(-w, 0.012, d - border)],
        up,
        border_color,
    );

    // Back border
    add_quad(
        &mut mesh,
        [vec3(-w, 0.012, -d + border), vec3(w, 0.012, -d + border), vec3(w, 0.012, -d), vec3(-w, 0.012, -d)],
        up,
        border_color,
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::reversed_triangles;
    use cgmath::InnerSpace;

    const EPSILON: f32 = 1e-4;

    fn approx(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPSILON
    }

    fn room_parts() -> Vec<(&'static str, Mesh)> {
        let plaster = vec3(0.9, 0.88, 0.82);
        vec![
            ("floor", generate_floor(10.0, 8.0, vec3(0.6, 0.5, 0.4))),
            ("walls", generate_walls(10.0, 4.0, 8.0, plaster)),
            ("ceiling", generate_ceiling(10.0, 8.0, 4.0, plaster)),
            ("window", generate_window(vec3(0.4, 0.3, 0.2), vec3(0.6, 0.8, 0.95))),
            ("door", generate_door(vec3(0.5, 0.35, 0.2))),
            ("rug", generate_rug(3.0, 2.0, vec3(0.6, 0.2, 0.2))),
        ]
    }

    #[test]
    fn test_room_parts_have_unit_normals() {
        for (name, mesh) in room_parts() {
            assert_eq!(mesh.vertex_count() % 3, 0, "{name} is not a triangle list");
            for vertex in mesh.vertices() {
                let length = vertex.normal().magnitude();
                assert!((length - 1.0).abs() < EPSILON, "{name} has a normal of length {length}");
            }
        }
    }

    #[test]
    fn test_room_parts_wind_counter_clockwise() {
        for (name, mesh) in room_parts() {
            let reversed = reversed_triangles(&mesh);
            assert!(reversed.is_empty(), "{name} has triangles wound against their normals: {reversed:?}");
        }
    }

    /// Color of the tile whose first vertex is the `(x1, z2)` corner
    fn tile_color(floor: &Mesh, column: u32, row: u32) -> Vector3<f32> {
        let index = ((column * FLOOR_TILES + row) * 6) as usize;
        floor.vertices()[index].color()
    }

    #[test]
    fn test_floor_checkerboard() {
        let base = vec3(0.6, 0.5, 0.4);
        let floor = generate_floor(10.0, 8.0, base);
        assert_eq!(floor.vertex_count(), 8 * 8 * 6);

        let last = FLOOR_TILES - 1;
        assert!(approx(tile_color(&floor, 0, 0), base));
        assert!(approx(tile_color(&floor, last, last), base));
        assert!(approx(tile_color(&floor, 0, last), base * 0.7));
        assert!(approx(tile_color(&floor, last, 0), base * 0.7));

        for column in 0..FLOOR_TILES {
            for row in 0..FLOOR_TILES {
                let expected = if (column + row) % 2 == 0 { base } else { base * 0.7 };
                assert!(approx(tile_color(&floor, column, row), expected));
            }
        }
    }

    #[test]
    fn test_floor_covers_room() {
        let floor = generate_floor(10.0, 8.0, vec3(1.0, 1.0, 1.0));
        let (min, max) = floor.bounds().expect("floor has tiles");
        assert!(approx(min, vec3(-5.0, 0.0, -4.0)));
        assert!(approx(max, vec3(5.0, 0.0, 4.0)));
        assert!(floor.vertices().iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_walls_leave_window_opening_empty() {
        let walls = generate_walls(10.0, 4.0, 8.0, vec3(0.9, 0.88, 0.82));
        assert_eq!(walls.vertex_count(), 9 * 6);

        // No back wall triangle may cover the center of the window opening
        let sample = vec3(0.0, 1.65, -4.0);
        for triangle in walls.triangles().filter(|t| t[0].normal == [0.0, 0.0, 1.0]) {
            let (lo, hi) = triangle_xy_bounds(triangle);
            let inside = sample.x > lo.0 && sample.x < hi.0 && sample.y > lo.1 && sample.y < hi.1;
            assert!(!inside, "back wall covers the window opening");
        }
    }

    #[test]
    fn test_walls_leave_door_opening_empty() {
        let walls = generate_walls(10.0, 4.0, 8.0, vec3(0.9, 0.88, 0.82));
        let sample = (1.5_f32, 1.0_f32);
        for triangle in walls.triangles().filter(|t| t[0].normal == [-1.0, 0.0, 0.0]) {
            let zs = triangle.iter().map(|v| v.position[2]);
            let ys = triangle.iter().map(|v| v.position[1]);
            let (z_lo, z_hi) = min_max(zs);
            let (y_lo, y_hi) = min_max(ys);
            let inside = sample.0 > z_lo && sample.0 < z_hi && sample.1 > y_lo && sample.1 < y_hi;
            assert!(!inside, "right wall covers the door opening");
        }
    }

    #[test]
    fn test_ceiling_faces_down() {
        let ceiling = generate_ceiling(10.0, 8.0, 4.0, vec3(0.95, 0.95, 0.95));
        assert_eq!(ceiling.vertex_count(), 6);
        assert!(ceiling.vertices().iter().all(|v| v.position[1] == 4.0));
        assert!(ceiling.vertices().iter().all(|v| v.normal == [0.0, -1.0, 0.0]));
    }

    #[test]
    fn test_window_fills_opening() {
        let window = generate_window(vec3(0.4, 0.3, 0.2), vec3(0.6, 0.8, 0.95));
        assert_eq!(window.vertex_count(), 7 * 6);
        let (min, max) = window.bounds().expect("window has geometry");
        assert!(approx(min, vec3(-1.5, 0.8, -0.01)));
        assert!(approx(max, vec3(1.5, 2.5, 0.0)));
    }

    #[test]
    fn test_door_stands_on_floor() {
        let door = generate_door(vec3(0.5, 0.35, 0.2));
        assert_eq!(door.vertex_count(), 36 * 2 + 12);
        let (min, max) = door.bounds().expect("door has geometry");
        assert!(min.y.abs() < EPSILON);
        assert!((max.y - DOOR_HEIGHT).abs() < EPSILON);
        assert!((min.x + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_rug_borders_are_darker() {
        let base = vec3(0.6, 0.2, 0.2);
        let rug = generate_rug(3.0, 2.0, base);
        assert_eq!(rug.vertex_count(), 18);
        assert!(approx(rug.vertices()[0].color(), base));
        assert!(approx(rug.vertices()[6].color(), base * 0.7));
        assert!(approx(rug.vertices()[12].color(), base * 0.7));
        assert!(rug.vertices()[6..].iter().all(|v| v.position[1] > 0.01));
    }

    fn min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
        values.fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    fn triangle_xy_bounds(triangle: &[crate::gfx::scene::vertex::Vertex3D]) -> ((f32, f32), (f32, f32)) {
        let (x_lo, x_hi) = min_max(triangle.iter().map(|v| v.position[0]));
        let (y_lo, y_hi) = min_max(triangle.iter().map(|v| v.position[1]));
        ((x_lo, y_lo), (x_hi, y_hi))
    }
}
