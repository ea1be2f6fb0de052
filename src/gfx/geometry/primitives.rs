//! # Primitive Shape Generation
//!
//! This module contains functions to generate the viewer's primitive shapes.
//! All shapes use a right-handed, Y-up frame with counter-clockwise front faces.
//! Sphere and cube faces point outward; room walls point into the room.

use super::{GeometryError, Mesh};
use crate::simulation::motion::Bounds;
use std::f32::consts::PI;

/// Generate a UV sphere centered at the origin
///
/// # Arguments
/// * `radius` - Sphere radius, must be positive
/// * `longitude_divisions` - Number of segments around the Y axis
/// * `latitude_divisions` - Number of segments from pole to pole
///
/// The grid includes both ends of each range, so the seam column and the pole
/// rows are duplicated. That keeps the index grid rectangular: the mesh has
/// `(lon + 1) * (lat + 1)` vertices and `6 * lon * lat` indices. Triangles
/// that touch a pole have zero area.
pub fn generate_sphere(
    radius: f32,
    longitude_divisions: u32,
    latitude_divisions: u32,
) -> Result<Mesh, GeometryError> {
    if longitude_divisions == 0 || latitude_divisions == 0 {
        return Err(GeometryError::InvalidDivisions {
            longitude: longitude_divisions,
            latitude: latitude_divisions,
        });
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidExtent {
            what: "radius",
            value: radius,
        });
    }

    let too_many = GeometryError::InvalidDivisions {
        longitude: longitude_divisions,
        latitude: latitude_divisions,
    };
    // Every vertex must be addressable by a u32 index
    let stride = longitude_divisions.checked_add(1).ok_or(too_many.clone())?;
    let vertex_count = latitude_divisions
        .checked_add(1)
        .and_then(|rows| rows.checked_mul(stride))
        .ok_or(too_many.clone())? as usize;
    let index_count = (longitude_divisions as usize)
        .checked_mul(latitude_divisions as usize)
        .and_then(|cells| cells.checked_mul(6))
        .ok_or(too_many)?;

    let mut positions = Vec::with_capacity(vertex_count * 3);
    let mut indices = Vec::with_capacity(index_count);

    // Rows run from the north pole (v = 0) to the south pole (v = 1)
    for lat in 0..=latitude_divisions {
        let v = lat as f32 / latitude_divisions as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();

        for lon in 0..=longitude_divisions {
            let u = lon as f32 / longitude_divisions as f32;
            let (sin_phi, cos_phi) = (u * 2.0 * PI).sin_cos();

            positions.push(radius * cos_phi * sin_theta);
            positions.push(radius * cos_theta);
            positions.push(radius * sin_phi * sin_theta);
        }
    }

    for y in 0..latitude_divisions {
        for x in 0..longitude_divisions {
            let upper = y * stride + x;
            let lower = upper + stride;

            indices.extend_from_slice(&[lower, upper, upper + 1]);
            indices.extend_from_slice(&[lower, upper + 1, lower + 1]);
        }
    }

    Mesh::new(positions, indices)
}

/// Generate an axis-aligned cube centered at the origin
///
/// Returns 8 shared corners and 12 triangles, extending `half_extent` along
/// every axis.
pub fn generate_cube(half_extent: f32) -> Result<Mesh, GeometryError> {
    if !(half_extent.is_finite() && half_extent > 0.0) {
        return Err(GeometryError::InvalidExtent {
            what: "half extent",
            value: half_extent,
        });
    }

    let h = half_extent;
    #[rustfmt::skip]
    let positions = vec![
        -h, -h, -h,
         h, -h, -h,
         h,  h, -h,
        -h,  h, -h,
        -h, -h,  h,
         h, -h,  h,
         h,  h,  h,
        -h,  h,  h,
    ];

    // Corner order per face is counter-clockwise seen from outside
    let faces: [[u32; 4]; 6] = [
        [4, 5, 6, 7], // front  (+Z)
        [1, 0, 3, 2], // back   (-Z)
        [5, 1, 2, 6], // right  (+X)
        [0, 4, 7, 3], // left   (-X)
        [7, 6, 2, 3], // top    (+Y)
        [0, 1, 5, 4], // bottom (-Y)
    ];

    let indices = faces
        .iter()
        .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
        .collect();

    Mesh::new(positions, indices)
}

/// Wall colors in the order the walls are emitted: back, right, left, bottom, top
pub const ROOM_WALL_COLORS: [[f32; 3]; 5] = [
    [1.0, 1.0, 1.0], // back: white
    [0.7, 0.7, 0.7], // right: light gray
    [0.5, 0.5, 0.5], // left: dark gray
    [1.0, 1.0, 0.0], // bottom: yellow
    [0.0, 1.0, 1.0], // top: cyan
];

/// Generate the room enclosing `bounds`
///
/// Five walls with per-vertex colors; the front (max Z) side stays open so
/// the camera can look in. Walls face the inside of the room.
pub fn generate_room(bounds: &Bounds) -> Mesh {
    let (a, b) = (bounds.min, bounds.max);

    let walls: [[[f32; 3]; 4]; 5] = [
        // back (z = min), facing +Z
        [
            [a.x, a.y, a.z],
            [b.x, a.y, a.z],
            [b.x, b.y, a.z],
            [a.x, b.y, a.z],
        ],
        // right (x = max), facing -X
        [
            [b.x, a.y, a.z],
            [b.x, a.y, b.z],
            [b.x, b.y, b.z],
            [b.x, b.y, a.z],
        ],
        // left (x = min), facing +X
        [
            [a.x, a.y, b.z],
            [a.x, a.y, a.z],
            [a.x, b.y, a.z],
            [a.x, b.y, b.z],
        ],
        // bottom (y = min), facing +Y
        [
            [a.x, a.y, a.z],
            [a.x, a.y, b.z],
            [b.x, a.y, b.z],
            [b.x, a.y, a.z],
        ],
        // top (y = max), facing -Y
        [
            [a.x, b.y, b.z],
            [a.x, b.y, a.z],
            [b.x, b.y, a.z],
            [b.x, b.y, b.z],
        ],
    ];

    let mut positions = Vec::with_capacity(5 * 4 * 3);
    let mut colors = Vec::with_capacity(5 * 4 * 3);
    let mut indices = Vec::with_capacity(5 * 6);

    for (wall, (corners, color)) in walls.iter().zip(ROOM_WALL_COLORS.iter()).enumerate() {
        for corner in corners {
            positions.extend_from_slice(corner);
            colors.extend_from_slice(color);
        }
        let base = wall as u32 * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh {
        positions,
        colors,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    fn triangle_normal(mesh: &Mesh, tri: [u32; 3]) -> (Vector3<f32>, Vector3<f32>) {
        let p = |i: u32| {
            let v = mesh.vertex(i as usize).unwrap();
            Vector3::new(v[0], v[1], v[2])
        };
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        ((b - a).cross(c - a), (a + b + c) / 3.0)
    }

    #[test]
    fn test_sphere_counts() {
        for (lon, lat) in [(1, 1), (3, 2), (20, 20), (7, 13)] {
            let sphere = generate_sphere(1.0, lon, lat).unwrap();
            let vertices = ((lon + 1) * (lat + 1)) as usize;
            assert_eq!(sphere.vertex_count(), vertices);
            assert_eq!(sphere.indices().len(), (lon * lat * 6) as usize);
            assert!(sphere.indices().iter().all(|&i| (i as usize) < vertices));
        }
    }

    #[test]
    fn test_sphere_rejects_zero_divisions() {
        assert_eq!(
            generate_sphere(1.0, 0, 4),
            Err(GeometryError::InvalidDivisions {
                longitude: 0,
                latitude: 4
            })
        );
        assert!(generate_sphere(1.0, 4, 0).is_err());
        assert!(matches!(
            generate_sphere(0.0, 4, 4),
            Err(GeometryError::InvalidExtent { what: "radius", .. })
        ));
        assert!(generate_sphere(f32::NAN, 4, 4).is_err());
    }

    #[test]
    fn test_sphere_rejects_unindexable_divisions() {
        // 70001 * 70001 vertices cannot be addressed with u32 indices
        assert_eq!(
            generate_sphere(1.0, 70_000, 70_000),
            Err(GeometryError::InvalidDivisions {
                longitude: 70_000,
                latitude: 70_000
            })
        );
        assert!(generate_sphere(1.0, u32::MAX, 1).is_err());
        assert!(generate_sphere(1.0, 1, u32::MAX).is_err());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 2.5;
        let sphere = generate_sphere(radius, 12, 8).unwrap();
        for i in 0..sphere.vertex_count() {
            let v = sphere.vertex(i).unwrap();
            let len = Vector3::new(v[0], v[1], v[2]).magnitude();
            assert!((len - radius).abs() < 1e-4, "vertex {} has length {}", i, len);
        }

        // First row is the north pole, last row the south pole
        assert_eq!(sphere.vertex(0).unwrap()[1], radius);
        let last = sphere.vertex(sphere.vertex_count() - 1).unwrap();
        assert!((last[1] + radius).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_winding_faces_outward() {
        let sphere = generate_sphere(1.0, 16, 12).unwrap();
        let mut checked = 0;
        for tri in sphere.triangles() {
            let (normal, centroid) = triangle_normal(&sphere, tri);
            // Pole triangles collapse to zero area
            if normal.magnitude() < 1e-6 {
                continue;
            }
            assert!(normal.dot(centroid) > 0.0, "triangle {:?} faces inward", tri);
            checked += 1;
        }
        assert!(checked >= 16 * 12);
    }

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube(1.0).unwrap();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.indices().len(), 36);
        assert_eq!(cube.triangle_count(), 12);

        for tri in cube.triangles() {
            let (normal, centroid) = triangle_normal(&cube, tri);
            assert!(normal.magnitude() > 0.0);
            assert!(normal.dot(centroid) > 0.0, "triangle {:?} faces inward", tri);
        }

        assert!(generate_cube(-1.0).is_err());
    }

    #[test]
    fn test_room_walls_face_inside() {
        let bounds = Bounds::new(Vector3::new(-4.0, -4.0, -4.0), Vector3::new(4.0, 4.0, 4.0));
        let room = generate_room(&bounds);
        room.validate().unwrap();

        assert_eq!(room.vertex_count(), 20);
        assert_eq!(room.triangle_count(), 10);
        assert!(room.has_vertex_colors());

        let center = bounds.center();
        for tri in room.triangles() {
            let (normal, centroid) = triangle_normal(&room, tri);
            assert!(normal.dot(center - centroid) > 0.0, "wall {:?} faces out", tri);
        }

        // Bottom wall is yellow
        let bottom = &room.colors()[3 * 4 * 3..3 * 4 * 3 + 3];
        assert_eq!(bottom, &[1.0, 1.0, 0.0]);
    }
}
