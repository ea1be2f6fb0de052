//! # Procedural Geometry Generation
//!
//! This module provides the [`Mesh`] container shared by procedural primitives
//! and imported models, plus the generators for the shapes the viewer draws.
//!
//! ## Supported Primitives
//!
//! - **Sphere**: UV sphere with configurable radius and resolution
//! - **Cube**: Axis-aligned cube with a configurable half extent
//! - **Room**: Five colored walls bounding the scene
//!
//! ## Usage
//!
//! ```rust
//! use roomview::gfx::geometry::{generate_cube, generate_sphere};
//!
//! let sphere = generate_sphere(1.0, 20, 20).unwrap();
//! assert_eq!(sphere.vertex_count(), 21 * 21);
//!
//! let cube = generate_cube(1.0).unwrap();
//! assert_eq!(cube.triangle_count(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

use thiserror::Error;

/// Errors raised while building or validating geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error(
        "invalid divisions: longitude={longitude}, latitude={latitude} \
         (both must be at least 1 and every vertex addressable by a u32 index)"
    )]
    InvalidDivisions { longitude: u32, latitude: u32 },

    #[error("invalid {what}: {value} (must be finite and greater than zero)")]
    InvalidExtent { what: &'static str, value: f32 },

    #[error("{what} buffer length {len} is not a multiple of 3")]
    RaggedBuffer { what: &'static str, len: usize },

    #[error("color buffer has {colors} floats but positions have {positions}")]
    ColorMismatch { colors: usize, positions: usize },

    #[error("index {index} at position {at} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        index: u32,
        at: usize,
        vertex_count: usize,
    },
}

/// Triangle mesh ready for GPU upload
///
/// Positions and colors are flat, three floats per vertex. Indices come in
/// triples with counter-clockwise front faces. A mesh built through
/// [`Mesh::new`] always satisfies these invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
    colors: Vec<f32>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Create a uniformly colored mesh, validating its buffers
    pub fn new(positions: Vec<f32>, indices: Vec<u32>) -> Result<Self, GeometryError> {
        Self::with_colors(positions, Vec::new(), indices)
    }

    /// Create a mesh with per-vertex RGB colors
    ///
    /// Pass an empty `colors` buffer for meshes drawn with a uniform color.
    pub fn with_colors(
        positions: Vec<f32>,
        colors: Vec<f32>,
        indices: Vec<u32>,
    ) -> Result<Self, GeometryError> {
        let mesh = Self {
            positions,
            colors,
            indices,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Checks the buffer invariants
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.positions.len() % 3 != 0 {
            return Err(GeometryError::RaggedBuffer {
                what: "position",
                len: self.positions.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::RaggedBuffer {
                what: "index",
                len: self.indices.len(),
            });
        }
        if !self.colors.is_empty() && self.colors.len() != self.positions.len() {
            return Err(GeometryError::ColorMismatch {
                colors: self.colors.len(),
                positions: self.positions.len(),
            });
        }

        let vertex_count = self.vertex_count();
        if let Some((at, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, &i)| i as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                index,
                at,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Whether the mesh carries its own per-vertex colors
    pub fn has_vertex_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Position of vertex `i`
    pub fn vertex(&self, i: usize) -> Option<[f32; 3]> {
        self.positions
            .get(i * 3..i * 3 + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// Iterates over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Convert to the interleaved vertex format used by the renderer
    ///
    /// Meshes without vertex colors get white, which the shader ignores
    /// when drawing with a uniform color.
    pub fn to_scene_format(&self) -> (Vec<crate::gfx::scene::vertex::Vertex3D>, Vec<u32>) {
        use crate::gfx::scene::vertex::Vertex3D;

        let vertices = (0..self.vertex_count())
            .map(|i| Vertex3D {
                position: [
                    self.positions[i * 3],
                    self.positions[i * 3 + 1],
                    self.positions[i * 3 + 2],
                ],
                color: if self.has_vertex_colors() {
                    [
                        self.colors[i * 3],
                        self.colors[i * 3 + 1],
                        self.colors[i * 3 + 2],
                    ]
                } else {
                    [1.0, 1.0, 1.0]
                },
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = Mesh::new(vec![0.0; 9], vec![0, 1, 3]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::IndexOutOfRange {
                index: 3,
                at: 2,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_rejects_ragged_buffers() {
        assert!(matches!(
            Mesh::new(vec![0.0; 8], vec![]),
            Err(GeometryError::RaggedBuffer { what: "position", .. })
        ));
        assert!(matches!(
            Mesh::new(vec![0.0; 9], vec![0, 1]),
            Err(GeometryError::RaggedBuffer { what: "index", .. })
        ));
        assert!(matches!(
            Mesh::with_colors(vec![0.0; 9], vec![1.0; 6], vec![0, 1, 2]),
            Err(GeometryError::ColorMismatch { .. })
        ));
    }

    #[test]
    fn test_scene_format_defaults_to_white() {
        let mesh = Mesh::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], vec![0, 1, 2])
            .unwrap();
        let (vertices, indices) = mesh.to_scene_format();
        assert_eq!(vertices.len(), 3);
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert!(vertices.iter().all(|v| v.color == [1.0, 1.0, 1.0]));
    }
}
