//! Wavefront OBJ import through `tobj`

use std::path::Path;

use super::{AssetResult, MeshLoader};
use crate::gfx::geometry::Mesh;

/// Loads OBJ files, merging every model in the file into one mesh
///
/// Materials are ignored; the object is drawn with the palette color.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjLoader;

impl MeshLoader for ObjLoader {
    fn load(&self, path: &Path) -> AssetResult<Mesh> {
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut positions = Vec::new();
        let mut indices = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let offset = (positions.len() / 3) as u32;

            log::debug!(
                "OBJ model '{}': {} vertices, {} triangles",
                model.name,
                mesh.positions.len() / 3,
                mesh.indices.len() / 3
            );

            positions.extend_from_slice(&mesh.positions);
            indices.extend(mesh.indices.iter().map(|&i| i + offset));
        }

        Ok(Mesh::new(positions, indices)?)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["obj"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{test_util::temp_file, AssetError};

    #[test]
    fn test_quads_are_triangulated() {
        let path = temp_file(
            "quad.obj",
            "o quad\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        );
        let mesh = ObjLoader.load(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_models_are_merged() {
        let path = temp_file(
            "two.obj",
            "o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n\
             o b\nv 0 0 1\nv 1 0 1\nv 0 1 1\nf 4 5 6\n",
        );
        let mesh = ObjLoader.load(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        // Second triangle points at the second model's vertices
        assert!(mesh.indices()[3..].iter().all(|&i| i >= 3));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_obj() {
        let err = ObjLoader.load(Path::new("missing/nothing.obj")).unwrap_err();
        assert!(matches!(err, AssetError::Obj(_)));
    }
}
