//! # Mesh import
//!
//! Loading of external models for the "imported mesh" object. Loaders sit
//! behind the [`MeshLoader`] trait; [`load_mesh`] picks one from the file
//! extension.
//!
//! ## Supported Formats
//!
//! - **OBJ** via `tobj`, triangulated, all models merged into one mesh
//! - **OFF** (Object File Format), polygon faces fan-triangulated
//!
//! ```no_run
//! use roomview::assets::load_mesh;
//!
//! let bunny = load_mesh("model/bunny.off").unwrap();
//! println!("{} triangles", bunny.triangle_count());
//! ```

pub mod obj;
pub mod off;

pub use obj::ObjLoader;
pub use off::OffLoader;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::gfx::geometry::{GeometryError, Mesh};

/// Errors raised while importing a mesh
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OBJ load error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("malformed OFF data at line {line}: {reason}")]
    MalformedOff { line: usize, reason: String },

    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] GeometryError),
}

/// Result type for mesh import
pub type AssetResult<T> = Result<T, AssetError>;

/// Something that can turn a file into a [`Mesh`]
pub trait MeshLoader {
    /// Loads the mesh stored at `path`
    fn load(&self, path: &Path) -> AssetResult<Mesh>;

    /// Lowercase file extensions this loader understands
    fn extensions(&self) -> &'static [&'static str];
}

/// Picks the loader matching the extension of `path`
pub fn loader_for_path(path: &Path) -> AssetResult<Box<dyn MeshLoader>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let loaders: [Box<dyn MeshLoader>; 2] = [Box::new(ObjLoader), Box::new(OffLoader)];
    loaders
        .into_iter()
        .find(|loader| loader.extensions().contains(&extension.as_str()))
        .ok_or_else(|| AssetError::UnsupportedFormat(path.display().to_string()))
}

/// Loads a mesh with the loader matching its extension
pub fn load_mesh(path: impl AsRef<Path>) -> AssetResult<Mesh> {
    let path = path.as_ref();
    let mesh = loader_for_path(path)?.load(path)?;
    log::info!(
        "Loaded {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::path::PathBuf;

    /// Writes `contents` to a per-process temp file and returns its path
    pub fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("roomview-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).expect("failed to write temp file");
        path
    }
}
