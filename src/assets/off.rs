//! Object File Format (OFF) import
//!
//! ```text
//! OFF
//! <vertex count> <face count> <edge count>
//! x y z            (one line per vertex)
//! n i0 i1 ... i(n-1)   (one line per face)
//! ```
//!
//! `#` starts a comment. Extra values after a vertex or face (colors) are
//! ignored. Polygons are fan-triangulated around their first corner.

use std::path::Path;

use super::{AssetError, AssetResult, MeshLoader};
use crate::gfx::geometry::Mesh;

#[derive(Debug, Default, Clone, Copy)]
pub struct OffLoader;

impl MeshLoader for OffLoader {
    fn load(&self, path: &Path) -> AssetResult<Mesh> {
        let source = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_off(&source)
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["off"]
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> AssetError {
    AssetError::MalformedOff {
        line,
        reason: reason.into(),
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize) -> AssetResult<T> {
    token
        .parse()
        .map_err(|_| malformed(line, format!("expected a number, found '{}'", token)))
}

/// Parses OFF text into a mesh
pub fn parse_off(source: &str) -> AssetResult<Mesh> {
    // (1-based line number, tokens) for every line with content
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("")))
        .map(|(n, line)| (n, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| malformed(1, "empty file"))?;
    if !header[0].ends_with("OFF") {
        return Err(malformed(header_line, "missing OFF header"));
    }

    // Counts may share the header line
    let (counts_line, counts) = if header.len() > 1 {
        (header_line, header[1..].to_vec())
    } else {
        lines
            .next()
            .ok_or_else(|| malformed(header_line, "missing vertex and face counts"))?
    };
    if counts.len() < 2 {
        return Err(malformed(counts_line, "expected vertex and face counts"));
    }
    let vertex_count: usize = parse_number(counts[0], counts_line)?;
    let face_count: usize = parse_number(counts[1], counts_line)?;

    // Declared counts are untrusted; every entry needs at least one line
    let line_bound = source.lines().count();
    let mut positions = Vec::with_capacity(vertex_count.min(line_bound).saturating_mul(3));
    for _ in 0..vertex_count {
        let (line, tokens) = lines
            .next()
            .ok_or_else(|| malformed(counts_line, "fewer vertices than declared"))?;
        if tokens.len() < 3 {
            return Err(malformed(line, "vertex needs three coordinates"));
        }
        for token in &tokens[..3] {
            positions.push(parse_number::<f32>(token, line)?);
        }
    }

    let mut indices = Vec::with_capacity(face_count.min(line_bound).saturating_mul(3));
    for _ in 0..face_count {
        let (line, tokens) = lines
            .next()
            .ok_or_else(|| malformed(counts_line, "fewer faces than declared"))?;
        let corners: usize = parse_number(tokens[0], line)?;
        if corners < 3 {
            return Err(malformed(line, format!("face with {} corners", corners)));
        }
        if tokens.len() <= corners {
            return Err(malformed(line, "face lists fewer indices than its corner count"));
        }

        let face = tokens[1..=corners]
            .iter()
            .map(|token| parse_number::<u32>(token, line))
            .collect::<AssetResult<Vec<_>>>()?;
        for k in 1..corners - 1 {
            indices.extend_from_slice(&[face[0], face[k], face[k + 1]]);
        }
    }

    Ok(Mesh::new(positions, indices)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::GeometryError;

    const TETRAHEDRON: &str = "\
OFF
# a tetrahedron
4 4 6
0 0 0
1 0 0
0 1 0
0 0 1

3 0 2 1
3 0 1 3
3 0 3 2
3 1 2 3 255 0 0
";

    #[test]
    fn test_parse_tetrahedron() {
        let mesh = parse_off(TETRAHEDRON).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(&mesh.indices()[9..], &[1, 2, 3]);
        assert_eq!(mesh.vertex(3), Some([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_polygons_fan_triangulated() {
        let mesh = parse_off("OFF 5 1 0\n0 0 0\n1 0 0\n2 1 0\n1 2 0\n0 1 0\n5 0 1 2 3 4\n")
            .unwrap();
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            parse_off(""),
            Err(AssetError::MalformedOff { .. })
        ));
        assert!(matches!(
            parse_off("PLY\n"),
            Err(AssetError::MalformedOff { line: 1, .. })
        ));
        assert!(matches!(
            parse_off("OFF\n3 1 0\n0 0 0\n1 0 0\n"),
            Err(AssetError::MalformedOff { .. })
        ));
        assert!(matches!(
            parse_off("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n2 0 1\n"),
            Err(AssetError::MalformedOff { line: 6, .. })
        ));
        assert!(matches!(
            parse_off("OFF\n1 0 0\n0 zero 0\n"),
            Err(AssetError::MalformedOff { line: 3, .. })
        ));
    }

    #[test]
    fn test_huge_declared_counts() {
        assert!(matches!(
            parse_off("OFF\n18446744073709551615 0 0\n"),
            Err(AssetError::MalformedOff { line: 2, .. })
        ));
        assert!(matches!(
            parse_off("OFF\n4000000000000 4000000000000 0\n0 0 0\n"),
            Err(AssetError::MalformedOff { .. })
        ));
        assert!(matches!(
            parse_off("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n18446744073709551615 0 1 2\n"),
            Err(AssetError::MalformedOff { line: 6, .. })
        ));
    }

    #[test]
    fn test_out_of_range_face() {
        let err = parse_off("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n").unwrap_err();
        assert!(matches!(
            err,
            AssetError::InvalidMesh(GeometryError::IndexOutOfRange { index: 7, .. })
        ));
    }
}
