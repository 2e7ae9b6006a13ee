//! Mesh combining utilities
//!
//! Functions for merging multiple meshes into a single mesh.

use crate::mesh::Mesh;
use crate::modifiers::{MeshModifier, Transform};

/// Combine multiple meshes into one
///
/// Vertices are concatenated in input order and each part's face indices
/// are offset by the number of vertices that precede it. Coincident
/// vertices are kept as-is; this is a disjoint union, not a boolean.
///
/// # Example
/// ```
/// use lowpoly_core::combine::combine;
/// use lowpoly_core::primitives::{cone, cuboid};
///
/// let base = cuboid(glam::Vec3::ONE)?;
/// let roof = cone(0.8, 0.5, 4)?;
/// let house = combine(&[&base, &roof]);
/// assert_eq!(house.vertex_count(), 8 + 6);
/// # Ok::<(), lowpoly_core::GenerateError>(())
/// ```
pub fn combine(meshes: &[&Mesh]) -> Mesh {
    let total_vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let total_faces: usize = meshes.iter().map(|m| m.face_count()).sum();

    let mut result = Mesh::new();
    result.reserve(total_vertices, total_faces);

    for mesh in meshes {
        result.append_offset(mesh);
    }

    result
}

/// Combine multiple meshes with per-mesh transforms
///
/// Each part is copied, transformed, then combined; the inputs are left
/// untouched so one template can be placed several times.
pub fn combine_transformed(meshes: &[(&Mesh, Transform)]) -> Mesh {
    let transformed: Vec<Mesh> = meshes
        .iter()
        .map(|(mesh, transform)| {
            let mut part = (*mesh).clone();
            transform.apply(&mut part);
            part
        })
        .collect();

    let refs: Vec<&Mesh> = transformed.iter().collect();
    combine(&refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cuboid, cylinder, icosphere};
    use glam::Vec3;

    #[test]
    fn test_combine_empty() {
        let result = combine(&[]);
        assert_eq!(result.vertex_count(), 0);
        assert_eq!(result.face_count(), 0);
    }

    #[test]
    fn test_combine_single_mesh() {
        let mesh = cylinder(0.1, 2.0, 6).unwrap();
        assert_eq!(combine(&[&mesh]), mesh);
    }

    #[test]
    fn test_combine_index_offset() {
        let first = cuboid(Vec3::ONE).unwrap();
        let second = icosphere(1, 1.0).unwrap();
        let v1 = first.vertex_count() as u32;

        let combined = combine(&[&first, &second]);

        assert_eq!(
            combined.vertex_count(),
            first.vertex_count() + second.vertex_count()
        );
        assert_eq!(
            combined.face_count(),
            first.face_count() + second.face_count()
        );
        assert_eq!(&combined.faces()[..first.face_count()], first.faces());
        for (merged, original) in combined.faces()[first.face_count()..]
            .iter()
            .zip(second.faces())
        {
            assert_eq!(*merged, original.map(|i| i + v1));
        }
        assert_eq!(&combined.vertices()[first.vertex_count()..], second.vertices());
        assert!(combined.validate().is_ok());
    }

    #[test]
    fn test_combine_skips_nothing_for_empty_parts() {
        let empty = Mesh::new();
        let cube = cuboid(Vec3::ONE).unwrap();
        let combined = combine(&[&empty, &cube, &empty]);
        assert_eq!(combined, cube);
    }

    #[test]
    fn test_combine_transformed_leaves_template_untouched() {
        let wheel = cylinder(0.4, 0.3, 8).unwrap();
        let snapshot = wheel.clone();

        let combined = combine_transformed(&[
            (&wheel, Transform::translate(1.0, 0.0, 0.0)),
            (&wheel, Transform::translate(-1.0, 0.0, 0.0)),
        ]);

        assert_eq!(wheel, snapshot);
        assert_eq!(combined.vertex_count(), wheel.vertex_count() * 2);
        let bounds = combined.bounds().unwrap();
        assert!((bounds.max.x - 1.4).abs() < 1e-5);
        assert!((bounds.min.x + 1.4).abs() < 1e-5);
    }
}
