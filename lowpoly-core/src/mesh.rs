//! Mesh types
//!
//! Shared geometry types for primitive construction, combining and export.

use glam::Vec3;

use crate::error::GenerateError;

/// Trait for mesh construction - lets primitive generators emit geometry
/// without knowing the concrete storage.
pub trait MeshBuilder: Default {
    /// Add a vertex at `position`, returning its index
    fn add_vertex(&mut self, position: Vec3) -> u32;

    /// Add a triangle using three vertex indices (CCW seen from outside)
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);
}

/// Indexed triangle mesh (f32 positions, u32 triangle indices)
///
/// Every face index should be in `[0, vertex_count)`. `from_parts` and the
/// generators check this with `validate()`. Meshes assembled by hand through
/// [`MeshBuilder`] are not checked until they are validated, which the
/// exporters do before encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<[f32; 3]>,
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from raw arrays, checking every face index.
    pub fn from_parts(vertices: Vec<[f32; 3]>, faces: Vec<[u32; 3]>) -> Result<Self, GenerateError> {
        let mesh = Self { vertices, faces };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Vertex positions as [x, y, z]
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Triangle faces as vertex index triples
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Flattened triangle index list (3 per face), as GPU index buffers expect
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Check the face index invariant
    pub fn validate(&self) -> Result<(), GenerateError> {
        let vertex_count = self.vertices.len();
        for (face, tri) in self.faces.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(GenerateError::MeshIndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Axis-aligned bounds, or `None` for a mesh without vertices
    pub fn bounds(&self) -> Option<Aabb> {
        let (first, rest) = self.vertices.split_first()?;
        let mut min = Vec3::from_array(*first);
        let mut max = min;
        for &p in rest {
            let p = Vec3::from_array(p);
            min = min.min(p);
            max = max.max(p);
        }
        Some(Aabb { min, max })
    }

    /// Unit normal of a face from its winding; zero for degenerate triangles.
    ///
    /// # Panics
    /// Panics if `face` is out of range.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.triangle(face);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Corner positions of a face
    pub fn triangle(&self, face: usize) -> [Vec3; 3] {
        self.faces[face].map(|i| Vec3::from_array(self.vertices[i as usize]))
    }

    /// Summary numbers shown next to a preview
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertex_count: self.vertex_count(),
            face_count: self.face_count(),
            bounds: self.bounds(),
        }
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.vertices
    }

    pub(crate) fn reserve(&mut self, vertices: usize, faces: usize) {
        self.vertices.reserve(vertices);
        self.faces.reserve(faces);
    }

    pub(crate) fn append_offset(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces
            .extend(other.faces.iter().map(|f| f.map(|i| i + offset)));
    }
}

impl MeshBuilder for Mesh {
    fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position.to_array());
        index
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.faces.push([i0, i1, i2]);
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Size along each axis
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Polygon / vertex counts and bounds of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub face_count: usize,
    pub bounds: Option<Aabb>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::from_parts(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_from_parts_rejects_out_of_range_index() {
        let err = Mesh::from_parts(vec![[0.0; 3]; 3], vec![[0, 1, 2], [0, 3, 1]]).unwrap_err();
        assert_eq!(
            err,
            GenerateError::MeshIndexOutOfRange {
                face: 1,
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.bounds().is_none());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_bounds() {
        let mesh = Mesh::from_parts(
            vec![[-1.0, 2.0, 0.5], [3.0, -4.0, 0.0], [0.0, 0.0, -2.0]],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -4.0, -2.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 2.0, 0.5));
        assert_eq!(bounds.extent(), Vec3::new(4.0, 6.0, 2.5));
    }

    #[test]
    fn test_face_normal_follows_winding() {
        let mesh = triangle();
        assert_eq!(mesh.face_normal(0), Vec3::Z);

        let flipped = Mesh::from_parts(mesh.vertices().to_vec(), vec![[0, 2, 1]]).unwrap();
        assert_eq!(flipped.face_normal(0), -Vec3::Z);
    }

    #[test]
    fn test_degenerate_face_normal_is_zero() {
        let mesh = Mesh::from_parts(vec![[1.0, 1.0, 1.0]; 3], vec![[0, 1, 2]]).unwrap();
        assert_eq!(mesh.face_normal(0), Vec3::ZERO);
    }

    #[test]
    fn test_builder_and_stats() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Vec3::ZERO);
        let b = mesh.add_vertex(Vec3::X);
        let c = mesh.add_vertex(Vec3::Y);
        mesh.add_triangle(a, b, c);

        let stats = mesh.stats();
        assert_eq!(stats.vertex_count, 3);
        assert_eq!(stats.face_count, 1);
        assert_eq!(mesh.triangle_indices(), vec![0, 1, 2]);
    }
}
