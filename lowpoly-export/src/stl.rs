//! Binary STL encoding
//!
//! Layout: 80-byte header, u32 facet count, then per facet a normal and
//! three corners (12 little-endian f32) plus a zero u16 attribute.

use lowpoly_core::Mesh;

const HEADER_SIZE: usize = 80;
const FACET_SIZE: usize = 50;

/// Encode `mesh` as binary STL
///
/// Normals are recomputed from the face winding. The header never starts
/// with `solid`, so readers do not mistake the file for ASCII STL.
pub fn encode_stl(mesh: &Mesh, name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + 4 + mesh.face_count() * FACET_SIZE);

    let mut header = [b' '; HEADER_SIZE];
    let text = format!("binary STL: {name}");
    let len = text.len().min(HEADER_SIZE);
    header[..len].copy_from_slice(&text.as_bytes()[..len]);
    out.extend_from_slice(&header);

    out.extend_from_slice(&(mesh.face_count() as u32).to_le_bytes());

    for face in 0..mesh.face_count() {
        let normal = mesh.face_normal(face);
        for v in std::iter::once(normal).chain(mesh.triangle(face)) {
            for c in v.to_array() {
                out.extend_from_slice(&c.to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }

    out
}
