//! Wavefront OBJ text encoding

use lowpoly_core::Mesh;

/// Encode `mesh` as a single OBJ object named `name`
///
/// Face indices are 1-based as the format requires. No normals or texture
/// coordinates are written.
pub fn encode_obj(mesh: &Mesh, name: &str) -> Vec<u8> {
    // ~32 bytes per `v` line, ~16 per `f` line
    let mut out = String::with_capacity(64 + mesh.vertex_count() * 32 + mesh.face_count() * 16);

    out.push_str(&format!("# {name} - low poly model\n"));
    out.push_str(&format!(
        "# {} vertices, {} faces\n",
        mesh.vertex_count(),
        mesh.face_count()
    ));
    out.push_str(&format!("o {name}\n"));
    for [x, y, z] in mesh.vertices() {
        out.push_str(&format!("v {x} {y} {z}\n"));
    }
    for [a, b, c] in mesh.faces() {
        out.push_str(&format!("f {} {} {}\n", a + 1, b + 1, c + 1));
    }

    out.into_bytes()
}
