//! Binary glTF encoding

use glb_builder::{assemble_glb, BufferBuilder, GltfBuilder, MeshBuilder};
use lowpoly_core::Mesh;
use tracing::debug;

use crate::error::ExportError;

const GENERATOR: &str = concat!("lowpoly-export ", env!("CARGO_PKG_VERSION"));

/// Encode `mesh` as a GLB with one mesh, one node and one scene
///
/// Only positions and u32 indices are written. Without normals, viewers
/// shade each triangle flat. A mesh without vertices yields an empty scene.
pub fn encode_glb(mesh: &Mesh, name: &str) -> Result<Vec<u8>, ExportError> {
    let mut buffer = BufferBuilder::new();
    let mut document = GltfBuilder::new();

    if mesh.vertex_count() > 0 {
        let indices = mesh.triangle_indices();
        let accessors = MeshBuilder::new()
            .positions(mesh.vertices())
            .indices(&indices)
            .build(&mut buffer);
        document = document
            .buffer_byte_length(buffer.data().len() as u64)
            .add_mesh(name, &accessors)
            .add_mesh_node(name);
    }

    let roots: Vec<u32> = (0..document.node_count()).collect();
    let root = document
        .add_scene("Scene", &roots)
        .build(buffer.views(), buffer.accessors(), GENERATOR);

    let glb = assemble_glb(&root, buffer.data())?;
    debug!(bytes = glb.len(), "encoded glb");
    Ok(glb)
}
