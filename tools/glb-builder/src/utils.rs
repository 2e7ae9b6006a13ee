//! GLB container helpers

use gltf_json as json;

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

/// Componentwise min/max of a position list
///
/// An empty list yields `f32::MAX` / `f32::MIN`; callers only pack
/// positions of non-empty meshes.
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for pos in positions {
        for axis in 0..3 {
            min[axis] = min[axis].min(pos[axis]);
            max[axis] = max[axis].max(pos[axis]);
        }
    }
    (min.to_vec(), max.to_vec())
}

/// Zero-pad to a 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    let padded = buffer.len().next_multiple_of(4);
    buffer.resize(padded, 0);
}

/// Wrap a glTF document and its binary buffer into a GLB 2.0 container
///
/// The JSON chunk is padded with spaces and the BIN chunk with zeros. The
/// BIN chunk is omitted when `bin` is empty.
pub fn assemble_glb(root: &json::Root, bin: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    let mut json_chunk = serde_json::to_vec(root)?;
    json_chunk.resize(json_chunk.len().next_multiple_of(4), b' ');

    let mut bin_chunk = bin.to_vec();
    align_buffer(&mut bin_chunk);

    let mut total = 12 + 8 + json_chunk.len();
    if !bin_chunk.is_empty() {
        total += 8 + bin_chunk.len();
    }

    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());

    glb.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(&json_chunk);

    if !bin_chunk.is_empty() {
        glb.extend_from_slice(&(bin_chunk.len() as u32).to_le_bytes());
        glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        glb.extend_from_slice(&bin_chunk);
    }

    Ok(glb)
}
