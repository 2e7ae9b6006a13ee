//! Mesh attribute packing

use crate::buffer::{AccessorIndex, BufferBuilder};

/// Accessors of one packed mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub indices: Option<AccessorIndex>,
}

/// Positions plus an optional u32 index list
#[derive(Debug, Default)]
pub struct MeshBuilder<'a> {
    positions: &'a [[f32; 3]],
    indices: Option<&'a [u32]>,
}

impl<'a> MeshBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(mut self, positions: &'a [[f32; 3]]) -> Self {
        self.positions = positions;
        self
    }

    /// Triangle list, three indices per face
    pub fn indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Pack into `buffer`, positions first
    pub fn build(self, buffer: &mut BufferBuilder) -> MeshAccessors {
        let positions = buffer.pack_positions(self.positions);
        let indices = self.indices.map(|i| buffer.pack_indices_u32(i));
        MeshAccessors { positions, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_builder_indexed() {
        let mut buffer = BufferBuilder::new();
        let mesh = MeshBuilder::new()
            .positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]])
            .indices(&[0, 1, 2])
            .build(&mut buffer);

        assert_eq!(mesh.positions, AccessorIndex(0));
        assert_eq!(mesh.indices, Some(AccessorIndex(1)));
    }

    #[test]
    fn test_mesh_builder_unindexed() {
        let mut buffer = BufferBuilder::new();
        let mesh = MeshBuilder::new()
            .positions(&[[0.0; 3]; 3])
            .build(&mut buffer);
        assert!(mesh.indices.is_none());
        assert_eq!(buffer.accessor_count(), 1);
    }
}
