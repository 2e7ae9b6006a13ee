//! Binary buffer packing with 4-byte alignment and accessor creation

use crate::utils::{align_buffer, compute_bounds};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Layout of one packed attribute
struct Layout {
    component: json::accessor::ComponentType,
    type_: json::accessor::Type,
    target: json::buffer::Target,
}

/// Single binary buffer plus the views and accessors describing it
#[derive(Debug, Default)]
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Packed bytes, always a multiple of 4 long
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack VEC3 float positions; glTF requires min/max on POSITION
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let bytes: &[u8] = bytemuck::cast_slice(positions);
        let (min, max) = compute_bounds(positions);
        self.push(
            bytes,
            positions.len(),
            Layout {
                component: json::accessor::ComponentType::F32,
                type_: json::accessor::Type::Vec3,
                target: json::buffer::Target::ArrayBuffer,
            },
            Some((min, max)),
        )
    }

    /// Pack u32 triangle indices
    pub fn pack_indices_u32(&mut self, indices: &[u32]) -> AccessorIndex {
        let bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        self.push(
            &bytes,
            indices.len(),
            Layout {
                component: json::accessor::ComponentType::U32,
                type_: json::accessor::Type::Scalar,
                target: json::buffer::Target::ElementArrayBuffer,
            },
            None,
        )
    }

    fn push(
        &mut self,
        bytes: &[u8],
        count: usize,
        layout: Layout,
        bounds: Option<(Vec<f32>, Vec<f32>)>,
    ) -> AccessorIndex {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytes);

        let view = json::Index::new(self.views.len() as u32);
        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: bytes.len().into(),
            byte_offset: Some(offset.into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(layout.target)),
        });

        let to_json = |values: Vec<f32>| {
            json::Value::Array(values.into_iter().map(json::Value::from).collect())
        };
        let (min, max) = match bounds {
            Some((min, max)) => (Some(to_json(min)), Some(to_json(max))),
            None => (None, None),
        };

        let index = AccessorIndex(self.accessor_count());
        self.accessors.push(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(layout.component)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(layout.type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });

        align_buffer(&mut self.buffer);
        index
    }
}
