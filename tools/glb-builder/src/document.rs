//! glTF document construction

use crate::MeshAccessors;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Builder for a single-buffer glTF document
#[derive(Debug, Default)]
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    scenes: Vec<json::Scene>,
    buffer_byte_length: u64,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the BIN chunk the document points at
    pub fn buffer_byte_length(mut self, length: u64) -> Self {
        self.buffer_byte_length = length;
        self
    }

    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Add a triangle-list mesh
    pub fn add_mesh(mut self, name: &str, accessors: &MeshAccessors) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            Valid(json::mesh::Semantic::Positions),
            accessors.positions.as_json_index(),
        );

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![json::mesh::Primitive {
                attributes,
                extensions: Default::default(),
                extras: Default::default(),
                indices: accessors.indices.map(|i| i.as_json_index()),
                material: None,
                mode: Valid(json::mesh::Mode::Triangles),
                targets: None,
            }],
            weights: None,
        });
        self
    }

    /// Add a node instancing the most recently added mesh
    pub fn add_mesh_node(mut self, name: &str) -> Self {
        let mesh = self
            .meshes
            .len()
            .checked_sub(1)
            .map(|i| json::Index::new(i as u32));
        self.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh,
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            skin: None,
            translation: None,
            weights: None,
        });
        self
    }

    /// Add a scene; the first scene becomes the default
    pub fn add_scene(mut self, name: &str, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            nodes: root_nodes.iter().map(|n| json::Index::new(*n)).collect(),
        });
        self
    }

    /// Finish the document around the views and accessors of a [`crate::BufferBuilder`]
    pub fn build(
        self,
        buffer_views: &[json::buffer::View],
        accessors: &[json::Accessor],
        generator: &str,
    ) -> json::Root {
        let buffers = if self.buffer_byte_length > 0 {
            vec![json::Buffer {
                byte_length: self.buffer_byte_length.into(),
                extensions: Default::default(),
                extras: Default::default(),
                name: None,
                uri: None,
            }]
        } else {
            Vec::new()
        };

        json::Root {
            accessors: accessors.to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: buffer_views.to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: Vec::new(),
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene: (!self.scenes.is_empty()).then(|| json::Index::new(0)),
            scenes: self.scenes,
            skins: Vec::new(),
            textures: Vec::new(),
        }
    }
}
