//! GLB writing utilities
//!
//! Builder-style API for turning a triangle mesh into a binary glTF file:
//! - [`BufferBuilder`] packs attributes into one aligned binary buffer
//! - [`MeshBuilder`] packs positions and u32 indices for one mesh
//! - [`GltfBuilder`] assembles nodes, meshes and scenes into a document
//! - [`assemble_glb`] wraps document and buffer into a GLB 2.0 container
//!
//! # Example
//!
//! ```
//! use glb_builder::*;
//!
//! let mut buffer = BufferBuilder::new();
//! let mesh = MeshBuilder::new()
//!     .positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]])
//!     .indices(&[0, 1, 2])
//!     .build(&mut buffer);
//!
//! let root = GltfBuilder::new()
//!     .buffer_byte_length(buffer.data().len() as u64)
//!     .add_mesh("Triangle", &mesh)
//!     .add_mesh_node("Triangle")
//!     .add_scene("Scene", &[0])
//!     .build(buffer.views(), buffer.accessors(), "glb-builder");
//!
//! let glb = assemble_glb(&root, buffer.data())?;
//! assert_eq!(&glb[..4], b"glTF");
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod buffer;
pub mod document;
pub mod mesh;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::GltfBuilder;
pub use mesh::{MeshAccessors, MeshBuilder};
pub use utils::{align_buffer, assemble_glb, compute_bounds};

pub use gltf_json as json;
