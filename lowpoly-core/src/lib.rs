//! Procedural low-poly mesh generation
//!
//! Builds simple game-ready meshes (tree, rock, building, vehicle, game
//! asset) from a model type plus two scalars, `size` and `detail`.
//!
//! - [`primitives`] - cylinder, cone, cuboid, icosahedron, icosphere
//! - [`combine`] - disjoint union of meshes with index offsetting
//! - [`modifiers`] - in-place vertex transforms and seeded perturbations
//! - [`generators`] - one rule per [`ModelType`]
//! - [`request`] - caller-facing request validation
//!
//! Nothing here keeps state between calls. Randomness always comes from
//! an explicit generator, so a fixed seed reproduces the same mesh.
//!
//! # Example
//! ```
//! use lowpoly_core::{generate, ModelType};
//!
//! let rock = generate(ModelType::Rock, 1.0, 0.5, Some(42))?;
//! assert_eq!(rock.vertex_count(), 42);
//! assert_eq!(rock.face_count(), 80);
//! # Ok::<(), lowpoly_core::GenerateError>(())
//! ```

pub mod combine;
pub mod error;
pub mod generators;
pub mod mesh;
pub mod modifiers;
pub mod primitives;
pub mod request;

pub use combine::{combine, combine_transformed};
pub use error::GenerateError;
pub use generators::{generate, generate_by_tag, generate_with_rng, GeneratorConfig, ModelType};
pub use mesh::{Aabb, Mesh, MeshBuilder, MeshStats};
pub use request::{default_model_name, GenerationRequest, Strictness};
