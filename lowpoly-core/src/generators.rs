//! Model generators
//!
//! One generation rule per [`ModelType`]. Each rule composes primitives,
//! optionally perturbs vertex positions with a caller-supplied random
//! source, and finally scales the result uniformly by `size`.
//!
//! Models are built +Y up with the ground plane at XZ.
//!
//! `detail` does not mean the same thing for every model: for rocks it
//! scales Gaussian jitter (`0.3 * detail`), for game assets it is the
//! per-vertex spike probability. Tree, building and vehicle ignore it.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::Deserialize;
use tracing::{debug, info};

use crate::combine::{combine, combine_transformed};
use crate::error::GenerateError;
use crate::mesh::Mesh;
use crate::modifiers::{
    GaussianJitter, MeshApply, RandomSpikes, StochasticModifier, Transform, UniformScale,
};
use crate::primitives::{cone, cuboid, cylinder, icosahedron, icosphere};

// Tree
const TRUNK_RADIUS: f32 = 0.1;
const TRUNK_HEIGHT: f32 = 2.0;
const LEAVES_RADIUS: f32 = 1.0;
/// Leaves centre height as a multiple of the trunk height
const LEAVES_HEIGHT_FACTOR: f32 = 1.25;

// Rock
const ROCK_RADIUS: f32 = 1.0;
const ROCK_JITTER_PER_DETAIL: f32 = 0.3;

// Building
const BUILDING_EXTENTS: Vec3 = Vec3::new(2.0, 3.0, 2.0);
const ROOF_RADIUS: f32 = 1.2;
const ROOF_HEIGHT: f32 = 1.0;

// Vehicle: length along X, height along Y, width along Z
const BODY_EXTENTS: Vec3 = Vec3::new(3.0, 1.0, 1.5);
const WHEEL_RADIUS: f32 = 0.4;
const WHEEL_WIDTH: f32 = 0.3;
const WHEEL_OFFSET_X: f32 = 1.0;
const WHEEL_OFFSET_Z: f32 = 0.9;

// Game asset
const SPIKE_MIN_FACTOR: f32 = 1.2;
const SPIKE_MAX_FACTOR: f32 = 1.8;

/// The fixed set of model types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ModelType {
    Tree,
    Rock,
    Building,
    Vehicle,
    GameAsset,
}

impl ModelType {
    pub const ALL: [ModelType; 5] = [
        ModelType::Tree,
        ModelType::Rock,
        ModelType::Building,
        ModelType::Vehicle,
        ModelType::GameAsset,
    ];

    /// Canonical lowercase tag
    pub fn tag(self) -> &'static str {
        match self {
            ModelType::Tree => "tree",
            ModelType::Rock => "rock",
            ModelType::Building => "building",
            ModelType::Vehicle => "vehicle",
            ModelType::GameAsset => "game-asset",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ModelType::Tree => "Tree",
            ModelType::Rock => "Rock",
            ModelType::Building => "Building",
            ModelType::Vehicle => "Vehicle",
            ModelType::GameAsset => "Game Asset",
        }
    }

    /// Whether the generator draws from the random source
    pub fn is_stochastic(self) -> bool {
        matches!(self, ModelType::Rock | ModelType::GameAsset)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ModelType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(ModelType::Tree),
            "rock" => Ok(ModelType::Rock),
            "building" => Ok(ModelType::Building),
            "vehicle" => Ok(ModelType::Vehicle),
            "game-asset" | "game_asset" | "gameasset" | "game asset" => Ok(ModelType::GameAsset),
            _ => Err(GenerateError::UnknownModelType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ModelType {
    type Error = GenerateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Tessellation resolutions used by the generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Radial sections of the tree trunk
    pub trunk_sections: u32,
    /// Icosphere subdivisions of the tree leaves
    pub leaf_subdivisions: u32,
    /// Icosphere subdivisions of the rock
    pub rock_subdivisions: u32,
    /// Radial sections of the building roof (4 = pyramid)
    pub roof_sections: u32,
    /// Radial sections of each vehicle wheel
    pub wheel_sections: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trunk_sections: 6,
            leaf_subdivisions: 1,
            rock_subdivisions: 1,
            roof_sections: 4,
            wheel_sections: 8,
        }
    }
}

/// Generate a model with a seeded random source
///
/// With `seed = None` a seed is drawn from the thread RNG and logged, so
/// any output can still be reproduced.
pub fn generate(
    model: ModelType,
    size: f32,
    detail: f32,
    seed: Option<u64>,
) -> Result<Mesh, GenerateError> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    debug!(%model, seed, "seeding generator");
    let mut rng = Pcg64::seed_from_u64(seed);
    generate_with_rng(model, size, detail, &GeneratorConfig::default(), &mut rng)
}

/// Parse a model-type tag, then [`generate`]
pub fn generate_by_tag(
    tag: &str,
    size: f32,
    detail: f32,
    seed: Option<u64>,
) -> Result<Mesh, GenerateError> {
    let model: ModelType = tag.parse()?;
    generate(model, size, detail, seed)
}

/// Generate a model, drawing all randomness from `rng`
///
/// # Errors
/// - `InvalidParameter` if `size` is not finite and > 0, if `detail` is
///   not finite, or if `config` holds an invalid tessellation value
pub fn generate_with_rng<R: Rng + ?Sized>(
    model: ModelType,
    size: f32,
    detail: f32,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Mesh, GenerateError> {
    if !(size.is_finite() && size > 0.0) {
        return Err(GenerateError::invalid("size", size, "must be finite and > 0"));
    }
    if !detail.is_finite() {
        return Err(GenerateError::invalid("detail", detail, "must be finite"));
    }

    let mut mesh = match model {
        ModelType::Tree => tree(config)?,
        ModelType::Rock => rock(detail, config, rng)?,
        ModelType::Building => building(config)?,
        ModelType::Vehicle => vehicle(config)?,
        ModelType::GameAsset => game_asset(detail, rng),
    };
    mesh.apply(UniformScale(size));
    mesh.validate()?;

    info!(
        %model,
        size,
        detail,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "generated model"
    );
    Ok(mesh)
}

/// Trunk standing on the origin with an icosphere crown above it
fn tree(config: &GeneratorConfig) -> Result<Mesh, GenerateError> {
    let mut trunk = cylinder(TRUNK_RADIUS, TRUNK_HEIGHT, config.trunk_sections)?;
    trunk.apply(Transform::translate(0.0, TRUNK_HEIGHT * 0.5, 0.0));

    let mut leaves = icosphere(config.leaf_subdivisions, LEAVES_RADIUS)?;
    leaves.apply(Transform::translate(
        0.0,
        TRUNK_HEIGHT * LEAVES_HEIGHT_FACTOR,
        0.0,
    ));

    debug!(
        trunk = trunk.vertex_count(),
        leaves = leaves.vertex_count(),
        "tree parts"
    );
    Ok(combine(&[&trunk, &leaves]))
}

/// Icosphere with Gaussian jitter of `0.3 * detail` per axis
fn rock<R: Rng + ?Sized>(
    detail: f32,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Mesh, GenerateError> {
    let mut mesh = icosphere(config.rock_subdivisions, ROCK_RADIUS)?;
    GaussianJitter {
        amplitude: ROCK_JITTER_PER_DETAIL * detail,
    }
    .apply_with(&mut mesh, rng);
    Ok(mesh)
}

/// Box with a pyramid roof resting on its top face
fn building(config: &GeneratorConfig) -> Result<Mesh, GenerateError> {
    let base = cuboid(BUILDING_EXTENTS)?;

    let mut roof = cone(ROOF_RADIUS, ROOF_HEIGHT, config.roof_sections)?;
    roof.apply(Transform::translate(0.0, BUILDING_EXTENTS.y * 0.5, 0.0));

    Ok(combine(&[&base, &roof]))
}

/// Box body with four wheels at the corners
///
/// Wheel axles run across the body (along Z) so the wheels roll along
/// the body's length (X).
fn vehicle(config: &GeneratorConfig) -> Result<Mesh, GenerateError> {
    let body = cuboid(BODY_EXTENTS)?;
    let wheel = cylinder(WHEEL_RADIUS, WHEEL_WIDTH, config.wheel_sections)?;

    let mut parts = Vec::with_capacity(5);
    parts.push((&body, Transform::identity()));
    for x in [-WHEEL_OFFSET_X, WHEEL_OFFSET_X] {
        for z in [-WHEEL_OFFSET_Z, WHEEL_OFFSET_Z] {
            let placement = Transform::rotate_x(90.0).then(Transform::translate(x, 0.0, z));
            parts.push((&wheel, placement));
        }
    }

    debug!(parts = parts.len(), "vehicle parts");
    Ok(combine_transformed(&parts))
}

/// Icosahedron with randomly extruded vertices
fn game_asset<R: Rng + ?Sized>(detail: f32, rng: &mut R) -> Mesh {
    let mut mesh = icosahedron();
    RandomSpikes {
        probability: detail,
        min_factor: SPIKE_MIN_FACTOR,
        max_factor: SPIKE_MAX_FACTOR,
    }
    .apply_with(&mut mesh, rng);
    mesh
}
