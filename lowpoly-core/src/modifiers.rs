//! Mesh modifiers
//!
//! Modifiers rewrite vertex positions in place while a generator still
//! owns the mesh. Face topology is never touched.
//!
//! # Fluent API
//!
//! ```
//! use lowpoly_core::modifiers::{MeshApply, Transform, UniformScale};
//! use lowpoly_core::primitives::cylinder;
//!
//! let mut wheel = cylinder(0.4, 0.3, 8)?;
//! wheel
//!     .apply(Transform::rotate_x(90.0))
//!     .apply(Transform::translate(1.0, 0.0, 0.9))
//!     .apply(UniformScale(2.0));
//! # Ok::<(), lowpoly_core::GenerateError>(())
//! ```

use glam::{Mat4, Vec3};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::mesh::Mesh;

/// Deterministic modifier
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut Mesh);
}

/// Modifier that draws from a caller-supplied random source
pub trait StochasticModifier {
    /// Apply this modifier, drawing every random value from `rng`
    fn apply_with<R: Rng + ?Sized>(&self, mesh: &mut Mesh, rng: &mut R);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for Mesh {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Transform vertex positions with a 4x4 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Identity transform (no change)
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::from_translation(Vec3::new(x, y, z)),
        }
    }

    /// Rotation around the X axis (in degrees)
    pub fn rotate_x(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_x(degrees.to_radians()),
        }
    }

    /// Rotation around the Y axis (in degrees)
    pub fn rotate_y(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_y(degrees.to_radians()),
        }
    }

    /// Rotation around the Z axis (in degrees)
    pub fn rotate_z(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_z(degrees.to_radians()),
        }
    }

    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// `other` applied after `self`
    pub fn then(self, other: Transform) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &mut Mesh) {
        for pos in mesh.vertices_mut() {
            *pos = self
                .matrix
                .transform_point3(Vec3::from_array(*pos))
                .to_array();
        }
    }
}

/// Multiply every coordinate by a factor
///
/// Unlike `Transform` this never goes through a matrix, so a factor of
/// 1.0 is an exact identity and 2.0 exactly doubles the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformScale(pub f32);

impl MeshModifier for UniformScale {
    fn apply(&self, mesh: &mut Mesh) {
        let s = self.0;
        for pos in mesh.vertices_mut() {
            *pos = pos.map(|c| c * s);
        }
    }
}

/// Displace every vertex by independent 3D Gaussian noise
///
/// Each axis gets a standard-normal sample times `amplitude`. The
/// amplitude is not bounded; negative values just flip the noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianJitter {
    pub amplitude: f32,
}

impl StochasticModifier for GaussianJitter {
    fn apply_with<R: Rng + ?Sized>(&self, mesh: &mut Mesh, rng: &mut R) {
        // Zero amplitude must reproduce the input bit for bit (no -0.0 sums)
        if self.amplitude == 0.0 {
            return;
        }

        for pos in mesh.vertices_mut() {
            for c in pos.iter_mut() {
                let n: f32 = rng.sample(StandardNormal);
                *c += n * self.amplitude;
            }
        }
    }
}

/// Push randomly chosen vertices away from the origin
///
/// Each vertex is selected with `probability`; a selected vertex is
/// multiplied by a factor drawn uniformly from `[min_factor, max_factor]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSpikes {
    pub probability: f32,
    pub min_factor: f32,
    pub max_factor: f32,
}

impl StochasticModifier for RandomSpikes {
    fn apply_with<R: Rng + ?Sized>(&self, mesh: &mut Mesh, rng: &mut R) {
        for pos in mesh.vertices_mut() {
            if rng.random::<f32>() < self.probability {
                let factor = rng.random_range(self.min_factor..=self.max_factor);
                *pos = pos.map(|c| c * factor);
            }
        }
    }
}
