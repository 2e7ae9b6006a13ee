//! Procedural mesh primitives
//!
//! Closed, consistently wound (CCW seen from outside) triangle meshes with
//! shared vertices. All primitives are +Y up. Bad dimensions or
//! tessellation values fail with `GenerateError::InvalidParameter`
//! instead of being clamped.

mod complex;
mod simple;

pub use complex::{cone, cylinder};
pub use simple::{cuboid, icosahedron, icosphere};

use glam::Vec3;

use crate::error::GenerateError;
use crate::mesh::Mesh;

/// Minimum radial sections for cylinders and cones
pub const MIN_SECTIONS: u32 = 3;
/// Maximum radial sections for cylinders and cones
pub const MAX_SECTIONS: u32 = 256;
/// Maximum icosphere subdivision level (40,962 vertices)
pub const MAX_SUBDIVISIONS: u32 = 6;

/// A primitive kind together with its shape parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cylinder {
        radius: f32,
        height: f32,
        sections: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        sections: u32,
    },
    Icosphere {
        subdivisions: u32,
        radius: f32,
    },
    Cuboid {
        extents: Vec3,
    },
    Icosahedron,
}

impl Primitive {
    /// Construct the primitive mesh
    pub fn build(self) -> Result<Mesh, GenerateError> {
        match self {
            Primitive::Cylinder {
                radius,
                height,
                sections,
            } => cylinder(radius, height, sections),
            Primitive::Cone {
                radius,
                height,
                sections,
            } => cone(radius, height, sections),
            Primitive::Icosphere {
                subdivisions,
                radius,
            } => icosphere(subdivisions, radius),
            Primitive::Cuboid { extents } => cuboid(extents),
            Primitive::Icosahedron => Ok(icosahedron()),
        }
    }
}

pub(crate) fn check_sections(sections: u32) -> Result<u32, GenerateError> {
    if (MIN_SECTIONS..=MAX_SECTIONS).contains(&sections) {
        Ok(sections)
    } else {
        Err(GenerateError::invalid(
            "sections",
            sections,
            "must be between 3 and 256",
        ))
    }
}
