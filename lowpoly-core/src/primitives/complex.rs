//! Revolved primitives: cylinder, cone

use glam::Vec3;
use std::f32::consts::TAU;

use super::check_sections;
use crate::error::{require_positive, GenerateError};
use crate::mesh::{Mesh, MeshBuilder};

/// Point on a horizontal ring of `radius` at height `y`
fn ring_point(radius: f32, y: f32, i: u32, sections: u32) -> Vec3 {
    let theta = (i as f32 / sections as f32) * TAU;
    Vec3::new(radius * theta.cos(), y, radius * theta.sin())
}

/// Generate a capped cylinder along the Y axis, centred on the origin
///
/// # Arguments
/// * `radius` - Cylinder radius (> 0)
/// * `height` - Cylinder height (> 0)
/// * `sections` - Number of radial divisions (min 3, max 256)
///
/// # Returns
/// Mesh with `2 * sections + 2` vertices (two rings plus two cap centres)
/// and `4 * sections` triangles
pub fn cylinder(radius: f32, height: f32, sections: u32) -> Result<Mesh, GenerateError> {
    let radius = require_positive("radius", radius)?;
    let height = require_positive("height", height)?;
    let sections = check_sections(sections)?;

    let mut mesh = Mesh::default();
    mesh.reserve((2 * sections + 2) as usize, (4 * sections) as usize);
    let half_height = height * 0.5;

    // Bottom ring: 0..sections, top ring: sections..2*sections
    for i in 0..sections {
        mesh.add_vertex(ring_point(radius, -half_height, i, sections));
    }
    for i in 0..sections {
        mesh.add_vertex(ring_point(radius, half_height, i, sections));
    }
    let bottom_center = mesh.add_vertex(Vec3::new(0.0, -half_height, 0.0));
    let top_center = mesh.add_vertex(Vec3::new(0.0, half_height, 0.0));

    for i in 0..sections {
        let next = (i + 1) % sections;
        let (b0, b1) = (i, next);
        let (t0, t1) = (sections + i, sections + next);

        // Side quad, CCW seen from outside
        mesh.add_triangle(b0, t0, t1);
        mesh.add_triangle(b0, t1, b1);

        // CCW winding for -Y normal (viewed from below)
        mesh.add_triangle(bottom_center, b0, b1);
        mesh.add_triangle(top_center, t1, t0);
    }

    Ok(mesh)
}

/// Generate a cone with its base ring on the XZ plane and apex on +Y
///
/// # Arguments
/// * `radius` - Base radius (> 0)
/// * `height` - Apex height above the base (> 0)
/// * `sections` - Number of radial divisions (min 3, max 256)
///
/// # Returns
/// Mesh with `sections + 2` vertices (ring, apex, base centre) and
/// `2 * sections` triangles
pub fn cone(radius: f32, height: f32, sections: u32) -> Result<Mesh, GenerateError> {
    let radius = require_positive("radius", radius)?;
    let height = require_positive("height", height)?;
    let sections = check_sections(sections)?;

    let mut mesh = Mesh::default();
    mesh.reserve((sections + 2) as usize, (2 * sections) as usize);

    for i in 0..sections {
        mesh.add_vertex(ring_point(radius, 0.0, i, sections));
    }
    let apex = mesh.add_vertex(Vec3::new(0.0, height, 0.0));
    let base_center = mesh.add_vertex(Vec3::ZERO);

    for i in 0..sections {
        let next = (i + 1) % sections;
        mesh.add_triangle(i, apex, next);
        mesh.add_triangle(base_center, i, next);
    }

    Ok(mesh)
}
