//! Polyhedral primitives: cuboid, icosahedron, icosphere

use glam::Vec3;
use hashbrown::HashMap;

use super::MAX_SUBDIVISIONS;
use crate::error::{require_positive, GenerateError};
use crate::mesh::{Mesh, MeshBuilder};

/// Icosahedron faces, CCW seen from outside
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Generate an axis-aligned box centred on the origin
///
/// # Arguments
/// * `extents` - Full size along X, Y and Z (each > 0)
///
/// # Returns
/// Mesh with 8 shared corner vertices and 12 triangles
pub fn cuboid(extents: Vec3) -> Result<Mesh, GenerateError> {
    let half = Vec3::new(
        require_positive("extent_x", extents.x)?,
        require_positive("extent_y", extents.y)?,
        require_positive("extent_z", extents.z)?,
    ) * 0.5;

    let mut mesh = Mesh::default();

    // Corner i has +x if bit 0 is set, +y if bit 1, +z if bit 2
    for i in 0..8u32 {
        let sign = |bit: u32| if i & bit != 0 { 1.0 } else { -1.0 };
        mesh.add_vertex(half * Vec3::new(sign(1), sign(2), sign(4)));
    }

    // Two triangles per side, CCW from outside
    let quads: [[u32; 4]; 6] = [
        [0, 4, 6, 2], // -X
        [1, 3, 7, 5], // +X
        [0, 1, 5, 4], // -Y
        [2, 6, 7, 3], // +Y
        [0, 2, 3, 1], // -Z
        [4, 5, 7, 6], // +Z
    ];
    for [a, b, c, d] in quads {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    Ok(mesh)
}

/// Generate a regular icosahedron with unit circumradius
///
/// # Returns
/// Mesh with 12 vertices and 20 triangles
pub fn icosahedron() -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    let mut mesh = Mesh::default();
    for corner in corners {
        mesh.add_vertex(corner.normalize());
    }
    for [a, b, c] in ICOSAHEDRON_FACES {
        mesh.add_triangle(a, b, c);
    }
    mesh
}

/// Generate an icosphere by recursive subdivision of an icosahedron
///
/// Each level splits every triangle into four, projecting the new edge
/// midpoints onto the sphere. Midpoints are shared between neighbouring
/// triangles so the surface stays closed.
///
/// # Arguments
/// * `subdivisions` - Subdivision levels (0 = icosahedron, max 6)
/// * `radius` - Sphere radius (> 0)
///
/// # Returns
/// Mesh with `10 * 4^n + 2` vertices and `20 * 4^n` triangles
pub fn icosphere(subdivisions: u32, radius: f32) -> Result<Mesh, GenerateError> {
    if subdivisions > MAX_SUBDIVISIONS {
        return Err(GenerateError::invalid(
            "subdivisions",
            subdivisions,
            "must be between 0 and 6",
        ));
    }
    let radius = require_positive("radius", radius)?;

    let base = icosahedron();
    let mut positions: Vec<Vec3> = base
        .vertices()
        .iter()
        .map(|&v| Vec3::from_array(v) * radius)
        .collect();
    let mut faces: Vec<[u32; 3]> = base.faces().to_vec();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
        let mut next_faces = Vec::with_capacity(faces.len() * 4);

        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let mid = (positions[a as usize] + positions[b as usize]).normalize() * radius;
                positions.push(mid);
                positions.len() as u32 - 1
            })
        };

        for &[a, b, c] in &faces {
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);

            next_faces.push([a, ab, ca]);
            next_faces.push([b, bc, ab]);
            next_faces.push([c, ca, bc]);
            next_faces.push([ab, bc, ca]);
        }

        faces = next_faces;
    }

    let mut mesh = Mesh::default();
    mesh.reserve(positions.len(), faces.len());
    for p in positions {
        mesh.add_vertex(p);
    }
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }
    Ok(mesh)
}
