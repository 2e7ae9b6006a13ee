//! README manifest placed next to the exported files

use lowpoly_core::Mesh;

use crate::format::ExportFormat;

pub const LICENSE_TEXT: &str = "Commercial use allowed. Can be sold on 3D marketplaces.";

/// Render the README text for `mesh`
///
/// Counts are read from the mesh itself; `formats` is listed in the given
/// order.
pub fn readme(mesh: &Mesh, name: &str, formats: &[ExportFormat]) -> String {
    let formats = formats
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "# {name} - Low Poly 3D Model\n\
         \n\
         ## Specifications:\n\
         - Polygons: {faces}\n\
         - Vertices: {vertices}\n\
         - Format: {formats}\n\
         - Style: Low Poly\n\
         \n\
         ## License:\n\
         {LICENSE_TEXT}\n\
         Created with lowpoly {version}.\n",
        faces = mesh.face_count(),
        vertices = mesh.vertex_count(),
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Archive entry name of the README
pub fn readme_file_name(name: &str) -> String {
    format!("README_{name}.txt")
}
