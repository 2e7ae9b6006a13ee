//! Supported interchange formats

use std::fmt;
use std::str::FromStr;

use lowpoly_core::Mesh;

use crate::error::{ExportError, FormatFailure};
use crate::{glb, obj, stl};

/// Formats an export bundle can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Binary glTF 2.0
    Glb,
    /// Wavefront OBJ text
    Obj,
    /// Binary stereolithography triangle soup
    Stl,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Glb, ExportFormat::Obj, ExportFormat::Stl];

    /// Formats used when the caller does not pick any
    pub const DEFAULT: [ExportFormat; 2] = [ExportFormat::Glb, ExportFormat::Obj];

    /// Lowercase file extension, also the archive entry suffix
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Glb => "glb",
            ExportFormat::Obj => "obj",
            ExportFormat::Stl => "stl",
        }
    }

    /// Uppercase name as listed in the README
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Glb => "GLB",
            ExportFormat::Obj => "OBJ",
            ExportFormat::Stl => "STL",
        }
    }

    /// Serialize `mesh` in this format
    pub fn encode(self, mesh: &Mesh, name: &str) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Glb => glb::encode_glb(mesh, name),
            ExportFormat::Obj => Ok(obj::encode_obj(mesh, name)),
            ExportFormat::Stl => Ok(stl::encode_stl(mesh, name)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = FormatFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.extension() == normalized)
            .ok_or_else(|| FormatFailure::unsupported(s))
    }
}
