//! Mesh export and packaging
//!
//! Serializes a [`lowpoly_core::Mesh`] to GLB, OBJ and binary STL and
//! bundles the files with a README into one ZIP archive.
//!
//! ```
//! use lowpoly_core::{generate, ModelType};
//! use lowpoly_export::{archive_file_name, export_bundle};
//!
//! let mesh = generate(ModelType::Building, 1.0, 0.5, Some(1))?;
//! let exported = export_bundle(&mesh, "house", &["glb", "obj"])?;
//! assert!(exported.failed.is_empty());
//! assert_eq!(archive_file_name("house"), "house_package.zip");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bundle;
pub mod error;
pub mod format;
pub mod glb;
pub mod obj;
pub mod readme;
pub mod stl;

pub use bundle::{archive_file_name, export_bundle, ExportBundle, ExportedArchive};
pub use error::{ExportError, FormatFailure, FormatFailureReason};
pub use format::ExportFormat;
pub use glb::encode_glb;
pub use obj::encode_obj;
pub use readme::readme;
pub use stl::encode_stl;
