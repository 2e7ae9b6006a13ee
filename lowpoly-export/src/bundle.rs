//! Export bundles and ZIP packaging
//!
//! A bundle holds one entry per successfully encoded format plus the
//! README, in request order. Formats that cannot be encoded are reported
//! in `failed` instead of aborting the export, unless nothing succeeds.

use std::io::{Cursor, Write};

use hashbrown::HashSet;
use lowpoly_core::Mesh;
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ExportError, FormatFailure, FormatFailureReason};
use crate::format::ExportFormat;
use crate::readme::{readme, readme_file_name};

/// Encoded files ready to be archived
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    entries: Vec<(String, Vec<u8>)>,
    formats: Vec<ExportFormat>,
    failed: Vec<FormatFailure>,
}

impl ExportBundle {
    /// Encode `mesh` in every requested format
    ///
    /// Requests are parsed case-insensitively and duplicates collapse to
    /// their first occurrence.
    ///
    /// # Errors
    /// - `EmptyFormatSet` if `formats` is empty
    /// - `InvalidName` if `name` is unusable as a file stem
    /// - `InvalidMesh` if a face references a missing vertex
    /// - `AllFormatsFailed` if no requested format could be encoded
    pub fn build<S: AsRef<str>>(
        mesh: &Mesh,
        name: &str,
        formats: &[S],
    ) -> Result<Self, ExportError> {
        if formats.is_empty() {
            return Err(ExportError::EmptyFormatSet);
        }
        validate_name(name)?;
        mesh.validate()?;

        let mut seen_formats = HashSet::new();
        let mut seen_unknown = HashSet::new();
        let mut entries = Vec::with_capacity(formats.len() + 1);
        let mut included = Vec::with_capacity(formats.len());
        let mut failed = Vec::new();

        for requested in formats {
            let requested = requested.as_ref();
            let format = match requested.parse::<ExportFormat>() {
                Ok(format) => format,
                Err(failure) => {
                    if seen_unknown.insert(requested.trim().to_ascii_lowercase()) {
                        warn!(format = requested, "skipping unsupported export format");
                        failed.push(failure);
                    }
                    continue;
                }
            };
            if !seen_formats.insert(format) {
                continue;
            }

            match format.encode(mesh, name) {
                Ok(bytes) => {
                    entries.push((format!("{name}.{}", format.extension()), bytes));
                    included.push(format);
                }
                Err(err) => {
                    warn!(%format, error = %err, "failed to encode export format");
                    failed.push(FormatFailure {
                        requested: requested.to_string(),
                        reason: FormatFailureReason::EncodeFailed(err.to_string()),
                    });
                }
            }
        }

        if included.is_empty() {
            return Err(ExportError::AllFormatsFailed(failed));
        }

        entries.push((
            readme_file_name(name),
            readme(mesh, name, &included).into_bytes(),
        ));

        Ok(Self {
            entries,
            formats: included,
            failed,
        })
    }

    /// `(file name, contents)` in archive order, README last
    pub fn entries(&self) -> &[(String, Vec<u8>)] {
        &self.entries
    }

    /// Formats that were encoded, in request order
    pub fn formats(&self) -> &[ExportFormat] {
        &self.formats
    }

    pub fn failed(&self) -> &[FormatFailure] {
        &self.failed
    }

    /// Write every entry into a Deflate-compressed ZIP archive in memory
    pub fn to_zip(&self) -> Result<Cursor<Vec<u8>>, ExportError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (file_name, bytes) in &self.entries {
            zip.start_file(file_name.as_str(), options)?;
            zip.write_all(bytes)?;
        }

        let mut archive = zip.finish()?;
        archive.set_position(0);
        Ok(archive)
    }
}

/// A finished archive plus the formats left out of it
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedArchive {
    pub archive: Vec<u8>,
    pub failed: Vec<FormatFailure>,
}

/// Encode `mesh` in `formats` and package the result as a ZIP archive
pub fn export_bundle<S: AsRef<str>>(
    mesh: &Mesh,
    name: &str,
    formats: &[S],
) -> Result<ExportedArchive, ExportError> {
    let bundle = ExportBundle::build(mesh, name, formats)?;
    let archive = bundle.to_zip()?.into_inner();

    info!(
        model = name,
        formats = ?bundle.formats(),
        failed = bundle.failed().len(),
        bytes = archive.len(),
        "exported bundle"
    );

    Ok(ExportedArchive {
        archive,
        failed: bundle.failed,
    })
}

/// Download name of the archive for `name`
pub fn archive_file_name(name: &str) -> String {
    format!("{name}_package.zip")
}

fn validate_name(name: &str) -> Result<(), ExportError> {
    let bad = name.trim().is_empty()
        || name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control());
    if bad {
        return Err(ExportError::InvalidName(name.to_string()));
    }
    Ok(())
}
