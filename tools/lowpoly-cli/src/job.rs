//! Generate-then-package pipeline shared by all exporting commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lowpoly_core::{GenerationRequest, GeneratorConfig, Mesh, Strictness};
use lowpoly_export::{archive_file_name, export_bundle};
use tracing::{info, warn};

/// One model to generate and package
#[derive(Debug, Clone)]
pub struct Job {
    pub request: GenerationRequest,
    pub name: String,
    pub formats: Vec<String>,
}

/// Generate the mesh for `request`, logging its statistics
pub fn generate_mesh(
    request: &GenerationRequest,
    strictness: Strictness,
    config: &GeneratorConfig,
) -> Result<Mesh> {
    let mesh = request
        .generate(strictness, config)
        .with_context(|| format!("Failed to generate {}", request.model.label()))?;

    let stats = mesh.stats();
    info!(
        model = %request.model,
        polygons = stats.face_count,
        vertices = stats.vertex_count,
        "mesh ready"
    );
    Ok(mesh)
}

/// Run `job` and write `{name}_package.zip` into `out_dir`
///
/// Returns the path of the written archive.
pub fn run(
    job: &Job,
    strictness: Strictness,
    config: &GeneratorConfig,
    out_dir: &Path,
) -> Result<PathBuf> {
    let mesh = generate_mesh(&job.request, strictness, config)?;

    let exported = export_bundle(&mesh, &job.name, &job.formats)
        .with_context(|| format!("Failed to export {}", job.name))?;
    for failure in &exported.failed {
        warn!(format = %failure.requested, reason = %failure.reason, "format left out of package");
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    let path = out_dir.join(archive_file_name(&job.name));
    fs::write(&path, &exported.archive)
        .with_context(|| format!("Failed to write package: {}", path.display()))?;

    info!(path = %path.display(), bytes = exported.archive.len(), "wrote package");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowpoly_core::ModelType;

    fn job(formats: &[&str]) -> Job {
        Job {
            request: GenerationRequest::new(ModelType::Building, 1.0, 0.5).with_seed(1),
            name: "house".into(),
            formats: formats.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_run_writes_package() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");
        let path = run(
            &job(&["glb", "obj"]),
            Strictness::Strict,
            &GeneratorConfig::default(),
            &out,
        )
        .unwrap();

        assert_eq!(path, out.join("house_package.zip"));
        let file = fs::File::open(&path).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(names, ["README_house.txt", "house.glb", "house.obj"]);
    }

    #[test]
    fn test_run_fails_when_no_format_works() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &job(&["fbx"]),
            Strictness::Lenient,
            &GeneratorConfig::default(),
            dir.path(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to export house"));
        assert!(!dir.path().join("house_package.zip").exists());
    }

    #[test]
    fn test_strict_rejects_out_of_range_detail() {
        let request = GenerationRequest::new(ModelType::Rock, 1.0, 1.5);
        let config = GeneratorConfig::default();
        assert!(generate_mesh(&request, Strictness::Strict, &config).is_err());
        assert!(generate_mesh(&request, Strictness::Lenient, &config).is_ok());
    }
}
