//! Build command - run every model in a lowpoly.toml

use anyhow::{Context, Result};
use clap::Args;
use lowpoly_core::default_model_name;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::job::{self, Job};
use crate::manifest::LowpolyManifest;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to lowpoly.toml manifest
    #[arg(default_value = "lowpoly.toml")]
    pub manifest: PathBuf,

    /// Output directory (overrides manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let paths = build(&args.manifest, args.output.as_deref())?;
    for path in &paths {
        println!("{}", path.display());
    }
    Ok(())
}

/// Build every model, stopping at the first failure
pub fn build(manifest_path: &Path, output: Option<&Path>) -> Result<Vec<PathBuf>> {
    let manifest = LowpolyManifest::load(manifest_path)?;
    manifest.validate()?;

    // Relative output dirs resolve against the manifest location
    let project_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let out_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_dir.join(&manifest.output.dir));

    info!(
        manifest = %manifest_path.display(),
        models = manifest.models.len(),
        "building packages"
    );

    let mut rng = rand::rng();
    let mut paths = Vec::with_capacity(manifest.models.len());
    for (i, entry) in manifest.models.iter().enumerate() {
        let job = Job {
            request: entry.request(),
            name: entry
                .name
                .clone()
                .unwrap_or_else(|| default_model_name(&mut rng)),
            formats: entry
                .formats
                .clone()
                .unwrap_or_else(|| manifest.output.formats.clone()),
        };
        let path = job::run(&job, manifest.strictness(), &manifest.tessellation, &out_dir)
            .with_context(|| format!("Model #{} ({}) failed", i + 1, entry.model))?;
        paths.push(path);
    }

    info!(count = paths.len(), dir = %out_dir.display(), "build complete");
    Ok(paths)
}
