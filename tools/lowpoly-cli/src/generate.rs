//! Generate command - one model, one package

use anyhow::Result;
use clap::Args;
use lowpoly_core::{default_model_name, GenerationRequest, GeneratorConfig, ModelType, Strictness};
use std::path::PathBuf;

use crate::job::{self, Job};
use crate::manifest::{default_formats, LowpolyManifest};

/// Model parameters shared by `generate` and `inspect`
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Model type: tree, rock, building, vehicle, game-asset
    #[arg(short, long)]
    pub model: ModelType,

    /// Uniform scale factor (0.5 - 2.0 in strict mode)
    #[arg(short, long, default_value_t = 1.0)]
    pub size: f32,

    /// Detail level (0.0 - 1.0 in strict mode); only rock and game-asset use it
    #[arg(short, long, default_value_t = 0.5)]
    pub detail: f32,

    /// Seed for reproducible output (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reject size/detail outside the slider ranges
    #[arg(long)]
    pub strict: bool,

    /// Read [tessellation] overrides from a lowpoly.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ModelArgs {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            model: self.model,
            size: self.size,
            detail: self.detail,
            seed: self.seed,
        }
    }

    pub fn strictness(&self) -> Strictness {
        if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }

    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        match &self.config {
            Some(path) => Ok(LowpolyManifest::load(path)?.tessellation),
            None => Ok(GeneratorConfig::default()),
        }
    }
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub params: ModelArgs,

    /// Package name (default: model_ + 8 random hex digits)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Export format, repeatable: glb, obj, stl
    #[arg(short = 'f', long = "format", default_values_t = default_formats())]
    pub formats: Vec<String>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = args.params.generator_config()?;
    let name = args
        .name
        .unwrap_or_else(|| default_model_name(&mut rand::rng()));

    let job = Job {
        request: args.params.request(),
        name,
        formats: args.formats,
    };
    let path = job::run(&job, args.params.strictness(), &config, &args.output)?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(dir: PathBuf) -> GenerateArgs {
        GenerateArgs {
            params: ModelArgs {
                model: ModelType::Tree,
                size: 1.0,
                detail: 0.5,
                seed: Some(5),
                strict: true,
                config: None,
            },
            name: Some("pine".into()),
            formats: vec!["stl".into()],
            output: dir,
        }
    }

    #[test]
    fn test_generate_writes_named_package() {
        let dir = tempfile::tempdir().unwrap();
        execute(args(dir.path().to_path_buf())).unwrap();
        assert!(dir.path().join("pine_package.zip").is_file());
    }

    #[test]
    fn test_generate_uses_config_tessellation() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("lowpoly.toml");
        fs::write(&config_path, "[tessellation]\ntrunk_sections = 12\n").unwrap();

        let mut args = args(dir.path().to_path_buf());
        args.params.config = Some(config_path);
        assert_eq!(args.params.generator_config().unwrap().trunk_sections, 12);
        execute(args).unwrap();
    }

    #[test]
    fn test_generate_strict_out_of_range_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path().to_path_buf());
        args.params.size = 3.0;
        assert!(execute(args).is_err());
        assert!(!dir.path().join("pine_package.zip").exists());
    }
}
