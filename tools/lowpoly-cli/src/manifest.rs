//! lowpoly.toml manifest parsing

use anyhow::{Context, Result};
use lowpoly_core::{GenerationRequest, GeneratorConfig, ModelType, Strictness};
use lowpoly_export::ExportFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// lowpoly.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct LowpolyManifest {
    #[serde(default)]
    pub output: OutputSection,

    /// Overrides for primitive resolutions
    #[serde(default)]
    pub tessellation: GeneratorConfig,

    #[serde(default, rename = "model")]
    pub models: Vec<ModelEntry>,
}

/// Where and how packages are written
#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Directory for `{name}_package.zip` files, relative to the manifest
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Formats for models that don't list their own
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,

    /// Require size in 0.5..=2.0 and detail in 0.0..=1.0
    #[serde(default)]
    pub strict: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            formats: default_formats(),
            strict: false,
        }
    }
}

/// One `[[model]]` entry
#[derive(Debug, Deserialize)]
pub struct ModelEntry {
    pub model: ModelType,
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_detail")]
    pub detail: f32,
    pub seed: Option<u64>,
    /// Package name; random `model_xxxxxxxx` when absent
    pub name: Option<String>,
    pub formats: Option<Vec<String>>,
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_formats() -> Vec<String> {
    ExportFormat::DEFAULT
        .iter()
        .map(|f| f.extension().to_string())
        .collect()
}

pub fn default_size() -> f32 {
    1.0
}

pub fn default_detail() -> f32 {
    0.5
}

impl LowpolyManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse lowpoly.toml")
    }

    /// Validate manifest fields
    pub fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            anyhow::bail!("lowpoly.toml lists no [[model]] entries");
        }
        // Explicit names become package file names and must be unique
        let mut names: HashMap<&str, usize> = HashMap::new();
        for (i, entry) in self.models.iter().enumerate() {
            if entry.formats.as_ref().unwrap_or(&self.output.formats).is_empty() {
                anyhow::bail!("Model #{} ({}) has an empty format list", i + 1, entry.model);
            }
            if let Some(name) = entry.name.as_deref() {
                if let Some(first) = names.insert(name, i + 1) {
                    anyhow::bail!(
                        "Model #{} reuses name '{}' from model #{}",
                        i + 1,
                        name,
                        first
                    );
                }
            }
        }
        Ok(())
    }

    pub fn strictness(&self) -> Strictness {
        if self.output.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}

impl ModelEntry {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            model: self.model,
            size: self.size,
            detail: self.detail,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_minimal() {
        let manifest = LowpolyManifest::parse(
            r#"
[[model]]
model = "tree"
"#,
        )
        .unwrap();

        assert_eq!(manifest.models.len(), 1);
        let entry = &manifest.models[0];
        assert_eq!(entry.model, ModelType::Tree);
        assert_eq!(entry.size, 1.0);
        assert_eq!(entry.detail, 0.5);
        assert!(entry.seed.is_none());
        assert_eq!(manifest.output.dir, PathBuf::from("."));
        assert_eq!(manifest.output.formats, vec!["glb", "obj"]);
        assert_eq!(manifest.strictness(), Strictness::Lenient);
        assert_eq!(manifest.tessellation, GeneratorConfig::default());
        manifest.validate().unwrap();
    }

    #[test]
    fn test_manifest_full() {
        let manifest = LowpolyManifest::parse(
            r#"
[output]
dir = "packages"
formats = ["stl"]
strict = true

[tessellation]
wheel_sections = 12

[[model]]
model = "game-asset"
size = 1.5
detail = 0.9
seed = 99
name = "crystal"
formats = ["glb", "obj"]

[[model]]
model = "vehicle"
"#,
        )
        .unwrap();

        assert_eq!(manifest.output.dir, PathBuf::from("packages"));
        assert_eq!(manifest.strictness(), Strictness::Strict);
        assert_eq!(manifest.tessellation.wheel_sections, 12);
        assert_eq!(manifest.tessellation.trunk_sections, 6);

        let request = manifest.models[0].request();
        assert_eq!(request.model, ModelType::GameAsset);
        assert_eq!(request.seed, Some(99));
        assert_eq!(manifest.models[0].name.as_deref(), Some("crystal"));
        assert!(manifest.models[1].formats.is_none());
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let err = LowpolyManifest::parse(
            r#"
[[model]]
model = "spaceship"
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("spaceship"));
    }

    #[test]
    fn test_validate_requires_models() {
        let manifest = LowpolyManifest::parse("").unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_formats() {
        let manifest = LowpolyManifest::parse(
            r#"
[[model]]
model = "rock"
formats = []
"#,
        )
        .unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let manifest = LowpolyManifest::parse(
            r#"
[[model]]
model = "rock"
name = "boulder"

[[model]]
model = "tree"

[[model]]
model = "building"
name = "boulder"
"#,
        )
        .unwrap();
        let err = manifest.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model #3 reuses name 'boulder' from model #1"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = LowpolyManifest::load(Path::new("/definitely/not/here/lowpoly.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
