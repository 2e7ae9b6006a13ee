//! Generation requests
//!
//! The boundary type handed over by a caller (CLI, UI) together with
//! range validation and the "quick generate" randomiser.

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::GenerateError;
use crate::generators::{generate_with_rng, GeneratorConfig, ModelType};
use crate::mesh::Mesh;

/// Size range offered to users
pub const SIZE_RANGE: RangeInclusive<f32> = 0.5..=2.0;
/// Detail range offered to users
pub const DETAIL_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Size range used by quick generation
const QUICK_SIZE_RANGE: RangeInclusive<f32> = 0.5..=1.5;
/// Detail range used by quick generation
const QUICK_DETAIL_RANGE: RangeInclusive<f32> = 0.3..=0.8;

/// How strictly numeric inputs are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Only reject values no generator can use (size <= 0, non-finite)
    #[default]
    Lenient,
    /// Additionally require `size` and `detail` to be inside the user ranges
    Strict,
}

/// One model to generate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest {
    pub model: ModelType,
    pub size: f32,
    pub detail: f32,
    /// Fixed seed for reproducible output; `None` draws a fresh one
    pub seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(model: ModelType, size: f32, detail: f32) -> Self {
        Self {
            model,
            size,
            detail,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random request in the quick-generate ranges, with a fixed seed
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let model = *ModelType::ALL
            .choose(rng)
            .unwrap_or(&ModelType::GameAsset);
        Self {
            model,
            size: rng.random_range(QUICK_SIZE_RANGE),
            detail: rng.random_range(QUICK_DETAIL_RANGE),
            seed: Some(rng.random()),
        }
    }

    /// Check the numeric inputs
    pub fn validate(&self, strictness: Strictness) -> Result<(), GenerateError> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(GenerateError::invalid("size", self.size, "must be finite and > 0"));
        }
        if !self.detail.is_finite() {
            return Err(GenerateError::invalid("detail", self.detail, "must be finite"));
        }
        if strictness == Strictness::Strict {
            if !SIZE_RANGE.contains(&self.size) {
                return Err(GenerateError::invalid(
                    "size",
                    self.size,
                    "must be between 0.5 and 2.0",
                ));
            }
            if !DETAIL_RANGE.contains(&self.detail) {
                return Err(GenerateError::invalid(
                    "detail",
                    self.detail,
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        Ok(())
    }

    /// Validate, then generate with a generator seeded from `seed`
    pub fn generate(
        &self,
        strictness: Strictness,
        config: &GeneratorConfig,
    ) -> Result<Mesh, GenerateError> {
        self.validate(strictness)?;
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg64::seed_from_u64(seed);
        generate_with_rng(self.model, self.size, self.detail, config, &mut rng)
    }
}

/// Default export name: `model_` followed by 8 lowercase hex digits
pub fn default_model_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let id: [u8; 4] = rng.random();
    format!("model_{}", hex::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_accepts_out_of_range() {
        let request = GenerationRequest::new(ModelType::Rock, 3.0, 1.5);
        assert!(request.validate(Strictness::Lenient).is_ok());
        assert!(matches!(
            request.validate(Strictness::Strict),
            Err(GenerateError::InvalidParameter { name: "size", .. })
        ));

        let request = GenerationRequest::new(ModelType::Rock, 1.0, 1.5);
        assert!(matches!(
            request.validate(Strictness::Strict),
            Err(GenerateError::InvalidParameter { name: "detail", .. })
        ));
    }

    #[test]
    fn test_size_must_be_positive_in_any_mode() {
        let request = GenerationRequest::new(ModelType::Tree, 0.0, 0.5);
        assert!(request.validate(Strictness::Lenient).is_err());
        assert!(request.validate(Strictness::Strict).is_err());
    }

    #[test]
    fn test_range_edges_are_inclusive() {
        for (size, detail) in [(0.5, 0.0), (2.0, 1.0)] {
            let request = GenerationRequest::new(ModelType::GameAsset, size, detail);
            assert!(request.validate(Strictness::Strict).is_ok());
        }
    }

    #[test]
    fn test_seeded_request_is_reproducible() {
        let request = GenerationRequest::new(ModelType::Rock, 1.0, 0.7).with_seed(42);
        let config = GeneratorConfig::default();
        let a = request.generate(Strictness::Strict, &config).unwrap();
        let b = request.generate(Strictness::Strict, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_request_ranges() {
        let mut rng = Pcg64::seed_from_u64(5);
        for _ in 0..100 {
            let request = GenerationRequest::random(&mut rng);
            assert!(QUICK_SIZE_RANGE.contains(&request.size));
            assert!(QUICK_DETAIL_RANGE.contains(&request.detail));
            assert!(request.seed.is_some());
            assert!(request.validate(Strictness::Strict).is_ok());
        }
    }

    #[test]
    fn test_random_request_covers_models() {
        let mut rng = Pcg64::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(GenerationRequest::random(&mut rng).model);
        }
        assert_eq!(seen.len(), ModelType::ALL.len());
    }

    #[test]
    fn test_default_model_name() {
        let mut rng = Pcg64::seed_from_u64(0);
        let name = default_model_name(&mut rng);
        assert!(name.starts_with("model_"));
        let id = &name["model_".len()..];
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
