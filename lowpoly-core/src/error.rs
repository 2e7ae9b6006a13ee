//! Generation error types

/// Errors raised while building primitives or generating models.
///
/// Generation is all-or-nothing: any of these aborts the call and no
/// partial mesh is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// A numeric input is outside its contract (size <= 0, bad tessellation, ...)
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Model-type tag not in the fixed set
    #[error("unknown model type '{0}' (expected one of: tree, rock, building, vehicle, game-asset)")]
    UnknownModelType(String),

    /// A face references a vertex that does not exist
    #[error("face {face} references vertex {index}, but the mesh only has {vertex_count} vertices")]
    MeshIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl GenerateError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
            reason,
        }
    }
}

/// Check that a dimension is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, GenerateError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GenerateError::invalid(name, value, "must be finite and > 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("radius", 1.5), Ok(1.5));
        assert!(require_positive("radius", 0.0).is_err());
        assert!(require_positive("radius", -1.0).is_err());
        assert!(require_positive("radius", f32::NAN).is_err());
        assert!(require_positive("radius", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = require_positive("height", -2.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("height"), "{msg}");
        assert!(msg.contains("-2"), "{msg}");

        let err = GenerateError::UnknownModelType("spaceship".into());
        assert!(err.to_string().contains("spaceship"));
    }
}
