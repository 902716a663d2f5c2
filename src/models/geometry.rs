//! Layout geometry.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Axis-aligned rectangle in canvas layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a box of the given size at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// The smaller of width and height.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// True when both sides are strictly larger than `threshold`.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.width > threshold && self.height > threshold
    }

    /// Reject negative or non-finite sizes.
    pub fn validate(&self, node_id: &str) -> Result<(), ClassifyError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ClassifyError::InvalidDimension {
                    node_id: node_id.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds_is_strict() {
        assert!(!BoundingBox::new(50.0, 50.0).exceeds(50.0));
        assert!(BoundingBox::new(50.5, 51.0).exceeds(50.0));
        assert!(!BoundingBox::new(200.0, 50.0).exceeds(50.0));
    }

    #[test]
    fn test_min_side() {
        assert_eq!(BoundingBox::new(65.0, 98.0).min_side(), 65.0);
    }

    #[test]
    fn test_validate() {
        assert!(BoundingBox::new(0.0, 0.0).validate("a").is_ok());
        assert!(BoundingBox::new(-1.0, 3.0).validate("a").is_err());
        assert!(BoundingBox::new(f64::INFINITY, 3.0).validate("a").is_err());
        assert!(BoundingBox::new(3.0, f64::NAN).validate("a").is_err());
    }

    #[test]
    fn test_position_defaults_to_origin() {
        let bbox: BoundingBox = serde_json::from_str(r#"{"width": 65, "height": 98}"#).unwrap();
        assert_eq!(bbox, BoundingBox::new(65.0, 98.0));
    }
}
