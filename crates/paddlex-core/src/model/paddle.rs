use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PaddleXError;

/// Paddle face outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Elongated,
    Hybrid,
    WideBody,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Elongated, Shape::Hybrid, Shape::WideBody];

    /// Canonical spelling, as accepted on the wire and stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Elongated => "Elongated",
            Shape::Hybrid => "Hybrid",
            Shape::WideBody => "WideBody",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = PaddleXError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Shape::ALL.iter().map(Shape::as_str).collect();
                PaddleXError::validation(
                    "specs.shape",
                    format!("invalid shape: must be one of {}", names.join(", ")),
                )
            })
    }
}

/// Manufacturer and product line
///
/// Missing fields decode to empty strings so validation can name them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metadata {
    pub brand: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_code: Option<String>,
}

/// Physical characteristics of one paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    pub shape: Shape,
    pub surface: String,
    pub average_weight: f64,
    pub core: f64,
    pub paddle_length: f64,
    pub paddle_width: f64,
    pub grip_length: f64,
    pub grip_type: String,
    pub grip_circumference: f64,
}

/// Benchmarked playability metrics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Performance {
    /// 0-100 scale
    pub power: f64,
    /// 0-100 scale
    pub pop: f64,
    /// RPM
    pub spin: f64,
    pub twist_weight: f64,
    pub swing_weight: f64,
    pub balance_point: f64,
}

/// A catalogued paddle, addressed by its business identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub id: String,
    pub metadata: Metadata,
    pub specs: Specs,
    pub performance: Performance,
}

/// Brand/model pair shown on listing cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub brand: String,
    pub model: String,
}

/// Listing projection of a paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleSummary {
    pub id: String,
    pub metadata: SummaryMetadata,
    pub specs: Specs,
}

impl From<Paddle> for PaddleSummary {
    fn from(paddle: Paddle) -> Self {
        Self {
            id: paddle.id,
            metadata: SummaryMetadata {
                brand: paddle.metadata.brand,
                model: paddle.metadata.model,
            },
            specs: paddle.specs,
        }
    }
}

/// Response body for a successful create
///
/// `id` is the database key, `paddle_id` the business identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPaddle {
    pub id: i64,
    pub paddle_id: String,
    pub metadata: Metadata,
    pub specs: Specs,
    pub performance: Performance,
}

impl CreatedPaddle {
    pub fn new(db_id: i64, paddle: Paddle) -> Self {
        Self {
            id: db_id,
            paddle_id: paddle.id,
            metadata: paddle.metadata,
            specs: paddle.specs,
            performance: paddle.performance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_parses_canonical_names() {
        for shape in Shape::ALL {
            assert_eq!(shape.as_str().parse::<Shape>().unwrap(), shape);
        }
    }

    #[test]
    fn test_shape_parse_is_case_sensitive() {
        assert!("hybrid".parse::<Shape>().is_err());
        assert!("Wide Body".parse::<Shape>().is_err());
    }

    #[test]
    fn test_shape_error_lists_options() {
        let err = "Teardrop".parse::<Shape>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid specs: invalid shape: must be one of Elongated, Hybrid, WideBody"
        );
    }

    #[test]
    fn test_shape_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Shape::WideBody).unwrap(), "\"WideBody\"");
    }

    #[test]
    fn test_serial_code_omitted_when_absent() {
        let metadata = Metadata {
            brand: "Engage".to_string(),
            model: "Pursuit".to_string(),
            serial_code: None,
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("serial_code").is_none());
    }
}
