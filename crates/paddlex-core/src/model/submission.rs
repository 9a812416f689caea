use serde::{Deserialize, Serialize};

use super::paddle::{Metadata, Paddle, Performance, Shape, Specs};
use crate::errors::Result;
use crate::ops::paddle_id::generate_paddle_id;
use crate::rules::validation::validate_submission;

/// Specs as submitted by a client
///
/// Identical to `Specs` except that `shape` is still free text; it is
/// parsed during validation so an unknown shape is reported by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecsSubmission {
    pub shape: String,
    pub surface: String,
    pub average_weight: f64,
    pub core: f64,
    pub paddle_length: f64,
    pub paddle_width: f64,
    pub grip_length: f64,
    pub grip_type: String,
    pub grip_circumference: f64,
}

/// Inbound create payload: a paddle without an identifier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddleSubmission {
    pub metadata: Metadata,
    pub specs: SpecsSubmission,
    pub performance: Performance,
}

impl PaddleSubmission {
    /// Validate the submission and turn it into a `Paddle` with a generated
    /// business identifier.
    ///
    /// # Errors
    /// * `Validation` - the first rule the submission violates
    pub fn into_paddle(self) -> Result<Paddle> {
        validate_submission(&self)?;

        let shape: Shape = self.specs.shape.parse()?;
        let id = generate_paddle_id(&self.metadata.brand, &self.metadata.model);

        let SpecsSubmission {
            surface,
            average_weight,
            core,
            paddle_length,
            paddle_width,
            grip_length,
            grip_type,
            grip_circumference,
            ..
        } = self.specs;

        Ok(Paddle {
            id,
            metadata: self.metadata,
            specs: Specs {
                shape,
                surface,
                average_weight,
                core,
                paddle_length,
                paddle_width,
                grip_length,
                grip_type,
                grip_circumference,
            },
            performance: self.performance,
        })
    }
}

impl From<Paddle> for PaddleSubmission {
    fn from(paddle: Paddle) -> Self {
        Self {
            metadata: paddle.metadata,
            specs: SpecsSubmission {
                shape: paddle.specs.shape.to_string(),
                surface: paddle.specs.surface,
                average_weight: paddle.specs.average_weight,
                core: paddle.specs.core,
                paddle_length: paddle.specs.paddle_length,
                paddle_width: paddle.specs.paddle_width,
                grip_length: paddle.specs.grip_length,
                grip_type: paddle.specs.grip_type,
                grip_circumference: paddle.specs.grip_circumference,
            },
            performance: paddle.performance,
        }
    }
}
