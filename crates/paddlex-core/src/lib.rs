//! PaddleX Core - domain model and rules for the paddle catalog
//!
//! This crate provides:
//! - The `Paddle` aggregate (metadata, specs, performance) and its inbound
//!   `PaddleSubmission` form
//! - Submission and identifier validation
//! - Business identifier generation
//! - The canonical error facility shared by storage and HTTP layers
//! - The structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PaddleXError, Result};
pub use model::{
    CreatedPaddle, Metadata, Paddle, PaddleSubmission, PaddleSummary, Performance, Shape, Specs,
    SpecsSubmission, SummaryMetadata,
};
pub use ops::paddle_id::generate_paddle_id;
