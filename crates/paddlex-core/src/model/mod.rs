//! Paddle catalog domain model
//!
//! `Paddle` is the aggregate root; it owns exactly one `Specs` and one
//! `Performance`. `PaddleSubmission` is the inbound create payload and only
//! becomes a `Paddle` once it has been validated and assigned an identifier.

pub mod paddle;
pub mod submission;

pub use paddle::{
    CreatedPaddle, Metadata, Paddle, PaddleSummary, Performance, Shape, Specs, SummaryMetadata,
};
pub use submission::{PaddleSubmission, SpecsSubmission};
