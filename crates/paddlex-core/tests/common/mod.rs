#![allow(dead_code)]

use paddlex_core::model::{Metadata, PaddleSubmission, Performance, SpecsSubmission};

/// A submission that passes every rule
pub fn valid_submission() -> PaddleSubmission {
    PaddleSubmission {
        metadata: Metadata {
            brand: "Engage".to_string(),
            model: "Pursuit MX 6.0".to_string(),
            serial_code: Some("ENG-001".to_string()),
        },
        specs: SpecsSubmission {
            shape: "Hybrid".to_string(),
            surface: "Raw Carbon".to_string(),
            average_weight: 227.0,
            core: 16.0,
            paddle_length: 16.5,
            paddle_width: 7.5,
            grip_length: 5.25,
            grip_type: "Cushion".to_string(),
            grip_circumference: 4.25,
        },
        performance: Performance {
            power: 85.0,
            pop: 80.0,
            spin: 2100.0,
            twist_weight: 6.4,
            swing_weight: 118.0,
            balance_point: 24.0,
        },
    }
}
