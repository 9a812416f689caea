#![allow(dead_code)]

use paddlex_core::model::{Metadata, Paddle, PaddleSubmission, Performance, SpecsSubmission};

pub fn submission(brand: &str, model: &str) -> PaddleSubmission {
    PaddleSubmission {
        metadata: Metadata {
            brand: brand.to_string(),
            model: model.to_string(),
            serial_code: None,
        },
        specs: SpecsSubmission {
            shape: "Hybrid".to_string(),
            surface: "Composite".to_string(),
            average_weight: 220.0,
            core: 15.0,
            paddle_length: 16.5,
            paddle_width: 7.5,
            grip_length: 4.5,
            grip_type: "Comfort".to_string(),
            grip_circumference: 4.0,
        },
        performance: Performance {
            power: 75.0,
            pop: 70.0,
            spin: 3000.0,
            twist_weight: 200.0,
            swing_weight: 220.0,
            balance_point: 30.0,
        },
    }
}

pub fn paddle(brand: &str, model: &str) -> Paddle {
    submission(brand, model)
        .into_paddle()
        .expect("fixture submission is valid")
}

pub fn engage() -> Paddle {
    paddle("Engage", "Pursuit MX 6.0")
}
