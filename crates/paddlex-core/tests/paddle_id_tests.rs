#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::valid_submission;
use paddlex_core::generate_paddle_id;
use proptest::prelude::*;

#[test]
fn test_brand_and_model_joined_upper_case() {
    assert_eq!(
        generate_paddle_id("Engage", "Pursuit MX 6.0"),
        "ENGAGE-PURSUIT-MX-6.0"
    );
    assert_eq!(generate_paddle_id("Selkirk", "Vanguard Power Air"), "SELKIRK-VANGUARD-POWER-AIR");
}

#[test]
fn test_surrounding_whitespace_ignored() {
    assert_eq!(
        generate_paddle_id("  engage  ", "\tpursuit mx 6.0\n"),
        generate_paddle_id("Engage", "Pursuit MX 6.0")
    );
}

#[test]
fn test_submission_gets_generated_id() {
    let paddle = valid_submission().into_paddle().unwrap();
    assert_eq!(paddle.id, "ENGAGE-PURSUIT-MX-6.0");
}

#[test]
fn test_serial_code_does_not_affect_id() {
    let mut other = valid_submission();
    other.metadata.serial_code = Some("ENG-999".to_string());
    assert_eq!(
        other.into_paddle().unwrap().id,
        valid_submission().into_paddle().unwrap().id
    );
}

#[test]
fn test_slash_in_model_gives_single_segment() {
    assert_eq!(generate_paddle_id("Gearbox", "Pro/Power Fusion"), "GEARBOX-PRO-POWER-FUSION");
    assert_eq!(generate_paddle_id("Gearbox", "Pro / Power"), "GEARBOX-PRO-POWER");
}

proptest! {
    #[test]
    fn prop_id_is_deterministic(brand in "[A-Za-z0-9 ]{1,20}", model in "[A-Za-z0-9 .]{1,20}") {
        prop_assert_eq!(generate_paddle_id(&brand, &model), generate_paddle_id(&brand, &model));
    }

    #[test]
    fn prop_id_has_no_whitespace_or_lower_case(brand in "[a-z ]{1,20}", model in "[a-z0-9 ]{1,20}") {
        let id = generate_paddle_id(&brand, &model);
        prop_assert!(!id.chars().any(char::is_whitespace));
        prop_assert!(!id.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn prop_id_has_no_url_delimiters(brand in "[A-Za-z/?#% ]{1,20}", model in "[A-Za-z0-9/?#%. ]{1,20}") {
        let id = generate_paddle_id(&brand, &model);
        prop_assert!(!id.contains(['/', '?', '#', '%']), "{}", id);
    }

    #[test]
    fn prop_id_ignores_case(brand in "[A-Za-z]{1,10}", model in "[A-Za-z0-9]{1,10}") {
        prop_assert_eq!(
            generate_paddle_id(&brand.to_lowercase(), &model.to_lowercase()),
            generate_paddle_id(&brand.to_uppercase(), &model.to_uppercase())
        );
    }
}
