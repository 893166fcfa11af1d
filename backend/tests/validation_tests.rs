//! Tests for registration and profile validation rules

use proptest::prelude::*;
use shared::{
    validate_email, validate_gender, validate_interests, validate_kid_age, validate_name,
    validate_password, Gender, MAX_KID_AGE, MIN_KID_AGE, MIN_PASSWORD_LENGTH,
};

// =============================================================================
// Field validation tests
// =============================================================================

mod fields {
    use super::*;

    #[test]
    fn email_requires_at_and_dot() {
        assert!(validate_email("parent@example.com").is_ok());
        assert!(validate_email("parent.example.com").is_err());
        assert!(validate_email("parent@examplecom").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn password_minimum_length() {
        assert!(validate_password(&"x".repeat(MIN_PASSWORD_LENGTH)).is_ok());
        assert!(validate_password(&"x".repeat(MIN_PASSWORD_LENGTH - 1)).is_err());
    }

    #[test]
    fn name_rejects_blank_and_overlong() {
        assert!(validate_name("Arya").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"x".repeat(51)).is_err());
        assert!(validate_name(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn bengali_names_count_characters_not_bytes() {
        // 4 characters, 12 bytes
        assert!(validate_name("মিতালিনা").is_ok());
    }

    #[test]
    fn gender_accepts_known_values_only() {
        assert_eq!(validate_gender("boy"), Ok(Gender::Boy));
        assert_eq!(validate_gender("girl"), Ok(Gender::Girl));
        assert_eq!(validate_gender("other"), Ok(Gender::Other));
        assert!(validate_gender("dragon").is_err());
        assert!(validate_gender("").is_err());
    }

    #[test]
    fn interests_limited_and_non_blank() {
        assert!(validate_interests(&[]).is_ok());
        assert!(validate_interests(&["cricket".to_string(), "drawing".to_string()]).is_ok());
        assert!(validate_interests(&["".to_string()]).is_err());
        assert!(validate_interests(&vec!["x".to_string(); 21]).is_err());
    }
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// Age validation accepts exactly the supported range
    #[test]
    fn prop_age_range_is_exact(age in -100i32..100) {
        let valid = (MIN_KID_AGE..=MAX_KID_AGE).contains(&age);
        prop_assert_eq!(validate_kid_age(age).is_ok(), valid);
    }

    /// Any password at or above the minimum length passes
    #[test]
    fn prop_long_passwords_pass(password in ".{8,64}") {
        prop_assert!(validate_password(&password).is_ok());
    }

    /// Non-blank names up to 50 characters pass
    #[test]
    fn prop_reasonable_names_pass(name in "[a-zA-Z]{1,50}") {
        prop_assert!(validate_name(&name).is_ok());
    }

    /// Gender validation round-trips through its canonical string
    #[test]
    fn prop_gender_round_trip(gender in prop_oneof![
        Just(Gender::Boy),
        Just(Gender::Girl),
        Just(Gender::Other),
    ]) {
        prop_assert_eq!(validate_gender(gender.as_str()), Ok(gender));
    }
}
