use lesson_kit::config::toml_config::CredentialsConfig;
use lesson_kit::core::credentials::{DEMO_PASSWORD, DEMO_USERNAME};
use lesson_kit::CredentialCheck;
use proptest::prelude::*;

#[test]
fn test_demo_pair_outcomes() {
    let check = CredentialCheck::default();
    assert!(check.check("Omkaar", "1234"));
    assert!(!check.check("Omkaar", "wrong"));
    assert!(!check.check("x", "1234"));
    assert!(!check.check("", ""));
}

#[test]
fn test_comparison_is_exact() {
    let check = CredentialCheck::default();
    assert!(!check.check("OMKAAR", "1234"));
    assert!(!check.check(" Omkaar", "1234"));
    assert!(!check.check("Omkaar", "1234 "));
}

#[test]
fn test_missing_config_falls_back_to_demo() {
    assert!(CredentialCheck::from_config(None).is_demo());
}

#[test]
fn test_configured_pair() {
    let config = CredentialsConfig {
        username: "instructor".to_string(),
        password: "s3cret".to_string(),
    };
    let check = CredentialCheck::from_config(Some(&config));
    assert!(check.login("instructor", "s3cret").is_granted());
    assert!(!check.login(DEMO_USERNAME, DEMO_PASSWORD).is_granted());
}

proptest! {
    #[test]
    fn prop_other_passwords_are_denied(password in ".{0,16}") {
        prop_assume!(password != DEMO_PASSWORD);
        prop_assert!(!CredentialCheck::default().check(DEMO_USERNAME, &password));
    }
}
