use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Trainer.as_str(), "trainer");
    assert_eq!(Role::Trainee.as_str(), "trainee");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("trainer").unwrap(), Role::Trainer);
    assert_eq!(Role::from_str("trainee").unwrap(), Role::Trainee);
    assert!(Role::from_str("superuser").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default_is_trainee() {
    assert_eq!(Role::default(), Role::Trainee);
}

#[test]
fn test_role_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Role::Trainer).unwrap(), "\"trainer\"");
}
