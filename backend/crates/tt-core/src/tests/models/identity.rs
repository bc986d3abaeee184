use crate::{Identity, Role};

use serde_json::json;

fn identity_with_role(role: Option<Role>) -> Identity {
    Identity {
        id: 1,
        username: "admin@Stack".into(),
        email: "admin@stackly.test".into(),
        first_name: "Ada".into(),
        last_name: "Admin".into(),
        phone: None,
        role,
        expertise: None,
        designation: None,
        is_active_flag: Some(true),
    }
}

#[test]
fn test_admin_has_trainer_capability_but_not_trainee() {
    let admin = identity_with_role(Some(Role::Admin));

    assert!(admin.is_admin());
    assert!(admin.is_trainer());
    assert!(!admin.is_trainee());
}

#[test]
fn test_trainer_is_not_admin() {
    let trainer = identity_with_role(Some(Role::Trainer));

    assert!(trainer.is_trainer());
    assert!(!trainer.is_admin());
    assert!(!trainer.is_trainee());
}

#[test]
fn test_trainee_capability_is_exact() {
    let trainee = identity_with_role(Some(Role::Trainee));

    assert!(trainee.is_trainee());
    assert!(!trainee.is_trainer());
    assert!(!trainee.is_admin());
}

#[test]
fn test_no_role_has_no_capability() {
    let nobody = identity_with_role(None);

    assert!(!nobody.is_admin());
    assert!(!nobody.is_trainer());
    assert!(!nobody.is_trainee());
    assert!(!nobody.has_role(Role::Trainee));
}

#[test]
fn test_unknown_role_deserializes_as_none() {
    let identity: Identity = serde_json::from_value(json!({
        "id": 7,
        "username": "mystery",
        "role": "superuser"
    }))
    .unwrap();

    assert_eq!(identity.role, None);
    assert_eq!(identity.email, "");
}

#[test]
fn test_login_payload_deserializes() {
    let identity: Identity = serde_json::from_value(json!({
        "id": 1,
        "username": "admin@Stack",
        "email": "admin@stackly.test",
        "first_name": "Ada",
        "last_name": "Admin",
        "role": "admin",
        "phone": null,
        "is_active_flag": true
    }))
    .unwrap();

    assert_eq!(identity.role, Some(Role::Admin));
    assert_eq!(identity.phone, None);
    assert_eq!(identity.is_active_flag, Some(true));
}

#[test]
fn test_full_name_falls_back_to_username() {
    let mut identity = identity_with_role(None);
    assert_eq!(identity.full_name(), "Ada Admin");

    identity.first_name.clear();
    identity.last_name.clear();
    assert_eq!(identity.full_name(), "admin@Stack");
}
