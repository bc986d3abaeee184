use crate::SessionState;

use tt_core::{Identity, Role};

fn admin() -> Identity {
    Identity {
        id: 1,
        username: "admin@Stack".into(),
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
        phone: None,
        role: Some(Role::Admin),
        expertise: None,
        designation: None,
        is_active_flag: None,
    }
}

#[test]
fn test_initial_state_is_loading() {
    let state = SessionState::default();

    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.identity().is_none());
}

#[test]
fn test_unauthenticated_has_no_role() {
    let state = SessionState::Unauthenticated;

    assert!(!state.is_loading());
    assert!(!state.has_role(Role::Trainee));
}

#[test]
fn test_authenticated_exposes_identity() {
    let state = SessionState::Authenticated(admin());

    assert!(state.is_authenticated());
    assert_eq!(state.identity().map(|i| i.username.as_str()), Some("admin@Stack"));
    assert!(state.has_role(Role::Admin));
    assert!(!state.has_role(Role::Trainer));
}
