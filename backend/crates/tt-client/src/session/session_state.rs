use tt_core::{Identity, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Startup, before the persisted session has been checked.
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.identity().is_some_and(|identity| identity.has_role(role))
    }
}
