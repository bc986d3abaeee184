//! Who is logged in, and the persisted credentials behind it.

pub(crate) mod credential_store;
pub(crate) mod session_state;
pub(crate) mod session_store;

pub use credential_store::{ACCESS_TOKEN_KEY, CredentialStore, REFRESH_TOKEN_KEY, USER_INFO_KEY};
pub use session_state::SessionState;
pub use session_store::SessionStore;
