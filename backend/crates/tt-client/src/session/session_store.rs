use crate::client::{ApiClient, AuthEvent, ClientError, ClientResult};
use crate::session::{CredentialStore, SessionState};

use std::sync::Arc;

use log::{debug, error, info, warn};
use serde_json::Value;
use tokio::sync::{broadcast::error::RecvError, watch};
use tokio::task::JoinHandle;
use tt_core::{
    FieldErrors, Identity, LoginCredentials, LoginResponse, PasswordResetForm, RegistrationForm,
    Role, Validate,
};

/// Single owner of the session lifecycle.
///
/// Share it as `Arc<SessionStore>`. Observers follow [`SessionState`] changes
/// through [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct SessionStore {
    api: ApiClient,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(SessionState::Initializing);
        Self { api, state }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn credentials(&self) -> &CredentialStore {
        self.api.credentials()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn set_state(&self, next: SessionState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.state.borrow().has_role(role)
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().identity().is_some_and(Identity::is_admin)
    }

    /// Admins count as trainers.
    pub fn is_trainer(&self) -> bool {
        self.state.borrow().identity().is_some_and(Identity::is_trainer)
    }

    pub fn is_trainee(&self) -> bool {
        self.state.borrow().identity().is_some_and(Identity::is_trainee)
    }

    /// Check the persisted session against the server.
    ///
    /// With a stored token and identity, `GET /auth/user/` decides: success adopts
    /// the identity the server returns, any failure wipes the persisted session.
    /// Without both, the state becomes Unauthenticated and nothing is sent.
    pub async fn restore_session(&self) -> SessionState {
        let persisted = match self.credentials().has_session() {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("Could not read persisted session: {e}");
                false
            }
        };

        if !persisted {
            debug!("No persisted session");
            self.set_state(SessionState::Unauthenticated);
            return self.state();
        }

        match self.api.auth().current_user().await {
            Ok(identity) => {
                if let Err(e) = self.credentials().save_identity(&identity) {
                    warn!("Could not persist refreshed identity: {e}");
                }
                info!("Restored session for {}", identity.username);
                self.set_state(SessionState::Authenticated(identity));
            }
            Err(e) => {
                warn!("Persisted session rejected: {e}");
                self.discard();
            }
        }

        self.state()
    }

    /// Exchange credentials for tokens. One attempt; server errors come back
    /// unchanged.
    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<LoginResponse> {
        credentials.check()?;

        let response = self.api.auth().login(credentials).await?;
        self.credentials().save(&response)?;

        info!("Logged in as {}", response.user.username);
        self.set_state(SessionState::Authenticated(response.user.clone()));
        Ok(response)
    }

    /// Create an account. Never logs the new user in.
    pub async fn register(&self, form: &RegistrationForm) -> ClientResult<Value> {
        form.check()?;
        self.api.auth().register(form).await
    }

    /// Forget the session locally. Safe to call when already logged out.
    pub fn logout(&self) -> ClientResult<()> {
        let cleared = self.credentials().clear();
        self.set_state(SessionState::Unauthenticated);
        cleared.map_err(ClientError::from)
    }

    pub async fn request_password_reset(&self, email: &str) -> ClientResult<Value> {
        if email.trim().is_empty() {
            let mut errors = FieldErrors::new();
            errors.set("email", "Email is required");
            return Err(ClientError::validation(errors));
        }
        self.api.auth().password_reset_request(email.trim()).await
    }

    pub async fn confirm_password_reset(&self, form: &PasswordResetForm) -> ClientResult<Value> {
        form.check()?;
        self.api
            .auth()
            .password_reset_confirm(&form.token, &form.password, &form.password2)
            .await
    }

    /// Drop the session after the pipeline saw a 401.
    ///
    /// When driven by [`spawn_auth_listener`](Self::spawn_auth_listener) this
    /// runs on the listener task, after the failing call has already returned
    /// `Err(Unauthorized)`. Until then `is_authenticated()` still reports the
    /// old state; wait on [`subscribe`](Self::subscribe) rather than polling.
    pub fn handle_auth_event(&self, event: &AuthEvent) {
        match event {
            AuthEvent::Unauthorized { path } => {
                info!("Session ended by server response to {path}");
                self.discard();
            }
        }
    }

    /// Apply pipeline auth events to this store until the pipeline goes away.
    ///
    /// The task holds only a weak reference, so it never keeps the store alive.
    /// Transitions it makes are eventual: the stored tokens are gone as soon as
    /// the 401 is returned, the state change follows once the task runs.
    pub fn spawn_auth_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let mut events = self.api.subscribe();
        let store = Arc::downgrade(self);

        tokio::spawn(async move {
            loop {
                let event = match events.recv().await {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Auth listener skipped {skipped} events");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                match store.upgrade() {
                    Some(store) => store.handle_auth_event(&event),
                    None => break,
                }
            }
            debug!("Auth listener stopped");
        })
    }

    fn discard(&self) {
        if let Err(e) = self.credentials().clear() {
            error!("Failed to clear persisted session: {e}");
        }
        self.set_state(SessionState::Unauthenticated);
    }
}
