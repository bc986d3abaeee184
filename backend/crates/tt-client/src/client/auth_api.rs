use crate::client::{ClientResult, ListQuery, Pipeline};

use serde::Serialize;
use serde_json::Value;
use tt_core::{AccessToken, Identity, LoginCredentials, LoginResponse, RegistrationForm};

pub const TOKEN_PATH: &str = "/token/";
pub const TOKEN_REFRESH_PATH: &str = "/token/refresh/";
pub const REGISTER_PATH: &str = "/register/";
pub const PASSWORD_RESET_PATH: &str = "/password-reset/";
pub const PASSWORD_RESET_CONFIRM_PATH: &str = "/password-reset/confirm/";
pub const CURRENT_USER_PATH: &str = "/auth/user/";

/// Authentication endpoints. These only talk to the server; persisting the
/// result is the session store's job.
pub struct AuthApi<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<LoginResponse> {
        let value = self.pipeline.post(TOKEN_PATH, credentials).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh_token(&self, refresh: &str) -> ClientResult<AccessToken> {
        #[derive(Serialize)]
        struct RefreshRequest<'a> {
            refresh: &'a str,
        }

        let value = self
            .pipeline
            .post(TOKEN_REFRESH_PATH, &RefreshRequest { refresh })
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn register(&self, form: &RegistrationForm) -> ClientResult<Value> {
        self.pipeline.post(REGISTER_PATH, form).await
    }

    pub async fn password_reset_request(&self, email: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct ResetRequest<'a> {
            email: &'a str,
        }

        self.pipeline.post(PASSWORD_RESET_PATH, &ResetRequest { email }).await
    }

    pub async fn password_reset_confirm(
        &self,
        token: &str,
        new_password: &str,
        new_password2: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct ResetConfirmRequest<'a> {
            token: &'a str,
            new_password: &'a str,
            new_password2: &'a str,
        }

        let body = ResetConfirmRequest {
            token,
            new_password,
            new_password2,
        };
        self.pipeline.post(PASSWORD_RESET_CONFIRM_PATH, &body).await
    }

    pub async fn current_user(&self) -> ClientResult<Identity> {
        let value = self.pipeline.get(CURRENT_USER_PATH, &ListQuery::new()).await?;
        Ok(serde_json::from_value(value)?)
    }
}
