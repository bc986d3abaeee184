use crate::cli_error::{CliError, Result as CliResult};

use clap::Subcommand;
use serde_json::{Value, json};
use tt_client::{SessionState, SessionStore};
use tt_core::{LoginCredentials, PasswordResetForm, RegistrationForm, Role};

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in and keep the session for later commands
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, env = "TT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "TT_PASSWORD", hide_env_values = true)]
        password: String,

        /// Must match --password
        #[arg(long)]
        confirm_password: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        phone: Option<String>,

        /// admin, trainer, trainee
        #[arg(long, default_value = "trainee")]
        role: Role,
    },

    /// Show the logged-in user
    Whoami,

    /// Email a password reset link
    ResetRequest {
        #[arg(long)]
        email: String,
    },

    /// Set a new password from a reset link token
    ResetConfirm {
        #[arg(long)]
        token: String,

        #[arg(long, env = "TT_PASSWORD", hide_env_values = true)]
        password: String,

        /// Must match --password
        #[arg(long)]
        confirm_password: String,
    },
}

impl AuthCommands {
    pub(crate) async fn run(self, session: &SessionStore) -> CliResult<Value> {
        let value = match self {
            AuthCommands::Login { username, password } => {
                let response = session
                    .login(&LoginCredentials::new(username, password))
                    .await?;
                json!({ "user": response.user })
            }
            AuthCommands::Logout => {
                session.logout()?;
                json!({ "logged_out": true })
            }
            AuthCommands::Register {
                username,
                email,
                password,
                confirm_password,
                first_name,
                last_name,
                phone,
                role,
            } => {
                let form = RegistrationForm {
                    username,
                    email,
                    password,
                    password2: confirm_password,
                    first_name,
                    last_name,
                    phone,
                    role,
                };
                session.register(&form).await?
            }
            AuthCommands::Whoami => match session.restore_session().await {
                SessionState::Authenticated(identity) => json!({ "user": identity }),
                _ => return Err(CliError::not_logged_in()),
            },
            AuthCommands::ResetRequest { email } => session.request_password_reset(&email).await?,
            AuthCommands::ResetConfirm {
                token,
                password,
                confirm_password,
            } => {
                let form = PasswordResetForm {
                    token,
                    password,
                    password2: confirm_password,
                };
                session.confirm_password_reset(&form).await?
            }
        };

        Ok(value)
    }
}
