use crate::commands::{ListOptions, deleted, to_json};

use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult, ListQuery};
use tt_core::{Role, UserInput};

#[derive(Subcommand)]
pub enum UserCommands {
    /// List user accounts (paginated)
    List {
        /// Filter by role: admin, trainer, trainee
        #[arg(long)]
        role: Option<Role>,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<u32>,

        #[command(flatten)]
        options: ListOptions,
    },

    /// Get a user by ID
    Get {
        /// User ID
        id: i64,
    },

    /// Create a user account
    Create {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long)]
        phone: Option<String>,

        /// admin, trainer, trainee
        #[arg(long)]
        role: Option<Role>,

        /// Trainer expertise
        #[arg(long)]
        expertise: Option<String>,

        /// Trainee designation
        #[arg(long)]
        designation: Option<String>,

        /// Initial password
        #[arg(long, env = "TT_NEW_USER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Update a user account (unset flags keep their current value)
    Update {
        /// User ID
        id: i64,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        role: Option<Role>,

        #[arg(long)]
        expertise: Option<String>,

        #[arg(long)]
        designation: Option<String>,
    },

    /// Delete a user account
    Delete {
        /// User ID
        id: i64,
    },
}

impl UserCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let users = api.users();

        match self {
            UserCommands::List {
                role,
                page,
                options,
            } => {
                let query = options.apply(
                    ListQuery::new()
                        .filter_opt("role", role)
                        .filter_opt("page", page),
                );
                to_json(&users.list(&query).await?)
            }
            UserCommands::Get { id } => to_json(&users.get(id).await?),
            UserCommands::Create {
                username,
                email,
                first_name,
                last_name,
                phone,
                role,
                expertise,
                designation,
                password,
            } => {
                let input = UserInput {
                    username,
                    email,
                    first_name,
                    last_name,
                    phone,
                    role,
                    expertise,
                    designation,
                    password,
                };
                to_json(&users.create(&input).await?)
            }
            UserCommands::Update {
                id,
                email,
                first_name,
                last_name,
                phone,
                role,
                expertise,
                designation,
            } => {
                let mut input = UserInput::from(&users.get(id).await?);
                if let Some(email) = email {
                    input.email = email;
                }
                if let Some(first_name) = first_name {
                    input.first_name = first_name;
                }
                if let Some(last_name) = last_name {
                    input.last_name = last_name;
                }
                if phone.is_some() {
                    input.phone = phone;
                }
                if role.is_some() {
                    input.role = role;
                }
                if expertise.is_some() {
                    input.expertise = expertise;
                }
                if designation.is_some() {
                    input.designation = designation;
                }
                to_json(&users.update(id, &input).await?)
            }
            UserCommands::Delete { id } => {
                users.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
