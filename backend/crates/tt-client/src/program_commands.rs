use crate::commands::{ListOptions, deleted, to_json};

use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult, ListQuery};
use tt_core::ProgramInput;

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// List programs
    List {
        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

        #[command(flatten)]
        options: ListOptions,
    },

    /// Get a program by ID
    Get {
        /// Program ID
        id: i64,
    },

    /// Create a new program
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Length of the program in days
        #[arg(long, default_value_t = 0)]
        duration_days: i32,

        /// Create the program as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a program (unset flags keep their current value)
    Update {
        /// Program ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        duration_days: Option<i32>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a program
    Delete {
        /// Program ID
        id: i64,
    },
}

impl ProgramCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let programs = api.programs();

        match self {
            ProgramCommands::List { active, options } => {
                let query = options.apply(ListQuery::new().filter_opt("is_active", active));
                to_json(&programs.list(&query).await?)
            }
            ProgramCommands::Get { id } => to_json(&programs.get(id).await?),
            ProgramCommands::Create {
                name,
                description,
                duration_days,
                inactive,
            } => {
                let input = ProgramInput {
                    name,
                    description,
                    duration_days,
                    is_active: !inactive,
                };
                to_json(&programs.create(&input).await?)
            }
            ProgramCommands::Update {
                id,
                name,
                description,
                duration_days,
                active,
            } => {
                let mut input = ProgramInput::from(&programs.get(id).await?);
                if let Some(name) = name {
                    input.name = name;
                }
                if description.is_some() {
                    input.description = description;
                }
                if let Some(duration_days) = duration_days {
                    input.duration_days = duration_days;
                }
                if let Some(active) = active {
                    input.is_active = active;
                }
                to_json(&programs.update(id, &input).await?)
            }
            ProgramCommands::Delete { id } => {
                programs.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
