use crate::commands::{deleted, to_json};

use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult};
use tt_core::DesignationInput;

#[derive(Subcommand)]
pub enum DesignationCommands {
    /// List designations
    List,

    /// Get a designation by ID
    Get {
        /// Designation ID
        id: i64,
    },

    /// Create a new designation
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Create the designation as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a designation (unset flags keep their current value)
    Update {
        /// Designation ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a designation
    Delete {
        /// Designation ID
        id: i64,
    },
}

impl DesignationCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let designations = api.designations();

        match self {
            DesignationCommands::List => to_json(&designations.all().await?),
            DesignationCommands::Get { id } => to_json(&designations.get(id).await?),
            DesignationCommands::Create {
                name,
                description,
                inactive,
            } => {
                let input = DesignationInput {
                    name,
                    description,
                    is_active: !inactive,
                };
                to_json(&designations.create(&input).await?)
            }
            DesignationCommands::Update {
                id,
                name,
                description,
                active,
            } => {
                let mut input = DesignationInput::from(&designations.get(id).await?);
                if let Some(name) = name {
                    input.name = name;
                }
                if description.is_some() {
                    input.description = description;
                }
                if let Some(active) = active {
                    input.is_active = active;
                }
                to_json(&designations.update(id, &input).await?)
            }
            DesignationCommands::Delete { id } => {
                designations.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
