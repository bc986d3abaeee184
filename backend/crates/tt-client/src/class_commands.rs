use crate::commands::{ListOptions, deleted, to_json};

use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult, ListQuery};
use tt_core::ClassInput;

#[derive(Subcommand)]
pub enum ClassCommands {
    /// List classes
    List {
        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

        #[command(flatten)]
        options: ListOptions,
    },

    /// Get a class by ID
    Get {
        /// Class ID
        id: i64,
    },

    /// Create a new class
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        trainer_name: String,

        /// Free-form schedule, e.g. "Mon/Wed 10:00-12:00"
        #[arg(long)]
        class_timings: String,

        /// http(s) meeting URL
        #[arg(long)]
        google_meet_link: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Create the class as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a class (unset flags keep their current value)
    Update {
        /// Class ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        trainer_name: Option<String>,

        #[arg(long)]
        class_timings: Option<String>,

        #[arg(long)]
        google_meet_link: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a class
    Delete {
        /// Class ID
        id: i64,
    },
}

impl ClassCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let classes = api.classes();

        match self {
            ClassCommands::List { active, options } => {
                let query = options.apply(ListQuery::new().filter_opt("is_active", active));
                to_json(&classes.list(&query).await?)
            }
            ClassCommands::Get { id } => to_json(&classes.get(id).await?),
            ClassCommands::Create {
                name,
                trainer_name,
                class_timings,
                google_meet_link,
                description,
                inactive,
            } => {
                let input = ClassInput {
                    name,
                    trainer_name,
                    class_timings,
                    google_meet_link,
                    description,
                    is_active: !inactive,
                };
                to_json(&classes.create(&input).await?)
            }
            ClassCommands::Update {
                id,
                name,
                trainer_name,
                class_timings,
                google_meet_link,
                description,
                active,
            } => {
                let mut input = ClassInput::from(&classes.get(id).await?);
                if let Some(name) = name {
                    input.name = name;
                }
                if let Some(trainer_name) = trainer_name {
                    input.trainer_name = trainer_name;
                }
                if let Some(class_timings) = class_timings {
                    input.class_timings = class_timings;
                }
                if google_meet_link.is_some() {
                    input.google_meet_link = google_meet_link;
                }
                if description.is_some() {
                    input.description = description;
                }
                if let Some(active) = active {
                    input.is_active = active;
                }
                to_json(&classes.update(id, &input).await?)
            }
            ClassCommands::Delete { id } => {
                classes.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
