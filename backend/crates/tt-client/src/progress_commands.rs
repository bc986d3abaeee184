use crate::commands::{deleted, to_json};

use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult, ListQuery};
use tt_core::{ProgressRecordInput, ProgressStatus};

#[derive(Subcommand)]
pub enum ProgressCommands {
    /// List progress records
    List {
        /// Filter by batch ID
        #[arg(long)]
        batch: Option<i64>,

        /// Only the logged-in user's progress
        #[arg(long, conflicts_with = "batch")]
        mine: bool,
    },

    /// Get a progress record by ID
    Get {
        /// Progress record ID
        id: i64,
    },

    /// Record progress for a trainee
    Create {
        /// Trainee user ID
        #[arg(long)]
        trainee: i64,

        /// Batch ID
        #[arg(long)]
        batch: i64,

        /// Program topic ID
        #[arg(long)]
        topic: Option<i64>,

        /// not_started, in_progress, completed
        #[arg(long, default_value = "not_started")]
        status: ProgressStatus,

        /// Completion from 0 to 100
        #[arg(long, default_value_t = 0)]
        completion_percentage: i32,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Update a progress record (unset flags keep their current value)
    Update {
        /// Progress record ID
        id: i64,

        #[arg(long)]
        status: Option<ProgressStatus>,

        #[arg(long)]
        completion_percentage: Option<i32>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a progress record
    Delete {
        /// Progress record ID
        id: i64,
    },
}

impl ProgressCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let records = api.progress_records();

        match self {
            ProgressCommands::List { mine: true, .. } => to_json(&records.mine().await?),
            ProgressCommands::List { batch, .. } => {
                let query = ListQuery::new().filter_opt("batch", batch);
                to_json(&records.list(&query).await?)
            }
            ProgressCommands::Get { id } => to_json(&records.get(id).await?),
            ProgressCommands::Create {
                trainee,
                batch,
                topic,
                status,
                completion_percentage,
                notes,
            } => {
                let input = ProgressRecordInput {
                    trainee,
                    batch,
                    topic,
                    status,
                    completion_percentage,
                    notes,
                };
                to_json(&records.create(&input).await?)
            }
            ProgressCommands::Update {
                id,
                status,
                completion_percentage,
                notes,
            } => {
                let mut input = ProgressRecordInput::from(&records.get(id).await?);
                if let Some(status) = status {
                    input.status = status;
                }
                if let Some(completion_percentage) = completion_percentage {
                    input.completion_percentage = completion_percentage;
                }
                if notes.is_some() {
                    input.notes = notes;
                }
                to_json(&records.update(id, &input).await?)
            }
            ProgressCommands::Delete { id } => {
                records.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
