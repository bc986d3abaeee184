use crate::commands::{ListOptions, deleted, to_json};

use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult, ListQuery};
use tt_core::{BatchInput, BatchStatus};

#[derive(Subcommand)]
pub enum BatchCommands {
    /// List batches
    List {
        /// Filter by program ID
        #[arg(long)]
        program: Option<i64>,

        /// Filter by status: scheduled, running, completed, cancelled
        #[arg(long)]
        status: Option<BatchStatus>,

        #[command(flatten)]
        options: ListOptions,
    },

    /// Get a batch by ID
    Get {
        /// Batch ID
        id: i64,
    },

    /// Create a new batch
    Create {
        #[arg(long)]
        name: String,

        /// Program ID
        #[arg(long)]
        program: i64,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// scheduled, running, completed, cancelled
        #[arg(long, default_value = "scheduled")]
        status: BatchStatus,

        #[arg(long)]
        max_capacity: i32,
    },

    /// Update a batch (unset flags keep their current value)
    Update {
        /// Batch ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        program: Option<i64>,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long)]
        status: Option<BatchStatus>,

        #[arg(long)]
        max_capacity: Option<i32>,
    },

    /// Delete a batch
    Delete {
        /// Batch ID
        id: i64,
    },
}

impl BatchCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let batches = api.batches();

        match self {
            BatchCommands::List {
                program,
                status,
                options,
            } => {
                let query = options.apply(
                    ListQuery::new()
                        .filter_opt("program", program)
                        .filter_opt("status", status),
                );
                to_json(&batches.list(&query).await?)
            }
            BatchCommands::Get { id } => to_json(&batches.get(id).await?),
            BatchCommands::Create {
                name,
                program,
                start_date,
                end_date,
                status,
                max_capacity,
            } => {
                let input = BatchInput {
                    name,
                    program,
                    start_date,
                    end_date,
                    status,
                    max_capacity,
                };
                to_json(&batches.create(&input).await?)
            }
            BatchCommands::Update {
                id,
                name,
                program,
                start_date,
                end_date,
                status,
                max_capacity,
            } => {
                let mut input = BatchInput::from(&batches.get(id).await?);
                if let Some(name) = name {
                    input.name = name;
                }
                if let Some(program) = program {
                    input.program = program;
                }
                if start_date.is_some() {
                    input.start_date = start_date;
                }
                if end_date.is_some() {
                    input.end_date = end_date;
                }
                if let Some(status) = status {
                    input.status = status;
                }
                if let Some(max_capacity) = max_capacity {
                    input.max_capacity = max_capacity;
                }
                to_json(&batches.update(id, &input).await?)
            }
            BatchCommands::Delete { id } => {
                batches.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
