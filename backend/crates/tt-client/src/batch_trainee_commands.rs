use crate::commands::{deleted, to_json};

use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::Value;
use tt_client::{ApiClient, ClientResult, ListQuery};
use tt_core::{BatchTraineeInput, EnrollmentStatus};

#[derive(Subcommand)]
pub enum BatchTraineeCommands {
    /// List enrolments
    List {
        /// Filter by batch ID
        #[arg(long)]
        batch: Option<i64>,

        /// Only the logged-in user's enrolments
        #[arg(long, conflicts_with = "batch")]
        mine: bool,
    },

    /// Get an enrolment by ID
    Get {
        /// Enrolment ID
        id: i64,
    },

    /// Enrol a trainee in a batch
    Create {
        /// Batch ID
        #[arg(long)]
        batch: i64,

        /// Trainee user ID
        #[arg(long)]
        trainee: i64,

        /// Enrolment day (YYYY-MM-DD)
        #[arg(long)]
        enrollment_date: Option<NaiveDate>,

        /// enrolled, in_progress, completed, dropped
        #[arg(long, default_value = "enrolled")]
        status: EnrollmentStatus,
    },

    /// Update an enrolment (unset flags keep their current value)
    Update {
        /// Enrolment ID
        id: i64,

        #[arg(long)]
        status: Option<EnrollmentStatus>,

        #[arg(long)]
        completion_date: Option<NaiveDate>,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: Option<i32>,

        #[arg(long)]
        feedback: Option<String>,
    },

    /// Remove an enrolment
    Delete {
        /// Enrolment ID
        id: i64,
    },
}

impl BatchTraineeCommands {
    pub(crate) async fn run(self, api: &ApiClient) -> ClientResult<Value> {
        let enrollments = api.batch_trainees();

        match self {
            BatchTraineeCommands::List { mine: true, .. } => to_json(&enrollments.mine().await?),
            BatchTraineeCommands::List { batch, .. } => {
                let query = ListQuery::new().filter_opt("batch", batch);
                to_json(&enrollments.list(&query).await?)
            }
            BatchTraineeCommands::Get { id } => to_json(&enrollments.get(id).await?),
            BatchTraineeCommands::Create {
                batch,
                trainee,
                enrollment_date,
                status,
            } => {
                let input = BatchTraineeInput {
                    batch,
                    trainee,
                    enrollment_date,
                    status,
                    ..Default::default()
                };
                to_json(&enrollments.create(&input).await?)
            }
            BatchTraineeCommands::Update {
                id,
                status,
                completion_date,
                rating,
                feedback,
            } => {
                let mut input = BatchTraineeInput::from(&enrollments.get(id).await?);
                if let Some(status) = status {
                    input.status = status;
                }
                if completion_date.is_some() {
                    input.completion_date = completion_date;
                }
                if rating.is_some() {
                    input.rating = rating;
                }
                if feedback.is_some() {
                    input.feedback = feedback;
                }
                to_json(&enrollments.update(id, &input).await?)
            }
            BatchTraineeCommands::Delete { id } => {
                enrollments.delete(id).await?;
                Ok(deleted(id))
            }
        }
    }
}
