use crate::{
    auth_commands::AuthCommands, batch_commands::BatchCommands,
    batch_trainee_commands::BatchTraineeCommands, class_commands::ClassCommands,
    designation_commands::DesignationCommands, program_commands::ProgramCommands,
    progress_commands::ProgressCommands, user_commands::UserCommands,
};

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};
use tt_client::{ClientResult, ListQuery};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in, log out, register, reset a password
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Training program operations
    Program {
        #[command(subcommand)]
        action: ProgramCommands,
    },

    /// Batch operations
    Batch {
        #[command(subcommand)]
        action: BatchCommands,
    },

    /// Batch enrolment operations
    BatchTrainee {
        #[command(subcommand)]
        action: BatchTraineeCommands,
    },

    /// Progress record operations
    Progress {
        #[command(subcommand)]
        action: ProgressCommands,
    },

    /// Designation operations
    Designation {
        #[command(subcommand)]
        action: DesignationCommands,
    },

    /// Class operations
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },

    /// User account operations (admin)
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Summary for the logged-in user's role
    Dashboard,
}

/// Search and sort flags shared by the list commands of searchable collections.
#[derive(Args, Debug, Default)]
pub(crate) struct ListOptions {
    /// Free-text search across the collection's text fields
    #[arg(long)]
    pub(crate) search: Option<String>,

    /// Sort field; prefix with '-' for descending (e.g. -created_at)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) ordering: Option<String>,
}

impl ListOptions {
    pub(crate) fn apply(&self, mut query: ListQuery) -> ListQuery {
        if let Some(term) = self.search.as_deref() {
            query = query.search(term);
        }
        if let Some(field) = self.ordering.as_deref() {
            query = query.ordering(field);
        }
        query
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> ClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}

pub(crate) fn deleted(id: i64) -> Value {
    json!({ "deleted": id })
}
