//! tt-client library
//!
//! Typed access to the training tracker REST API: persisted credentials, the
//! request pipeline that attaches and revokes them, per-resource CRUD clients,
//! the session store, and role dashboards. The `tt` binary is a thin console on
//! top of this.

pub mod client;
pub mod dashboard;
pub mod session;
pub mod storage;

#[cfg(test)]
mod tests;

pub use client::{
    ApiClient, AuthApi, AuthEvent, ClientError, ClientResult, ListQuery, Pipeline, Resource,
    ResourceClient,
};
pub use dashboard::{AdminStats, Dashboard, TraineeOverview, TrainerStats};
pub use session::{CredentialStore, SessionState, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
