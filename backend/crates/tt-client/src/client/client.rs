use crate::client::{AuthApi, AuthEvent, ClientResult, Pipeline, ResourceClient};
use crate::session::CredentialStore;

use std::sync::Arc;

use tokio::sync::broadcast;
use tt_config::ApiConfig;
use tt_core::{Batch, BatchTrainee, Class, Designation, Program, ProgressRecord, User};

/// HTTP client for the training tracker REST API
///
/// Cheap to clone; clones share one pipeline, one credential store and one
/// auth event channel.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pipeline: Arc<Pipeline>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:8000/api")
    /// * `credentials` - persisted session the bearer token is read from
    pub fn new(base_url: &str, credentials: CredentialStore) -> Self {
        Self {
            pipeline: Arc::new(Pipeline::new(base_url, credentials)),
        }
    }

    pub fn from_config(config: &ApiConfig, credentials: CredentialStore) -> ClientResult<Self> {
        let pipeline = Pipeline::with_timeout(&config.base_url, credentials, config.timeout())?;
        Ok(Self {
            pipeline: Arc::new(pipeline),
        })
    }

    pub fn base_url(&self) -> &str {
        self.pipeline.base_url()
    }

    pub fn credentials(&self) -> &CredentialStore {
        self.pipeline.credentials()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.pipeline.subscribe()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.pipeline)
    }

    pub fn users(&self) -> ResourceClient<'_, User> {
        ResourceClient::new(&self.pipeline)
    }

    pub fn programs(&self) -> ResourceClient<'_, Program> {
        ResourceClient::new(&self.pipeline)
    }

    pub fn batches(&self) -> ResourceClient<'_, Batch> {
        ResourceClient::new(&self.pipeline)
    }

    pub fn batch_trainees(&self) -> ResourceClient<'_, BatchTrainee> {
        ResourceClient::new(&self.pipeline)
    }

    pub fn progress_records(&self) -> ResourceClient<'_, ProgressRecord> {
        ResourceClient::new(&self.pipeline)
    }

    pub fn designations(&self) -> ResourceClient<'_, Designation> {
        ResourceClient::new(&self.pipeline)
    }

    pub fn classes(&self) -> ResourceClient<'_, Class> {
        ResourceClient::new(&self.pipeline)
    }
}
