use crate::client::{ClientResult, ListQuery, Pipeline};

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tt_core::{
    Batch, BatchInput, BatchTrainee, BatchTraineeInput, Class, ClassInput, Designation,
    DesignationInput, Listing, Program, ProgramInput, ProgressRecord, ProgressRecordInput, User,
    UserInput, Validate,
};

/// Value the server uses for "the caller" in owner filters.
pub const CURRENT_USER: &str = "current_user";

/// A REST collection at `/<COLLECTION>/` with items at `/<COLLECTION>/<id>/`.
pub trait Resource: DeserializeOwned {
    const COLLECTION: &'static str;

    /// Create / full-replace payload.
    type Input: Serialize + Validate;
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    type Input = UserInput;
}

impl Resource for Program {
    const COLLECTION: &'static str = "programs";
    type Input = ProgramInput;
}

impl Resource for Batch {
    const COLLECTION: &'static str = "batches";
    type Input = BatchInput;
}

impl Resource for BatchTrainee {
    const COLLECTION: &'static str = "batch-trainees";
    type Input = BatchTraineeInput;
}

impl Resource for ProgressRecord {
    const COLLECTION: &'static str = "progress-records";
    type Input = ProgressRecordInput;
}

impl Resource for Designation {
    const COLLECTION: &'static str = "designations";
    type Input = DesignationInput;
}

impl Resource for Class {
    const COLLECTION: &'static str = "classes";
    type Input = ClassInput;
}

/// CRUD operations for one resource type.
pub struct ResourceClient<'a, R> {
    pipeline: &'a Pipeline,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> ResourceClient<'a, R> {
    pub(crate) fn new(pipeline: &'a Pipeline) -> Self {
        Self {
            pipeline,
            _resource: PhantomData,
        }
    }

    pub fn collection_path() -> String {
        format!("/{}/", R::COLLECTION)
    }

    pub fn item_path(id: i64) -> String {
        format!("/{}/{}/", R::COLLECTION, id)
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Listing<R>> {
        let value = self.pipeline.get(&Self::collection_path(), query).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn all(&self) -> ClientResult<Listing<R>> {
        self.list(&ListQuery::new()).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<R> {
        let value = self.pipeline.get(&Self::item_path(id), &ListQuery::new()).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Validated locally first; nothing is sent when the input is rejected.
    pub async fn create(&self, input: &R::Input) -> ClientResult<R> {
        input.check()?;
        let value = self.pipeline.post(&Self::collection_path(), input).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Full replace (`PUT`), validated like [`create`](Self::create).
    pub async fn update(&self, id: i64, input: &R::Input) -> ClientResult<R> {
        input.check()?;
        let value = self.pipeline.put(&Self::item_path(id), input).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.pipeline.delete(&Self::item_path(id)).await?;
        Ok(())
    }
}

impl ResourceClient<'_, BatchTrainee> {
    /// Enrolments of the signed-in user.
    pub async fn mine(&self) -> ClientResult<Listing<BatchTrainee>> {
        self.list(&ListQuery::new().filter("trainee", CURRENT_USER)).await
    }
}

impl ResourceClient<'_, ProgressRecord> {
    /// Progress of the signed-in user.
    pub async fn mine(&self) -> ClientResult<Listing<ProgressRecord>> {
        self.list(&ListQuery::new().filter("trainee", CURRENT_USER)).await
    }
}
