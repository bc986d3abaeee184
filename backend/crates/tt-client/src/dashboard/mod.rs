//! Role dashboards: a handful of concurrent reads summarised for one user.

use crate::client::{ApiClient, ClientResult, ListQuery};

use log::debug;
use serde::Serialize;
use tt_core::{Class, Identity, ProgressRecord, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "dashboard", rename_all = "snake_case")]
pub enum Dashboard {
    Admin(AdminStats),
    Trainer(TrainerStats),
    Trainee(TraineeOverview),
    /// Signed in without a recognised role.
    Basic { name: String, username: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub programs: u64,
    pub batches: u64,
    pub trainees: u64,
    pub progress_records: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainerStats {
    pub classes: u64,
    pub batches: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraineeOverview {
    pub classes: Vec<Class>,
    pub enrollments: u64,
    pub progress_records: u64,
    /// Mean completion over the trainee's progress records
    pub average_completion: Option<f64>,
}

impl Dashboard {
    /// Load the dashboard for `identity`'s role.
    ///
    /// All reads run concurrently and the first failure fails the whole load.
    pub async fn load(api: &ApiClient, identity: &Identity) -> ClientResult<Self> {
        debug!("Loading dashboard for {}", identity.username);

        match identity.role {
            Some(Role::Admin) => Self::load_admin(api).await,
            Some(Role::Trainer) => Self::load_trainer(api).await,
            Some(Role::Trainee) => Self::load_trainee(api).await,
            None => Ok(Dashboard::Basic {
                name: identity.full_name(),
                username: identity.username.clone(),
            }),
        }
    }

    async fn load_admin(api: &ApiClient) -> ClientResult<Self> {
        let programs = api.programs();
        let batches = api.batches();
        let trainees = api.batch_trainees();
        let progress = api.progress_records();

        let (programs, batches, trainees, progress) = tokio::try_join!(
            programs.all(),
            batches.all(),
            trainees.all(),
            progress.all(),
        )?;

        Ok(Dashboard::Admin(AdminStats {
            programs: programs.total(),
            batches: batches.total(),
            trainees: trainees.total(),
            progress_records: progress.total(),
        }))
    }

    async fn load_trainer(api: &ApiClient) -> ClientResult<Self> {
        let classes = api.classes();
        let batches = api.batches();

        let (classes, batches) = tokio::try_join!(classes.all(), batches.all())?;

        Ok(Dashboard::Trainer(TrainerStats {
            classes: classes.total(),
            batches: batches.total(),
        }))
    }

    async fn load_trainee(api: &ApiClient) -> ClientResult<Self> {
        let active = ListQuery::new().filter("is_active", true);
        let classes = api.classes();
        let enrollments = api.batch_trainees();
        let progress = api.progress_records();

        let (classes, enrollments, progress) =
            tokio::try_join!(classes.list(&active), enrollments.mine(), progress.mine())?;

        let average_completion = average_completion(progress.items());
        let classes = classes
            .into_items()
            .into_iter()
            .filter(|class| class.is_active)
            .collect();

        Ok(Dashboard::Trainee(TraineeOverview {
            classes,
            enrollments: enrollments.total(),
            progress_records: progress.total(),
            average_completion,
        }))
    }
}

fn average_completion(records: &[ProgressRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: i64 = records
        .iter()
        .map(|r| i64::from(r.completion_percentage))
        .sum();
    Some(sum as f64 / records.len() as f64)
}
