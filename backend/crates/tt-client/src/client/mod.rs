pub(crate) mod auth_api;
pub(crate) mod auth_event;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod list_query;
pub(crate) mod pipeline;
pub(crate) mod resource;

pub use auth_api::{
    AuthApi, CURRENT_USER_PATH, PASSWORD_RESET_CONFIRM_PATH, PASSWORD_RESET_PATH, REGISTER_PATH,
    TOKEN_PATH, TOKEN_REFRESH_PATH,
};
pub use auth_event::AuthEvent;
pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use list_query::ListQuery;
pub use pipeline::Pipeline;
pub use resource::{CURRENT_USER, Resource, ResourceClient};
