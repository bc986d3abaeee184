mod client;
mod error;
mod list_query;
mod resource;
