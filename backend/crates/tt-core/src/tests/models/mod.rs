mod batch_status;
mod identity;
mod listing;
mod role;
