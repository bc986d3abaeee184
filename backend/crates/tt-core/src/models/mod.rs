pub mod batch;
pub mod batch_status;
pub mod batch_trainee;
pub mod class;
pub mod designation;
pub mod enrollment_status;
pub mod identity;
pub mod listing;
pub mod program;
pub mod progress_record;
pub mod progress_status;
pub mod role;
pub mod token;
