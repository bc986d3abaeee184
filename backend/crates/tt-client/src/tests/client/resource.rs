use crate::ResourceClient;

use tt_core::{Batch, BatchTrainee, Class, Designation, Program, ProgressRecord, User};

#[test]
fn test_collection_paths() {
    assert_eq!(ResourceClient::<User>::collection_path(), "/users/");
    assert_eq!(ResourceClient::<Program>::collection_path(), "/programs/");
    assert_eq!(ResourceClient::<Batch>::collection_path(), "/batches/");
    assert_eq!(
        ResourceClient::<BatchTrainee>::collection_path(),
        "/batch-trainees/"
    );
    assert_eq!(
        ResourceClient::<ProgressRecord>::collection_path(),
        "/progress-records/"
    );
    assert_eq!(
        ResourceClient::<Designation>::collection_path(),
        "/designations/"
    );
    assert_eq!(ResourceClient::<Class>::collection_path(), "/classes/");
}

#[test]
fn test_item_path_has_trailing_slash() {
    assert_eq!(ResourceClient::<Batch>::item_path(42), "/batches/42/");
    assert_eq!(
        ResourceClient::<ProgressRecord>::item_path(7),
        "/progress-records/7/"
    );
}
