use crate::ListQuery;

#[test]
fn test_new_query_is_empty() {
    assert!(ListQuery::new().is_empty());
}

#[test]
fn test_params_keep_insertion_order() {
    let query = ListQuery::new()
        .filter("program", 3)
        .filter("status", "running")
        .page(2);

    assert_eq!(
        query.params(),
        &[
            ("program".to_string(), "3".to_string()),
            ("status".to_string(), "running".to_string()),
            ("page".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn test_filter_opt_skips_none() {
    let query = ListQuery::new()
        .filter_opt("is_active", None::<bool>)
        .filter_opt("role", Some("trainer"));

    assert_eq!(
        query.params(),
        &[("role".to_string(), "trainer".to_string())]
    );
}

#[test]
fn test_search_and_ordering_use_server_parameter_names() {
    let query = ListQuery::new()
        .filter("is_active", true)
        .search("rust")
        .ordering("-created_at");

    assert_eq!(
        query.params(),
        &[
            ("is_active".to_string(), "true".to_string()),
            ("search".to_string(), "rust".to_string()),
            ("ordering".to_string(), "-created_at".to_string()),
        ]
    );
}
