use crate::{ApiClient, CredentialStore};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new("http://localhost:8000/api/", CredentialStore::in_memory());
    assert_eq!(client.base_url(), "http://localhost:8000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000/api", CredentialStore::in_memory());
    assert_eq!(client.base_url(), "http://localhost:8000/api");
}

#[test]
fn test_clones_share_credentials() {
    let client = ApiClient::new("http://localhost:8000/api", CredentialStore::in_memory());
    let clone = client.clone();

    client.credentials().save_access_token("shared").unwrap();

    assert_eq!(
        clone.credentials().access_token().unwrap(),
        Some("shared".to_string())
    );
}
