use crate::{Listing, Program};

use serde_json::json;

#[test]
fn test_bare_array_listing() {
    let listing: Listing<Program> = serde_json::from_value(json!([
        { "id": 1, "name": "Backend" },
        { "id": 2, "name": "Frontend", "is_active": false }
    ]))
    .unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing.total(), 2);
    assert!(listing.next().is_none());
    assert!(listing.items()[0].is_active);
    assert!(!listing.items()[1].is_active);
}

#[test]
fn test_paginated_listing() {
    let listing: Listing<Program> = serde_json::from_value(json!({
        "count": 42,
        "next": "http://127.0.0.1:8000/api/programs/?page=2",
        "previous": null,
        "results": [{ "id": 1, "name": "Backend" }]
    }))
    .unwrap();

    assert_eq!(listing.len(), 1);
    assert_eq!(listing.total(), 42);
    assert_eq!(
        listing.next(),
        Some("http://127.0.0.1:8000/api/programs/?page=2")
    );
    assert!(listing.previous().is_none());
    assert_eq!(listing.into_items()[0].name, "Backend");
}

#[test]
fn test_empty_listing() {
    let listing: Listing<Program> = serde_json::from_value(json!([])).unwrap();

    assert!(listing.is_empty());
    assert_eq!(listing.total(), 0);
}
