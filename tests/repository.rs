#![cfg(feature = "data")]

use scanboard::repository::errors::RepositoryError;
use scanboard::repository::snapshot::{SELLER_METRICS_FILE, SELLERS_FILE, SCAN_LOGS_FILE};
use scanboard::repository::{JsonSnapshotRepository, ListingReader};

mod common;

#[test]
fn test_sellers_are_newest_first() {
    let sellers = format!(
        "[{},{},{}]",
        common::seller_json("+1", "Old", "Kyiv", true, "2023-01-01T00:00:00Z"),
        common::seller_json("+2", "New", "Lviv", true, "2024-06-01T00:00:00Z"),
        common::seller_json("+3", "Mid", "Odesa", false, "2023-09-01T00:00:00Z"),
    );
    let snapshots = common::TestSnapshots::new().with(SELLERS_FILE, &sellers);
    let repo = JsonSnapshotRepository::new(snapshots.path());

    let names: Vec<_> = repo
        .list_sellers()
        .unwrap()
        .into_iter()
        .map(|s| s.name.unwrap())
        .collect();

    assert_eq!(names, vec!["New", "Mid", "Old"]);
}

#[test]
fn test_metrics_are_converted_and_sorted_by_phone() {
    let metrics = r#"[
        {"seller_phone": "+3", "total_listings_history": "9000000000", "current_active_listings": 3,
         "catalog_quality_score": "81.5", "avg_listings_recent": null},
        {"seller_phone": "+1", "total_listings_history": 10, "current_active_listings": null,
         "catalog_quality_score": 40, "avg_listings_recent": "2.5"}
    ]"#;
    let snapshots = common::TestSnapshots::new().with(SELLER_METRICS_FILE, metrics);
    let repo = JsonSnapshotRepository::new(snapshots.path());

    let metrics = repo.list_seller_metrics().unwrap();

    assert_eq!(metrics[0].seller_phone.as_str(), "+1");
    assert_eq!(metrics[0].current_active_listings, 0);
    assert_eq!(metrics[0].catalog_quality_score, 40.0);
    assert_eq!(metrics[0].avg_listings_recent, Some(2.5));
    assert_eq!(metrics[1].total_listings_history, 9_000_000_000);
    assert!(metrics[1].has_good_quality());
}

#[test]
fn test_bad_metric_numbers_are_validation_errors() {
    let snapshots = common::TestSnapshots::new().with(
        SELLER_METRICS_FILE,
        r#"[{"seller_phone": "+1", "total_listings_history": "n/a"}]"#,
    );
    let repo = JsonSnapshotRepository::new(snapshots.path());

    let err = repo.list_seller_metrics().unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError(_)));
}

#[test]
fn test_missing_snapshot_is_not_found() {
    let snapshots = common::TestSnapshots::new();
    let repo = JsonSnapshotRepository::new(snapshots.path());

    assert!(matches!(
        repo.list_products().unwrap_err(),
        RepositoryError::NotFound(_)
    ));
}

#[test]
fn test_malformed_snapshot_is_reported() {
    let snapshots = common::TestSnapshots::new().with(SCAN_LOGS_FILE, "{ not json");
    let repo = JsonSnapshotRepository::new(snapshots.path());

    assert!(matches!(
        repo.list_scan_logs().unwrap_err(),
        RepositoryError::MalformedData(_)
    ));
}

#[test]
fn test_empty_snapshot_is_empty() {
    let snapshots = common::TestSnapshots::new().with(SELLERS_FILE, "[]");
    let repo = JsonSnapshotRepository::new(snapshots.path());

    assert!(repo.list_sellers().unwrap().is_empty());
}
