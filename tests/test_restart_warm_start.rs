//! Restart / warm-start test:
//! 1) Start server A over a file store in a temp dir and mutate every ledger through the API.
//! 2) Stop server A (simulated restart).
//! 3) Start server B over the same directory with the same seed fixture.
//! 4) Ensure B serves the persisted collections, not the seed, and id sequences continue.

use lunchboxd::storage::{FileStore, KeyValueStore, FAVORITES_KEY, REVIEWS_KEY};
use lunchboxd::transport::http::{create_router, AppState};
use lunchboxd::{DirectoryService, SeedData};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn fixture() -> Result<SeedData, Box<dyn std::error::Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/seed.json");
    Ok(SeedData::from_file(&path).await?)
}

async fn open_service(dir: &Path) -> Result<DirectoryService, Box<dyn std::error::Error>> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir).await?);
    Ok(DirectoryService::open(store, fixture().await?, 12).await)
}

async fn spawn_server(
    service: DirectoryService,
) -> Result<(String, tokio::task::JoinHandle<()>), Box<dyn std::error::Error>> {
    let router = create_router(AppState::new(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok((format!("http://{}", addr), handle))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_restart_warm_start() -> TestResult {
    let dir = tempfile::tempdir()?;
    let client = reqwest::Client::new();

    // --- Phase A: fresh directory, seeded ledgers ---
    let (base_a, server_a) = spawn_server(open_service(dir.path()).await?).await?;

    let body: Value = client
        .post(format!("{}/api/reviews", base_a))
        .json(&json!({ "restaurantId": "1", "userId": "u2", "rating": 5, "comment": "Katsu is great." }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"]["id"], json!("1002"));

    client
        .post(format!("{}/api/favorites", base_a))
        .json(&json!({ "userId": "u2", "restaurantId": "4" }))
        .send()
        .await?;
    client
        .delete(format!("{}/api/favorites/u1/2", base_a))
        .send()
        .await?;
    client
        .patch(format!("{}/api/users/u2", base_a))
        .json(&json!({ "firstName": "Maja" }))
        .send()
        .await?;
    client
        .patch(format!("{}/api/admin/requests/req_1", base_a))
        .json(&json!({ "status": "rejected" }))
        .send()
        .await?;

    assert!(dir.path().join(format!("{}.json", REVIEWS_KEY)).exists());
    assert!(dir.path().join(format!("{}.json", FAVORITES_KEY)).exists());

    server_a.abort();
    let _ = server_a.await;

    // --- Phase B: same directory, same seed ---
    let (base_b, _server_b) = spawn_server(open_service(dir.path()).await?).await?;

    let body: Value = client
        .get(format!("{}/api/users/u2/reviews", base_b))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"][0]["id"], json!("1002"));

    let body: Value = client
        .get(format!("{}/api/favorites/u1", base_b))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"], json!([]));

    let body: Value = client
        .get(format!("{}/api/favorites/u2/4", base_b))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"]["favorite"], json!(true));

    let body: Value = client
        .get(format!("{}/api/users/u2", base_b))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"]["firstName"], json!("Maja"));

    let body: Value = client
        .get(format!("{}/api/admin/stats", base_b))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"]["totalReviews"], json!(3));
    assert_eq!(body["data"]["pendingRequests"], json!(0));

    // Ids continue from the persisted collection.
    let body: Value = client
        .post(format!("{}/api/reviews", base_b))
        .json(&json!({ "restaurantId": "1", "userId": "u1", "rating": 3, "comment": "Okay." }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"]["id"], json!("1003"));

    Ok(())
}

#[tokio::test]
async fn corrupt_collection_falls_back_to_seed() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path()).await?;
    store.put(FAVORITES_KEY, "{not json".to_string()).await?;
    store.put(REVIEWS_KEY, "[]".to_string()).await?;

    let service = open_service(dir.path()).await?;

    // Unreadable favorites use the seed; an empty stored array is still authoritative.
    assert!(service.favorites.is_favorite("u1", "2"));
    assert!(service.reviews.all().is_empty());

    Ok(())
}
