use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::product::{repository::mock::InMemoryProductRepository, ProductRepository};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, state::ServerState};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
    repo: Arc<InMemoryProductRepository>,
}

/// Serve the real router over an in-memory repository on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(InMemoryProductRepository::default());
    let dyn_repo: Arc<dyn ProductRepository> = repo.clone();
    let app: Router = routes::build_router(ServerState::new(dyn_repo), cors());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, repo })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_product_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let base = format!("{}/api/product", app.base_url);

    // Create
    let res = c.post(&base).json(&json!({"name": "Book", "price": 15.50})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res.headers().get("location").and_then(|v| v.to_str().ok()).map(str::to_owned);
    assert_eq!(location.as_deref(), Some("/api/product/1"));
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 1, "name": "Book", "price": 15.5}));

    // Read
    let res = c.get(format!("{}/1", base)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "Book", "price": 15.5}));

    // Update
    let res = c.put(format!("{}/1", base)).json(&json!({"name": "Book", "price": 12.00})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    let res = c.get(format!("{}/1", base)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "Book", "price": 12.0}));

    // Delete
    let res = c.delete(format!("{}/1", base)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/1", base)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.bytes().await?.is_empty());

    // one insert, one update, one delete
    assert_eq!(app.repo.writes(), 3);
    Ok(())
}

#[tokio::test]
async fn e2e_missing_product_is_404_for_get_put_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let url = format!("{}/api/product/42", app.base_url);

    assert_eq!(c.get(&url).send().await?.status(), HttpStatusCode::NOT_FOUND);
    let res = c.put(&url).json(&json!({"name": "X", "price": 1.0})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(c.delete(&url).send().await?.status(), HttpStatusCode::NOT_FOUND);

    assert_eq!(app.repo.writes(), 0);
    Ok(())
}

#[tokio::test]
async fn e2e_list_returns_all_products() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let base = format!("{}/api/product", app.base_url);

    let res = c.get(&base).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    for (name, price) in [("Pen", 1.25), ("Ink", 3.0)] {
        let res = c.post(&base).json(&json!({"id": 99, "name": name, "price": price})).send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let first = c.get(&base).send().await?.json::<serde_json::Value>().await?;
    let second = c.get(&base).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(first, second);
    assert_eq!(
        first,
        json!([
            {"id": 1, "name": "Pen", "price": 1.25},
            {"id": 2, "name": "Ink", "price": 3.0}
        ])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert!(doc["paths"]["/api/product/{id}"].is_object());
    Ok(())
}
