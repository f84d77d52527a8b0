//! End-to-end test over a real TCP listener, exercising the server the
//! way a client would.

#![allow(clippy::panic, clippy::indexing_slicing)]

mod common;

use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::{Value, json};

async fn spawn_server() -> SocketAddr {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no local address");
    };
    let app = common::build_test_app();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

#[tokio::test]
async fn full_lifecycle_over_http() {
    let addr = spawn_server().await;
    let base = format!("http://{addr}/movies");
    let client = reqwest::Client::new();

    // Create
    let Ok(response) = client.post(&base).json(&common::inception()).send().await else {
        panic!("create request failed");
    };
    assert_eq!(response.status(), StatusCode::CREATED);
    let Ok(created) = response.json::<Value>().await else {
        panic!("create body was not JSON");
    };
    let item = format!("{base}/{}", created["id"].as_str().unwrap_or_default());

    // Update
    let Ok(response) = client.put(&item).json(&json!({ "rating": 10 })).send().await else {
        panic!("update request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);
    let Ok(updated) = response.json::<Value>().await else {
        panic!("update body was not JSON");
    };
    assert_eq!(updated["rating"].as_f64(), Some(10.0));
    assert_eq!(updated["title"], "Inception");

    // List
    let Ok(response) = client.get(&base).send().await else {
        panic!("list request failed");
    };
    let Ok(all) = response.json::<Value>().await else {
        panic!("list body was not JSON");
    };
    assert_eq!(all, json!([updated]));

    // Delete
    let Ok(response) = client.delete(&item).send().await else {
        panic!("delete request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);

    // Gone
    let Ok(response) = client.get(&item).send().await else {
        panic!("get request failed");
    };
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let Ok(body) = response.json::<Value>().await else {
        panic!("404 body was not JSON");
    };
    assert_eq!(body, json!({ "error": "Movie not found" }));
}

#[tokio::test]
async fn cors_headers_are_present() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let Ok(response) = client
        .get(format!("http://{addr}/movies"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
