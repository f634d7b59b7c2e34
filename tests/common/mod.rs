#![allow(dead_code)]

use std::{
    net::TcpListener,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use spotcurator::config::Config;

pub const CLIENT_ID: &str = "client";
pub const CLIENT_SECRET: &str = "secret";
/// base64("client:secret")
pub const BASIC_CREDENTIALS: &str = "Y2xpZW50OnNlY3JldA==";

/// Serves `router` on a random local port from a dedicated thread and
/// returns its base URL. The server lives until the test process exits.
pub fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    listener
        .set_nonblocking(true)
        .expect("set mock listener non-blocking");
    let addr = listener.local_addr().expect("mock server address");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("mock server runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("tokio mock listener");
            axum::serve(listener, router).await.expect("mock server");
        });
    });

    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway port");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn config_for(base: &str) -> Config {
    Config::new(CLIENT_ID, CLIENT_SECRET)
        .with_token_url(format!("{}/api/token", base))
        .with_api_url(format!("{}/v1", base))
}

pub fn with_token(router: Router, token: &str) -> Router {
    let body = json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": 3600
    });
    router.route("/api/token", post(move || async move { Json(body) }))
}

pub fn with_search(router: Router, items: Vec<Value>) -> Router {
    let body = json!({ "artists": { "items": items } });
    router.route("/v1/search", get(move || async move { Json(body) }))
}

pub fn with_top_tracks(router: Router, status: StatusCode, body: Value) -> Router {
    router.route(
        "/v1/artists/{id}/top-tracks",
        get(move || async move { (status, Json(body)) }),
    )
}

/// Adds a catch-all that counts every request it receives.
pub fn counting(router: Router, hits: Arc<AtomicUsize>) -> Router {
    router.fallback(move || async move {
        hits.fetch_add(1, Ordering::SeqCst);
        StatusCode::NOT_FOUND
    })
}

pub fn anitta() -> Value {
    json!({
        "id": "a1",
        "name": "Anitta",
        "popularity": 85,
        "followers": { "total": 9000000 },
        "genres": ["pop"]
    })
}

pub fn track(i: usize) -> Value {
    json!({
        "id": format!("t{}", i),
        "name": format!("Track {}", i),
        "album": { "name": format!("Album {}", i) },
        "popularity": 50 + i,
        "duration_ms": 180_000 + i * 1_000
    })
}

pub fn tracks(n: usize) -> Value {
    json!({ "tracks": (1..=n).map(track).collect::<Vec<_>>() })
}
