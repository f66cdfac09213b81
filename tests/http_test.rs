use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use codecamp::lifecycle::{AppConfig, CampSystem};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (CampSystem, Router) {
    let system = CampSystem::new(&AppConfig::default()).expect("seed data is consistent");
    let router = system.router();
    (system, router)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Option<String>, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(request.body(body).expect("valid request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, location, value)
}

#[tokio::test]
async fn test_camp_round_trip_over_http() {
    let (_system, router) = app();

    let (status, location, body) = send(
        &router,
        Method::POST,
        "/api/camps",
        Some(json!({
            "Name": "Conf1",
            "Moniker": "C1",
            "EventDate": "2024-01-01",
            "Length": 2,
            "Location": { "VenueName": "Hall A" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/api/camps/C1"));
    assert_eq!(body["moniker"], "C1");

    let (status, _, body) = send(&router, Method::GET, "/api/camps/C1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Conf1");
    assert_eq!(body["eventDate"], "2024-01-01");
    assert_eq!(body["location"]["venueName"], "Hall A");

    let (status, _, body) = send(&router, Method::PUT, "/api/camps/C1", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "X");
    assert_eq!(body["length"], 2);

    let (status, _, body) = send(&router, Method::DELETE, "/api/camps/C1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, _, body) = send(&router, Method::GET, "/api/camps/C1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": 404, "message": "Could not find camp with moniker of C1" }));
}

#[tokio::test]
async fn test_query_parameters() {
    let (_system, router) = app();

    let (status, _, body) = send(&router, Method::GET, "/api/camps?includeTalks=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["talks"].as_array().map(Vec::len), Some(2));

    let (_, _, body) = send(&router, Method::GET, "/api/camps", None).await;
    assert_eq!(body[0]["talks"], json!([]));

    // Booleans are accepted in any letter case.
    let (status, _, body) = send(&router, Method::GET, "/api/camps?includeTalks=True", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["talks"].as_array().map(Vec::len), Some(2));

    let (status, _, body) = send(&router, Method::GET, "/api/camps/search?theDate=2018-10-18&IncludeTalks=FALSE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["talks"], json!([]));

    let (status, _, _) = send(&router, Method::GET, "/api/camps?includeTalks=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, body) = send(&router, Method::GET, "/api/camps/search?theDate=2018-10-18", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["moniker"], "ATL2018");

    let (status, _, _) = send(&router, Method::GET, "/api/camps/search?theDate=2001-01-01", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(&router, Method::GET, "/api/camps/search?theDate=someday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_talk_routes() {
    let (_system, router) = app();

    let (status, location, body) = send(
        &router,
        Method::POST,
        "/api/camps/ATL2018/talks",
        Some(json!({
            "title": "Async Rust",
            "abstract": "Futures and executors",
            "level": 300,
            "speaker": { "speakerId": 1 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/api/camps/ATL2018/talks/3"));
    assert_eq!(body["talkId"], 3);
    assert_eq!(body["speaker"]["firstName"], "Shawn");

    let (status, _, body) = send(&router, Method::GET, "/api/camps/ATL2018/talks/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["abstract"], "Futures and executors");

    let (status, _, body) = send(
        &router,
        Method::POST,
        "/api/camps/ATL2018/talks",
        Some(json!({ "title": "T", "abstract": "A", "level": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Speaker ID is required");

    let (status, _, _) = send(&router, Method::GET, "/api/camps/ATL2018/talks/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&router, Method::DELETE, "/api/camps/ATL2018/talks/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(&router, Method::GET, "/api/camps/ATL2018/talks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let (_system, router) = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/camps")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .expect("valid request");
    let response = router.oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_base_path_serves_at_root() {
    let config = AppConfig {
        base_path: String::new(),
        ..AppConfig::default()
    };
    let system = CampSystem::new(&config).expect("seed");
    let router = system.router();

    let (status, _, _) = send(&router, Method::GET, "/camps/ATL2018", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, location, _) = send(
        &router,
        Method::POST,
        "/camps",
        Some(json!({ "name": "Root", "moniker": "ROOT" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/camps/ROOT"));
}
