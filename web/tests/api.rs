use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;
use web::app;

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}", dir.path().join("api.db").display());

    let db = Database::new(&url).await.expect("open database");
    db.run_migrations().await.expect("run migrations");

    (app(db), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, body)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");

    send(app, request).await
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("build request");

    send(app, request).await
}

async fn seed_relations(app: &Router) {
    let (status, _) = post_json(app, "/centros", json!({ "name": "CT Teste" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post_json(app, "/categorias", json!({ "name": "Amador" })).await;
    assert_eq!(status, StatusCode::CREATED);
}

fn athlete(name: &str, identity_code: &str) -> Value {
    json!({
        "name": name,
        "identity_code": identity_code,
        "training_center_id": 1,
        "category_id": 1,
    })
}

#[tokio::test]
async fn create_training_center_returns_the_full_record() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_json(&app, "/centros", json!({ "name": "CT Teste" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "CT Teste" }));
}

#[tokio::test]
async fn duplicate_training_center_name_answers_see_other() {
    let (app, _dir) = test_app().await;

    post_json(&app, "/centros", json!({ "name": "CT Teste" })).await;
    let (status, body) = post_json(&app, "/centros", json!({ "name": "CT Teste" })).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(body["detail"], "Integrity constraint violated");
}

#[tokio::test]
async fn list_training_centers_returns_every_stored_record() {
    let (app, _dir) = test_app().await;

    post_json(&app, "/centros", json!({ "name": "CT Teste" })).await;
    post_json(&app, "/centros", json!({ "name": "CT Norte" })).await;

    let (status, body) = get_json(&app, "/centros").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 2, "name": "CT Norte" },
            { "id": 1, "name": "CT Teste" },
        ])
    );
}

#[tokio::test]
async fn categories_round_trip() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_json(&app, "/categorias", json!({ "name": "Amador" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "Amador" }));

    let (status, body) = get_json(&app, "/categorias").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Amador" }]));

    let (status, body) = post_json(&app, "/categorias", json!({ "name": "Amador" })).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(body["detail"], "Integrity constraint violated");
}

#[tokio::test]
async fn create_athlete_resolves_its_relations() {
    let (app, _dir) = test_app().await;
    seed_relations(&app).await;

    let (status, body) = post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Ana",
            "identity_code": "000.000.000-00",
            "training_center": { "id": 1, "name": "CT Teste" },
            "category": { "id": 1, "name": "Amador" },
        })
    );
}

#[tokio::test]
async fn duplicate_identity_code_answers_see_other_naming_the_code() {
    let (app, _dir) = test_app().await;
    seed_relations(&app).await;

    let (status, _) = post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/atletas", athlete("Ana 2", "000.000.000-00")).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        body["detail"],
        "There is already an athlete registered with identity code: 000.000.000-00"
    );
}

#[tokio::test]
async fn athlete_listing_uses_the_reduced_shape() {
    let (app, _dir) = test_app().await;
    seed_relations(&app).await;
    post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;

    let (status, body) = get_json(&app, "/atletas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "items": [
                { "name": "Ana", "training_center": "CT Teste", "category": "Amador" }
            ],
            "total": 1,
            "limit": 50,
            "offset": 0,
        })
    );
}

#[tokio::test]
async fn athlete_listing_filters_by_name_and_identity_code() {
    let (app, _dir) = test_app().await;
    seed_relations(&app).await;
    post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;
    post_json(&app, "/atletas", athlete("Mariana", "111.111.111-11")).await;
    post_json(&app, "/atletas", athlete("Bruno", "222.222.222-22")).await;

    let (status, body) = get_json(&app, "/atletas?name=an").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["name"], "Ana");
    assert_eq!(body["items"][1]["name"], "Mariana");

    let (status, body) = get_json(&app, "/atletas?identity_code=222.222.222-22").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Bruno");

    let (status, body) = get_json(&app, "/atletas?name=an&identity_code=111.111.111-11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Mariana");

    let (status, body) = get_json(&app, "/atletas?name=zz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn athlete_listing_windows_with_limit_and_offset() {
    let (app, _dir) = test_app().await;
    seed_relations(&app).await;
    post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;
    post_json(&app, "/atletas", athlete("Mariana", "111.111.111-11")).await;
    post_json(&app, "/atletas", athlete("Bruno", "222.222.222-22")).await;

    let (status, body) = get_json(&app, "/atletas?limit=2&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["limit"], 2);

    let (status, body) = get_json(&app, "/atletas?limit=2&offset=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["name"], "Bruno");
    assert_eq!(body["total"], 3);

    let (status, body) = get_json(&app, "/atletas?limit=10&offset=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["total"], 3);
    assert_eq!(body["offset"], 9);
}

#[tokio::test]
async fn unknown_relation_id_is_an_internal_error() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "An internal error occurred");
}

#[tokio::test]
async fn malformed_identity_code_is_a_validation_error() {
    let (app, _dir) = test_app().await;
    seed_relations(&app).await;

    let (status, body) = post_json(&app, "/atletas", athlete("Ana", "123")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Validation failed");
}

#[tokio::test]
async fn registration_scenario_round_trips() {
    let (app, _dir) = test_app().await;

    let (status, _) = post_json(&app, "/centros", json!({ "name": "CT Teste" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post_json(&app, "/categorias", json!({ "name": "Amador" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post_json(&app, "/atletas", athlete("Ana", "000.000.000-00")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post_json(&app, "/atletas", athlete("Ana 2", "000.000.000-00")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (status, body) = get_json(&app, "/atletas?limit=10&offset=0&name=an").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"],
        json!([
            { "name": "Ana", "training_center": "CT Teste", "category": "Amador" }
        ])
    );
    assert_eq!(body["total"], 1);
}
