//! # Integration Tests for ams-api
//!
//! Drives the assembled application through `tower::ServiceExt::oneshot`:
//! full CRUD flows per resource, the identifier defensive filter, validation
//! failures on the wire, envelope shape on every path, and health probes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ams_api::envelope::Envelope;
use ams_api::state::AppState;

/// Helper: build the test app over a fresh in-memory store.
fn test_app() -> axum::Router {
    ams_api::app(AppState::in_memory())
}

/// Helper: read the response body as an [`Envelope`].
async fn envelope(response: axum::http::Response<Body>) -> Envelope {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

const COMPANY: &str = r#"{
    "Name": "Acme Industrial",
    "Address": "1 Factory Way",
    "Email": "ops@acme.example",
    "Phone": "+14155550132"
}"#;

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn liveness_probe_answers_ok() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_probe_answers_ready_with_memory_store() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Create -------------------------------------------------------------------

#[tokio::test]
async fn create_company_echoes_payload_with_assigned_id() {
    let response = test_app()
        .oneshot(post("/v1/companies", COMPANY))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert_eq!(body.code, 200);
    assert_eq!(body.message, "New companies created");

    let data = body.data.unwrap();
    assert_eq!(data["Name"], "Acme Industrial");
    assert_eq!(data["Address"], "1 Factory Way");
    assert_eq!(data["Email"], "ops@acme.example");
    assert_eq!(data["Phone"], "+14155550132");
    assert_eq!(data["ID"], 1);
    assert!(data["CreatedAt"].is_string());
}

#[tokio::test]
async fn create_company_missing_email_names_field_and_rule() {
    let payload = r#"{"Name":"Acme","Address":"1 Factory Way","Phone":"+14155550132"}"#;
    let response = test_app()
        .oneshot(post("/v1/companies", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = envelope(response).await;
    assert_eq!(body.code, 400);
    assert!(body.message.contains("Email"), "got: {}", body.message);
    assert!(body.message.contains("required"), "got: {}", body.message);
    assert!(body.data.is_none());
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let response = test_app()
        .oneshot(post("/v1/companies", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = envelope(response).await;
    assert!(body.message.contains("malformed"));
}

#[tokio::test]
async fn create_with_array_payload_is_400() {
    let response = test_app()
        .oneshot(post("/v1/companies", "[1,2,3]"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_on_unknown_resource_is_404() {
    let response = test_app()
        .oneshot(post("/v1/widgets", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = envelope(response).await;
    assert!(body.message.contains("widgets"));
}

// -- Read ---------------------------------------------------------------------

#[tokio::test]
async fn read_returns_every_created_entity() {
    let app = test_app();

    app.clone()
        .oneshot(post("/v1/companies", COMPANY))
        .await
        .unwrap();
    app.clone()
        .oneshot(post(
            "/v1/companies",
            &COMPANY.replace("ops@acme.example", "ops@globex.example"),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/v1/companies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert_eq!(body.message, "companies read");
    let rows = body.data.unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn read_empty_resource_returns_empty_collection() {
    let response = test_app().oneshot(get("/v1/suppliers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert_eq!(body.data.unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn read_one_returns_entity_by_id() {
    let app = test_app();
    app.clone()
        .oneshot(post("/v1/companies", COMPANY))
        .await
        .unwrap();

    let response = app.oneshot(get("/v1/companies/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert_eq!(body.message, "ID 1 read from companies");
    assert_eq!(body.data.unwrap()["Name"], "Acme Industrial");
}

#[tokio::test]
async fn read_one_missing_record_is_404_with_store_text() {
    let response = test_app().oneshot(get("/v1/companies/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = envelope(response).await;
    assert_eq!(body.code, 404);
    assert!(body.message.contains("companies"));
}

// -- Identifier filter --------------------------------------------------------

#[tokio::test]
async fn garbage_identifiers_are_rejected_before_the_store() {
    // "%20" decodes to a single space; "0", "null", "undefined", and "NaN"
    // are the legacy client-interpolation artifacts.
    for token in ["%20", "0", "null", "undefined", "NaN"] {
        for request in [
            get(&format!("/v1/companies/{token}")),
            put(&format!("/v1/companies/{token}"), "{}"),
            delete(&format!("/v1/companies/{token}")),
        ] {
            let response = test_app().oneshot(request).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::BAD_REQUEST,
                "token {token:?} must be rejected"
            );
            let body = envelope(response).await;
            assert_eq!(body.message, "id is required");
        }
    }
}

// -- Update -------------------------------------------------------------------

#[tokio::test]
async fn update_merges_partial_payload() {
    let app = test_app();
    app.clone()
        .oneshot(post("/v1/companies", COMPANY))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(put("/v1/companies/1", r#"{"Address":"2 Plant Road"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert_eq!(body.message, "ID 1 updated from companies");
    let data = body.data.unwrap();
    assert_eq!(data["Address"], "2 Plant Road");
    assert_eq!(data["Name"], "Acme Industrial");
    assert_eq!(data["Phone"], "+14155550132");

    // The merge is durable.
    let response = app.oneshot(get("/v1/companies/1")).await.unwrap();
    let body = envelope(response).await;
    assert_eq!(body.data.unwrap()["Address"], "2 Plant Road");
}

#[tokio::test]
async fn update_with_invalid_field_is_400_and_leaves_record_intact() {
    let app = test_app();
    app.clone()
        .oneshot(post("/v1/companies", COMPANY))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(put("/v1/companies/1", r#"{"Email":"broken"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = envelope(response).await;
    assert!(body.message.contains("Email"));

    let response = app.oneshot(get("/v1/companies/1")).await.unwrap();
    let body = envelope(response).await;
    assert_eq!(body.data.unwrap()["Email"], "ops@acme.example");
}

#[tokio::test]
async fn update_with_non_numeric_id_reaches_the_store_and_fails() {
    // "abc123" passes the defensive filter; the store's rejection is
    // surfaced, not silently turned into a 200.
    let response = test_app()
        .oneshot(put("/v1/companies/abc123", r#"{"Name":"x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = envelope(response).await;
    assert!(body.message.contains("abc123"), "got: {}", body.message);
}

#[tokio::test]
async fn update_missing_record_is_404() {
    let response = test_app()
        .oneshot(put("/v1/companies/42", r#"{"Name":"x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Delete -------------------------------------------------------------------

#[tokio::test]
async fn delete_confirms_and_record_disappears() {
    let app = test_app();
    app.clone()
        .oneshot(post("/v1/companies", COMPANY))
        .await
        .unwrap();

    let response = app.clone().oneshot(delete("/v1/companies/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = envelope(response).await;
    assert_eq!(body.message, "ID 1 deleted from companies");
    assert!(body.data.is_none());

    let response = app.oneshot(get("/v1/companies/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_absent_id_succeeds() {
    let response = test_app().oneshot(delete("/v1/companies/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Other resources through the same pipeline --------------------------------

#[tokio::test]
async fn every_registered_resource_serves_an_empty_list() {
    let app = test_app();
    for slug in [
        "companies",
        "compliance-documents",
        "equipment-categories",
        "equipment-docs",
        "equipment",
        "inventory",
        "maintenance-history",
        "maintenance-parts-usage",
        "maintenance-schedule",
        "maintenance-types",
        "notifications",
        "purchase-orders",
        "roles",
        "service-providers",
        "suppliers",
        "users",
    ] {
        let response = app
            .clone()
            .oneshot(get(&format!("/v1/{slug}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "resource {slug}");
    }
}

#[tokio::test]
async fn notification_enum_constraint_is_enforced_on_the_wire() {
    let payload = r#"{
        "UserID": 1,
        "RelatedType": "invoices",
        "NotificationType": "stock-low",
        "Message": "Bearings below minimum",
        "Status": "Unread"
    }"#;
    let response = test_app()
        .oneshot(post("/v1/notifications", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = envelope(response).await;
    assert!(body.message.contains("RelatedType"));
    assert!(body.message.contains("oneof"));
}

#[tokio::test]
async fn maintenance_type_crud_round_trip() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post(
            "/v1/maintenance-types",
            r#"{"TypeName":"Lubrication","Description":"Grease and oil points"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(put(
            "/v1/maintenance-types/1",
            r#"{"Description":null}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = envelope(response).await;
    assert_eq!(body.data.unwrap()["Description"], serde_json::Value::Null);

    let response = app
        .clone()
        .oneshot(delete("/v1/maintenance-types/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/v1/maintenance-types")).await.unwrap();
    let body = envelope(response).await;
    assert_eq!(body.data.unwrap(), serde_json::json!([]));
}
