//! End-to-end behavior against a local mock server: header injection, URL
//! resolution, body shaping, status-code dispatch and response coercion.

use companycam::v2::models::{Coordinate, Photo, Project, User};
use companycam::{Api, ApiConfig, ApiError, Payload, Query};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn api_for(server: &MockServer) -> Api {
    Api::from_config(&ApiConfig::new("test-token").server_url(server.uri()))
}

/// The client is blocking by design; run calls off the test runtime.
async fn call<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking call panicked")
}

#[tokio::test]
async fn test_requests_carry_bearer_auth_and_accept_headers() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/company"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "ACME"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let company = call(move || api.company.retrieve()).await.unwrap();
    let company = company.into_typed().expect("typed company");
    assert_eq!(company.name, "ACME");
}

#[tokio::test]
async fn test_list_decodes_into_declared_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "first_name": "Apollo"},
            {"id": "2", "first_name": "Artemis"},
        ])))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let users = call(move || api.users.list(None)).await.unwrap();
    let users: Vec<User> = users.into_typed().expect("typed users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].first_name.as_deref(), Some("Artemis"));
}

#[tokio::test]
async fn test_shape_mismatch_falls_back_to_raw_json() {
    let server = MockServer::start().await;
    // Company requires `name`; this body does not validate against it
    let body = json!({"errors": ["unexpected shape"]});
    Mock::given(method("GET"))
        .and(path("/company"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let payload = call(move || api.company.retrieve()).await.unwrap();
    assert_eq!(payload.into_raw(), Some(body));
}

#[tokio::test]
async fn test_delete_returns_true_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/2789583992"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let deleted = call(move || api.users.delete("2789583992")).await.unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn test_unhandled_2xx_is_empty_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/company"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let payload = call(move || api.company.retrieve()).await.unwrap();
    assert!(payload.is_empty());
}

#[tokio::test]
async fn test_each_documented_status_code_raises_its_kind() {
    init_tracing();
    for status in [400_u16, 401, 402, 403, 404, 409, 422, 500] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/current"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"errors": ["nope"]})),
            )
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = call(move || api.users.retrieve_current()).await.unwrap_err();
        assert_eq!(err.status(), Some(status));
        let matches_kind = match status {
            400 => matches!(err, ApiError::BadRequest(_)),
            401 => matches!(err, ApiError::Unauthorized(_)),
            402 => matches!(err, ApiError::PaymentRequired(_)),
            403 => matches!(err, ApiError::Forbidden(_)),
            404 => matches!(err, ApiError::NotFound(_)),
            409 => matches!(err, ApiError::Conflict(_)),
            422 => matches!(err, ApiError::UnprocessableEntity(_)),
            500 => matches!(err, ApiError::InternalServerError(_)),
            _ => unreachable!(),
        };
        assert!(matches_kind, "status {} raised {:?}", status, err);
    }
}

#[tokio::test]
async fn test_undocumented_status_code_raises_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = call(move || api.projects.list(None)).await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus(_)));
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn test_error_context_carries_request_and_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": ["not found"]})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = call(move || api.tags.retrieve("missing")).await.unwrap_err();
    let ctx = err.context().expect("http context");
    assert!(ctx.url.ends_with("/tags/missing"));
    assert!(ctx.body.contains("not found"));
}

#[tokio::test]
async fn test_url_template_resolution_from_string_and_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/projects/94772883/assigned_users/2789583992"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "2789583992"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let user = User {
        id: Some("2789583992".to_string()),
        ..User::default()
    };
    let assigned = call(move || api.projects.assign_user("94772883", &user))
        .await
        .unwrap();
    assert!(matches!(assigned, Payload::Typed(_)));
}

#[tokio::test]
async fn test_record_without_id_is_a_url_binding_error() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    let unsaved = Project::default();
    let err = call(move || api.projects.retrieve(&unsaved)).await.unwrap_err();
    assert!(matches!(err, ApiError::UrlBind(_)));
    // nothing was sent
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_parameters_forwarded_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .and(query_param("per_page", "25"))
        .and(query_param("project_id", "94772883"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let query = Query::new().set("per_page", 25_i64).set("project_id", "94772883");
    let photos = call(move || api.photos.list(Some(query))).await.unwrap();
    let photos: Vec<Photo> = photos.into_typed().expect("typed photos");
    assert!(photos.is_empty());
}

#[tokio::test]
async fn test_create_user_transmits_only_allow_listed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "first_name": "Apollo",
            "email_address": "apollo@example.com",
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "9", "first_name": "Apollo"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let user = User {
        id: Some("client-side-id-ignored".to_string()),
        first_name: Some("Apollo".to_string()),
        email_address: Some("apollo@example.com".to_string()),
        user_url: Some("https://app/users/9".to_string()),
        ..User::default()
    };
    let created = call(move || api.users.create(&user)).await.unwrap();
    let created = created.into_typed().expect("typed user");
    assert_eq!(created.id.as_deref(), Some("9"));
}

#[tokio::test]
async fn test_update_project_excludes_primary_contact() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/projects/94772883"))
        .and(body_json(json!({"name": "Warehouse"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "94772883", "name": "Warehouse"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let project: Project = serde_json::from_value(json!({
        "id": "94772883",
        "name": "Warehouse",
        "primary_contact": {"name": "Pat"},
    }))
    .unwrap();
    let updated = call(move || api.projects.update(&project)).await.unwrap();
    assert!(matches!(updated, Payload::Typed(_)));
}

#[tokio::test]
async fn test_create_photo_builds_nested_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/94772883/photos"))
        .and(body_json(json!({
            "photo": {
                "captured_at": 1672531200,
                "uri": "https://img/site.jpg",
                "coordinates": {"lat": 40.8, "lon": -96.7},
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let photo = call(move || {
        api.projects.create_photo(
            "94772883",
            "https://img/site.jpg",
            1_672_531_200,
            Some(Coordinate::new(40.8, -96.7)),
        )
    })
    .await
    .unwrap();
    assert!(matches!(photo, Payload::Typed(_)));
}

#[tokio::test]
async fn test_create_document_embeds_base64_attachment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/94772883/documents"))
        .and(body_json(json!({
            "document": {
                "name": "site-plan.txt",
                "attachment": "aGVsbG8=",
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "d1", "name": "site-plan.txt"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let document = call(move || {
        api.projects
            .create_document("94772883", "site-plan.txt", b"hello")
    })
    .await
    .unwrap();
    assert!(matches!(document, Payload::Typed(_)));
}

#[tokio::test]
async fn test_explicit_url_override_skips_template_resolution() {
    use companycam::core::kernel::{RequestParts, Route, TransportConfig};
    use companycam::v2::models::Company;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom/path"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "ACME"})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = TransportConfig::new(&ApiConfig::new("test-token").server_url(server.uri()));
    // the template would fail to resolve; the override wins
    let route = Route::get("/company/{missing}");
    let payload: Payload<Company> = call(move || {
        route.send(&transport, &[], RequestParts::new().with_url("/custom/path"))
    })
    .await
    .unwrap();
    assert!(matches!(payload, Payload::Typed(_)));
}

#[tokio::test]
async fn test_create_labels_wraps_project_labels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/94772883/labels"))
        .and(body_json(json!({"project": {"labels": ["roofing", "siding"]}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": "t1", "display_value": "roofing"},
            {"id": "t2", "display_value": "siding"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let labels = call(move || api.projects.create_labels("94772883", &["roofing", "siding"]))
        .await
        .unwrap();
    let labels = labels.into_typed().expect("typed tags");
    assert_eq!(labels.len(), 2);
}
