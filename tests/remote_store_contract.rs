//! Remote Store Contract Tests
//!
//! Verify the HTTP store speaks the remote REST surface exactly:
//! - GET /tasks, POST /tasks, GET/PUT/DELETE /tasks/{id}
//! - JSON bodies with `id`/`name`/`completion` field names
//! - non-success statuses are mapped to typed errors, never swallowed

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskpad::store::{StoreError, TaskStore};
use taskpad::{HttpTaskStore, Task};

#[tokio::test]
async fn list_returns_tasks_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "B", "completion": true},
            {"id": 1, "name": "A", "completion": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let tasks = store.list().await.expect("list failed");

    // server order is preserved, no client-side sort
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 2);
    assert_eq!(tasks[1].id, 1);
    assert!(tasks[0].completion);
}

#[tokio::test]
async fn create_posts_full_json_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"id": 5, "name": "Buy milk", "completion": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 5, "name": "Buy milk", "completion": false}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let created = store
        .create(&Task::new(5, "Buy milk".to_string()))
        .await
        .expect("create failed");

    assert_eq!(created.id, 5);
    assert_eq!(created.name, "Buy milk");
}

#[tokio::test]
async fn find_by_id_returns_none_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/7"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "task not found"})),
        )
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let found = store.find_by_id(7).await.expect("find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_id_decodes_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 3, "name": "You can update tasks", "completion": true}
        )))
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let found = store.find_by_id(3).await.expect("find failed").expect("missing");
    assert_eq!(found.name, "You can update tasks");
    assert!(found.completion);
}

#[tokio::test]
async fn update_puts_to_task_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"id": 1, "name": "A", "completion": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 1, "name": "A", "completion": true}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let updated = store
        .update(&Task {
            id: 1,
            name: "A".to_string(),
            completion: true,
        })
        .await
        .expect("update failed");
    assert!(updated.completion);
}

#[tokio::test]
async fn update_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "task not found"})),
        )
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let err = store
        .update(&Task::new(9, "Ghost".to_string()))
        .await
        .expect_err("update should fail");
    assert!(matches!(err, StoreError::NotFound(9)));
}

#[tokio::test]
async fn delete_sends_delete_to_task_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "task deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    store.delete(4).await.expect("delete failed");
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(server.uri());
    let err = store.list().await.expect_err("list should fail");
    match err {
        StoreError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // nothing listens here
    let store = HttpTaskStore::new("http://127.0.0.1:9");
    let err = store.list().await.expect_err("list should fail");
    assert!(matches!(err, StoreError::Transport(_)));
}
