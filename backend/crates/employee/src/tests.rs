//! Request-level tests for the employee router
//! Each test drives the full router (extractors, handlers, middleware).

#[cfg(test)]
mod support {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    pub struct TestResponse {
        pub status: StatusCode,
        pub content_type: Option<String>,
        pub body: Vec<u8>,
    }

    impl TestResponse {
        pub fn json(&self) -> Value {
            serde_json::from_slice(&self.body).expect("response body is not JSON")
        }
    }

    pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub fn empty(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn with_body(method: Method, uri: &str, content_type: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn json(method: Method, uri: &str, body: Value) -> Request<Body> {
        with_body(method, uri, "application/json", &body.to_string())
    }

    pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
        assert_eq!(response.status, status);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            response.json(),
            serde_json::json!({ "message": message, "status": status.as_u16() })
        );
    }
}

#[cfg(test)]
mod crud_tests {
    use super::support::*;
    use crate::employee_router;
    use crate::infra::memory::InMemoryEmployeeRepository;
    use axum::Router;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn app() -> (Router, InMemoryEmployeeRepository) {
        let repo = InMemoryEmployeeRepository::new();
        (employee_router(repo.clone()), repo)
    }

    async fn create(app: &Router, body: serde_json::Value) -> String {
        let response = send(app, json(Method::POST, "/employees", body)).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_generated_id() {
        let (app, repo) = app();

        let response = send(
            &app,
            json(
                Method::POST,
                "/employees",
                json!({ "name": "A", "age": 30, "salary": 1000 }),
            ),
        )
        .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let body = response.json();
        assert!(!body["id"].as_str().unwrap().is_empty());
        assert_eq!(body["name"], "A");
        assert_eq!(body["age"], 30);
        assert_eq!(body["salary"], 1000.0);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_empty_returns_empty_array() {
        let (app, _) = app();

        let response = send(&app, empty(Method::GET, "/employees")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json(), json!([]));
    }

    #[tokio::test]
    async fn test_list_returns_created_records_in_order() {
        let (app, _) = app();
        let first = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;
        let second = create(&app, json!({ "name": "B", "age": 41, "salary": 2000.5 })).await;

        let response = send(&app, empty(Method::GET, "/employees")).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.json(),
            json!([
                { "id": first, "name": "A", "age": 30, "salary": 1000.0 },
                { "id": second, "name": "B", "age": 41, "salary": 2000.5 },
            ])
        );
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let (app, _) = app();
        let id = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;

        let response = send(&app, empty(Method::GET, &format!("/employees/{id}"))).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()["id"], id.as_str());

        let missing = kernel::id::EmployeeId::new();
        let response = send(&app, empty(Method::GET, &format!("/employees/{missing}"))).await;
        assert_error(&response, StatusCode::NOT_FOUND, "Employee not found");
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let (app, _) = app();

        let response = send(&app, empty(Method::GET, "/employees/5f1d7c3e8a")).await;

        assert_error(&response, StatusCode::NOT_FOUND, "Employee not found");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_body() {
        let (app, repo) = app();

        let response = send(&app, empty(Method::POST, "/employees")).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "Request body can not be empty!");

        let response = send(&app, json(Method::POST, "/employees", json!({}))).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "Request body can not be empty!");

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_non_json_content_type() {
        let (app, repo) = app();

        let response = send(
            &app,
            with_body(
                Method::POST,
                "/employees",
                "text/plain",
                r#"{"name":"A","age":30,"salary":1000}"#,
            ),
        )
        .await;

        assert_error(
            &response,
            StatusCode::UNPROCESSABLE_ENTITY,
            "Content-Type must be application/json",
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_document_wins_over_wrong_content_type() {
        let (app, repo) = app();
        let id = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;

        for body in ["{}", "null"] {
            let response = send(&app, with_body(Method::POST, "/employees", "text/plain", body)).await;
            assert_error(&response, StatusCode::BAD_REQUEST, "Request body can not be empty!");

            let response = send(
                &app,
                with_body(Method::PUT, &format!("/employees/{id}"), "text/plain", body),
            )
            .await;
            assert_error(&response, StatusCode::BAD_REQUEST, "Request body can not be empty!");
        }

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_incomplete_or_malformed_body() {
        let (app, _) = app();

        let response = send(&app, json(Method::POST, "/employees", json!({ "name": "A" }))).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["status"], 400);

        let response = send(
            &app,
            with_body(Method::POST, "/employees", "application/json", "{\"name\":"),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(
            response.json()["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
    }

    #[tokio::test]
    async fn test_update_merges_partial_fields() {
        let (app, _) = app();
        let id = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;

        let response = send(
            &app,
            json(
                Method::PUT,
                &format!("/employees/{id}"),
                json!({ "salary": 1500 }),
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(response.body.is_empty());

        let response = send(&app, empty(Method::GET, &format!("/employees/{id}"))).await;
        assert_eq!(
            response.json(),
            json!({ "id": id, "name": "A", "age": 30, "salary": 1500.0 })
        );
    }

    #[tokio::test]
    async fn test_update_missing_and_empty() {
        let (app, _) = app();
        let id = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;

        let missing = kernel::id::EmployeeId::new();
        let response = send(
            &app,
            json(
                Method::PUT,
                &format!("/employees/{missing}"),
                json!({ "name": "B" }),
            ),
        )
        .await;
        assert_error(&response, StatusCode::NOT_FOUND, "Employee not found");

        let response = send(&app, empty(Method::PUT, &format!("/employees/{id}"))).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "Request body can not be empty!");

        let response = send(
            &app,
            json(Method::PUT, &format!("/employees/{id}"), json!({ "name": null })),
        )
        .await;
        assert_error(&response, StatusCode::BAD_REQUEST, "Request body can not be empty!");
    }

    #[tokio::test]
    async fn test_update_rejects_non_json_and_unknown_fields() {
        let (app, _) = app();
        let id = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;
        let uri = format!("/employees/{id}");

        let response = send(
            &app,
            with_body(
                Method::PUT,
                &uri,
                "application/x-www-form-urlencoded",
                "name=B",
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

        let response = send(&app, json(Method::PUT, &uri, json!({ "id": "other" }))).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let response = send(&app, empty(Method::GET, &uri)).await;
        assert_eq!(response.json()["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let (app, repo) = app();
        let id = create(&app, json!({ "name": "A", "age": 30, "salary": 1000 })).await;
        let uri = format!("/employees/{id}");

        let response = send(&app, empty(Method::DELETE, &uri)).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(repo.is_empty().await);

        let response = send(&app, empty(Method::DELETE, &uri)).await;
        assert_error(&response, StatusCode::NOT_FOUND, "Employee not found");
    }

    #[tokio::test]
    async fn test_unknown_route_and_method_are_normalized() {
        let (app, _) = app();

        let response = send(&app, empty(Method::GET, "/departments")).await;
        assert_error(&response, StatusCode::NOT_FOUND, "Route not found");

        let response = send(&app, empty(Method::PATCH, "/employees")).await;
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(response.json()["status"], 405);
    }
}

#[cfg(test)]
mod store_failure_tests {
    use super::support::*;
    use crate::domain::entity::{Employee, EmployeePatch, NewEmployee};
    use crate::domain::repository::EmployeeRepository;
    use crate::employee_router;
    use crate::error::{EmployeeError, EmployeeResult};
    use axum::http::{Method, StatusCode};
    use kernel::id::EmployeeId;
    use serde_json::json;

    #[derive(Clone, Copy)]
    enum Failure {
        /// A driver error with no useful status
        Protocol,
        /// The pool gave up waiting for a connection
        PoolTimeout,
    }

    #[derive(Clone)]
    struct FailingRepository(Failure);

    impl FailingRepository {
        fn error(&self) -> EmployeeError {
            match self.0 {
                Failure::Protocol => EmployeeError::Store(sqlx::Error::Protocol(
                    "unexpected message from server: password=hunter2".into(),
                )),
                Failure::PoolTimeout => EmployeeError::Store(sqlx::Error::PoolTimedOut),
            }
        }
    }

    impl EmployeeRepository for FailingRepository {
        async fn insert_one(&self, _: &NewEmployee) -> EmployeeResult<Employee> {
            Err(self.error())
        }

        async fn find_all(&self) -> EmployeeResult<Vec<Employee>> {
            Err(self.error())
        }

        async fn find_one(&self, _: &EmployeeId) -> EmployeeResult<Option<Employee>> {
            Err(self.error())
        }

        async fn update_one(&self, _: &EmployeeId, _: &EmployeePatch) -> EmployeeResult<u64> {
            Err(self.error())
        }

        async fn delete_one(&self, _: &EmployeeId) -> EmployeeResult<u64> {
            Err(self.error())
        }
    }

    /// Finds every id but never manages to write to it
    #[derive(Clone)]
    struct VanishingRepository;

    impl EmployeeRepository for VanishingRepository {
        async fn insert_one(&self, _: &NewEmployee) -> EmployeeResult<Employee> {
            Err(EmployeeError::Internal("read-only".to_string()))
        }

        async fn find_all(&self) -> EmployeeResult<Vec<Employee>> {
            Ok(Vec::new())
        }

        async fn find_one(&self, id: &EmployeeId) -> EmployeeResult<Option<Employee>> {
            Ok(Some(Employee {
                id: *id,
                name: "A".to_string(),
                age: 30,
                salary: 1000.0,
            }))
        }

        async fn update_one(&self, _: &EmployeeId, _: &EmployeePatch) -> EmployeeResult<u64> {
            Ok(0)
        }

        async fn delete_one(&self, _: &EmployeeId) -> EmployeeResult<u64> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_500_without_driver_details() {
        let app = employee_router(FailingRepository(Failure::Protocol));
        let id = EmployeeId::new();

        let requests = vec![
            empty(Method::GET, "/employees"),
            empty(Method::GET, &format!("/employees/{id}")),
            json(
                Method::POST,
                "/employees",
                json!({ "name": "A", "age": 30, "salary": 1000 }),
            ),
            json(Method::PUT, &format!("/employees/{id}"), json!({ "age": 31 })),
            empty(Method::DELETE, &format!("/employees/{id}")),
        ];

        for request in requests {
            let response = send(&app, request).await;
            assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Database error");
            assert!(!String::from_utf8_lossy(&response.body).contains("hunter2"));
        }
    }

    #[tokio::test]
    async fn test_store_status_is_propagated_when_meaningful() {
        let app = employee_router(FailingRepository(Failure::PoolTimeout));

        let response = send(&app, empty(Method::GET, "/employees")).await;

        assert_error(
            &response,
            StatusCode::SERVICE_UNAVAILABLE,
            "Database connection pool exhausted",
        );
    }

    #[tokio::test]
    async fn test_internal_error_message_is_generic() {
        let app = employee_router(VanishingRepository);

        let response = send(
            &app,
            json(
                Method::POST,
                "/employees",
                json!({ "name": "A", "age": 30, "salary": 1000 }),
            ),
        )
        .await;

        assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    }

    #[tokio::test]
    async fn test_write_matching_nothing_after_existence_check() {
        let app = employee_router(VanishingRepository);
        let uri = format!("/employees/{}", EmployeeId::new());

        let response = send(&app, json(Method::PUT, &uri, json!({ "age": 31 }))).await;
        assert_error(
            &response,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to update employee",
        );

        let response = send(&app, empty(Method::DELETE, &uri)).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "Unable to delete employee");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(EmployeeError, StatusCode)> = vec![
            (EmployeeError::EmptyBody, StatusCode::BAD_REQUEST),
            (
                EmployeeError::UnsupportedContentType,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                EmployeeError::InvalidBody("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (EmployeeError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
            (EmployeeError::NotFound, StatusCode::NOT_FOUND),
            (EmployeeError::UpdateFailed, StatusCode::INTERNAL_SERVER_ERROR),
            (EmployeeError::DeleteFailed, StatusCode::BAD_REQUEST),
            (
                EmployeeError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EmployeeError::EmptyBody.to_string(),
            "Request body can not be empty!"
        );
        assert_eq!(EmployeeError::NotFound.to_string(), "Employee not found");
    }
}
