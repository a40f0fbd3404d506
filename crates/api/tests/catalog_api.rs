//! HTTP-level integration tests for the employee and project catalogues.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user_and_token, get, get_auth, post_json, post_json_auth};
use labourlog_db::repositories::{EmployeeRepo, ProjectRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_employee_is_listed(pool: PgPool) {
    let (_user, token) = create_user_and_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Ciarán Walsh", "badge": "B-104" });
    let response = post_json_auth(app.clone(), "/employees", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_string());
    assert_eq!(created["badge"], "B-104");
    assert!(created["pin"].is_null());

    let response = get_auth(app, "/employees", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
    assert_eq!(list[0]["name"], "Ciarán Walsh");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_list_is_empty_array(pool: PgPool) {
    let (_user, token) = create_user_and_token(&pool).await;
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(app, "/employees", &token).await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_employee_name_is_422(pool: PgPool) {
    let (_user, token) = create_user_and_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "   " });
    let response = post_json_auth(app, "/employees", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employees_require_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, "/employees").await.status(),
        StatusCode::UNAUTHORIZED
    );
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_listed_by_code(pool: PgPool) {
    let (_user, token) = create_user_and_token(&pool).await;
    let app = common::build_test_app(pool);

    for (code, name) in [("P-200", "Line 2 retrofit"), ("P-100", "Press shop")] {
        let body = serde_json::json!({ "code": code, "name": name });
        let response = post_json_auth(app.clone(), "/projects", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get_auth(app, "/projects", &token).await).await;
    let codes: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["P-100", "P-200"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_project_code_is_allowed(pool: PgPool) {
    let (_user, token) = create_user_and_token(&pool).await;
    let app = common::build_test_app(pool);

    for _ in 0..2 {
        let body = serde_json::json!({ "code": "P-1", "name": "Same code" });
        let response = post_json_auth(app.clone(), "/projects", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get_auth(app, "/projects", &token).await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_missing_name_is_rejected(pool: PgPool) {
    let (_user, token) = create_user_and_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "code": "P-9" });
    let response = post_json_auth(app, "/projects", body, &token).await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Token guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalogue_writes_and_reads_require_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let employee = serde_json::json!({ "name": "Niamh Byrne" });
    let response = post_json(app.clone(), "/employees", employee).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Missing token");

    assert_eq!(
        get(app.clone(), "/projects").await.status(),
        StatusCode::UNAUTHORIZED
    );

    let project = serde_json::json!({ "code": "P-1", "name": "Press shop" });
    let response = post_json(app.clone(), "/projects", project).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Nothing was written by the rejected requests.
    assert!(EmployeeRepo::list(&pool).await.unwrap().is_empty());
    assert!(ProjectRepo::list(&pool).await.unwrap().is_empty());
}
