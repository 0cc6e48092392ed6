//! Integration tests for project budget items and file metadata.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn seed_project(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let client = body_json(
        post_json(app, "/api/clients", serde_json::json!({"name": "C"})).await,
    )
    .await;
    let client_id = client["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(
            app,
            "/api/projects",
            serde_json::json!({"title": "Orçado", "clientId": client_id}),
        )
        .await,
    )
    .await;
    project["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Budget items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn budget_item_total_is_computed(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/budget"),
        serde_json::json!({"description": "Diária de drone", "quantity": 2.0, "unitPrice": 350.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["description"], "Diária de drone");
    assert_eq!(json["data"]["total"], 700.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn budget_item_defaults_quantity_to_one(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/budget"),
            serde_json::json!({"description": "Locação", "unitPrice": 150.0}),
        )
        .await,
    )
    .await;

    assert_eq!(json["data"]["quantity"], 1.0);
    assert_eq!(json["data"]["total"], 150.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn budget_item_rejects_negative_amounts(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/budget"),
        serde_json::json!({"description": "Inválido", "quantity": -1.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Quantidade inválida");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn budget_item_update_recomputes_total(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/budget"),
            serde_json::json!({"description": "Edição", "quantity": 4.0, "unitPrice": 100.0}),
        )
        .await,
    )
    .await;
    let item_id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(
        put_json(
            app,
            &format!("/api/projects/{project_id}/budget/{item_id}"),
            serde_json::json!({"quantity": 6.0}),
        )
        .await,
    )
    .await;

    assert_eq!(json["data"]["quantity"], 6.0);
    assert_eq!(json["data"]["unitPrice"], 100.0);
    assert_eq!(json["data"]["total"], 600.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn budget_for_unknown_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/999999/budget").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_budget_item(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/budget"),
            serde_json::json!({"description": "Descartável"}),
        )
        .await,
    )
    .await;
    let item_id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/projects/{project_id}/budget/{item_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Item de orçamento deletado com sucesso");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/projects/{project_id}/budget")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// File metadata
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn file_category_is_derived_from_mime(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    for (mime, expected) in [
        ("video/mp4", "video"),
        ("image/png", "image"),
        ("audio/wav", "audio"),
        ("application/pdf", "document"),
        ("application/zip", "other"),
    ] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(
            post_json(
                app,
                &format!("/api/projects/{project_id}/files"),
                serde_json::json!({"filename": "arquivo", "mimeType": mime}),
            )
            .await,
        )
        .await;
        assert_eq!(json["data"]["category"], expected, "mime: {mime}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn file_requires_filename_and_mime(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/files"),
        serde_json::json!({"filename": "", "mimeType": "video/mp4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn file_rejects_negative_size(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/projects/{project_id}/files"),
        serde_json::json!({"filename": "f.mp4", "mimeType": "video/mp4", "sizeBytes": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn file_upload_defaults_and_delete(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/api/projects/{project_id}/files"),
            serde_json::json!({"filename": "corte-final.mp4", "mimeType": "video/mp4", "sizeBytes": 1024}),
        )
        .await,
    )
    .await;
    assert_eq!(created["data"]["uploadedBy"], "current-user");
    assert_eq!(created["data"]["sizeBytes"], 1024);
    let file_id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/projects/{project_id}/files/{file_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Arquivo deletado com sucesso");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/projects/{project_id}/files")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
