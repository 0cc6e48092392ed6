//! HTTP-level integration tests for the category CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", serde_json::json!({"name": name})).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_categories(pool: PgPool) {
    create_category(&pool, "Casamento").await;
    create_category(&pool, "Aniversário").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/categories").await).await;

    assert_eq!(json["success"], true);
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Aniversário", "Casamento"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_is_rejected_case_insensitively(pool: PgPool) {
    create_category(&pool, "Institucional").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "INSTITUCIONAL"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Já existe uma categoria com este nome");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_category_includes_financial_aggregates(pool: PgPool) {
    let category_id = create_category(&pool, "Eventos").await;

    let app = common::build_test_app(pool.clone());
    let client = body_json(
        post_json(app, "/api/clients", serde_json::json!({"name": "C"})).await,
    )
    .await;
    let client_id = client["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/projects",
        serde_json::json!({
            "title": "Show",
            "clientId": client_id,
            "categoryId": category_id,
            "clientPrice": 800.0,
            "captationCost": 300.0
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/categories/{category_id}")).await).await;

    assert_eq!(json["data"]["name"], "Eventos");
    assert_eq!(json["data"]["projectCount"], 1);
    assert_eq!(json["data"]["totalRevenue"], 800.0);
    assert_eq!(json["data"]["totalCosts"], 300.0);
    assert_eq!(json["data"]["totalMargin"], 500.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_category_name(pool: PgPool) {
    let id = create_category(&pool, "Antigo").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        serde_json::json!({"name": "Novo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Novo");
    assert_eq!(json["message"], "Categoria atualizada com sucesso");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_category_with_projects_is_blocked(pool: PgPool) {
    let category_id = create_category(&pool, "Em Uso").await;

    let app = common::build_test_app(pool.clone());
    let client = body_json(
        post_json(app, "/api/clients", serde_json::json!({"name": "C"})).await,
    )
    .await;
    let client_id = client["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/projects",
        serde_json::json!({"title": "P", "clientId": client_id, "categoryId": category_id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/categories/{category_id}")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Não é possível deletar categoria com projetos associados"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unused_category_succeeds(pool: PgPool) {
    let id = create_category(&pool, "Vazia").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Vazia");
    assert_eq!(json["message"], "Categoria deletada com sucesso");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_another_categorys_name_is_rejected(pool: PgPool) {
    create_category(&pool, "Casamento").await;
    let id = create_category(&pool, "Corporativo").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        serde_json::json!({"name": "CASAMENTO"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Já existe uma categoria com este nome");

    // The rejected update must not have touched the row.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/categories/{id}")).await).await;
    assert_eq!(json["data"]["name"], "Corporativo");
}
