//! HTTP-level integration tests for the client CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_client(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_client_returns_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({
            "name": "Estúdio Aurora",
            "email": "contato@aurora.com",
            "company": "Aurora Ltda"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Estúdio Aurora");
    assert_eq!(json["data"]["email"], "contato@aurora.com");
    assert!(json["data"]["id"].is_number());
    assert!(json["data"]["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_client_without_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/clients", serde_json::json!({"name": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Nome é obrigatório");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_rejected_case_insensitively(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "A", "email": "dup@studio.com"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "B", "email": "DUP@studio.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Já existe um cliente com este email");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_client_includes_financial_aggregates(pool: PgPool) {
    let client_id = create_client(&pool, "Com Projetos").await;

    // Two projects with known financials.
    for (price, capt, edit) in [(1000.0, 200.0, 100.0), (500.0, 50.0, 50.0)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/projects",
            serde_json::json!({
                "title": "P",
                "clientId": client_id,
                "clientPrice": price,
                "captationCost": capt,
                "editionCost": edit
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/clients/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["projectCount"], 2);
    assert_eq!(json["data"]["totalRevenue"], 1500.0);
    assert_eq!(json["data"]["totalCosts"], 400.0);
    assert_eq!(json["data"]["totalMargin"], 1100.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_client_with_no_projects_has_zero_totals(pool: PgPool) {
    let client_id = create_client(&pool, "Sem Projetos").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/clients/{client_id}")).await).await;

    assert_eq!(json["data"]["projectCount"], 0);
    assert_eq!(json["data"]["totalRevenue"], 0.0);
    assert_eq!(json["data"]["totalMargin"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_client_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/clients/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_client_keeps_omitted_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/clients",
            serde_json::json!({"name": "Original", "phone": "11 99999-0000"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/clients/{id}"),
        serde_json::json!({"name": "Renomeado"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Renomeado");
    assert_eq!(json["data"]["phone"], "11 99999-0000");
    assert_eq!(json["message"], "Cliente atualizado com sucesso");
}

// ---------------------------------------------------------------------------
// Delete guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_client_returns_deleted_entity(pool: PgPool) {
    let id = create_client(&pool, "Descartável").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Descartável");
    assert_eq!(json["message"], "Cliente deletado com sucesso");

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_client_with_projects_is_blocked(pool: PgPool) {
    let client_id = create_client(&pool, "Ocupado").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/projects",
        serde_json::json!({"title": "Em Andamento", "clientId": client_id}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/clients/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Não é possível deletar cliente com projetos associados"
    );

    // The client must still exist.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/clients/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_clients_is_ordered_by_name(pool: PgPool) {
    create_client(&pool, "Zeta Filmes").await;
    create_client(&pool, "Alfa Vídeo").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/clients").await).await;

    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Alfa Vídeo", "Zeta Filmes"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_another_clients_email_is_rejected(pool: PgPool) {
    create_client(&pool, "Dono do Email").await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Dono do Email", "email": "dono@studio.com"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/clients",
            serde_json::json!({"name": "Outro", "email": "outro@studio.com"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Case differs from the stored value; the uniqueness check is on LOWER().
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/clients/{id}"),
        serde_json::json!({"email": "DONO@studio.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Já existe um cliente com este email");

    // The rejected update must not have touched the row.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/clients/{id}")).await).await;
    assert_eq!(json["data"]["email"], "outro@studio.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_advances_updated_at(pool: PgPool) {
    let id = create_client(&pool, "Carimbo").await;

    let app = common::build_test_app(pool.clone());
    let before = body_json(get(app, &format!("/api/clients/{id}")).await).await;
    let before_updated =
        chrono::DateTime::parse_from_rfc3339(before["data"]["updatedAt"].as_str().unwrap())
            .unwrap();

    let app = common::build_test_app(pool);
    let after = body_json(
        put_json(
            app,
            &format!("/api/clients/{id}"),
            serde_json::json!({"name": "Carimbo Novo"}),
        )
        .await,
    )
    .await;
    let after_updated =
        chrono::DateTime::parse_from_rfc3339(after["data"]["updatedAt"].as_str().unwrap())
            .unwrap();

    assert!(after_updated > before_updated);
    assert_eq!(after["data"]["createdAt"], before["data"]["createdAt"]);
}
