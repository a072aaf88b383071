//! Integration tests for the `/ai` resource.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, get, post_json, seed_paper};
use sqlx::PgPool;

async fn seed_annotation(pool: &PgPool, paper_id: i64) -> i64 {
    let coordinates = r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0,"pageX":800.0,"pageY":1000.0}"#;
    paperdeck_db::repositories::AnnotationRepo::create(
        pool,
        paper_id,
        1,
        coordinates,
        "the scaled dot-product attention mechanism",
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ask_without_question_is_rejected(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/ai/ask", serde_json::json!({"question": "  "})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ask_with_annotation_uses_context_and_records_comment(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool.clone());
    let paper_id = seed_paper(&pool, "Paper").await;
    let annotation_id = seed_annotation(&pool, paper_id).await;

    let response = post_json(
        app.clone(),
        "/api/v1/ai/ask",
        serde_json::json!({
            "question": "what does this mean?",
            "paper_id": paper_id,
            "annotation_id": annotation_id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let answer = json["data"]["response"].as_str().unwrap();
    // The canned responder interpolates both question and context.
    assert!(answer.contains("what does this mean?"));
    assert!(answer.contains("scaled dot-product attention"));
    assert!(json["data"]["conversation_id"].is_i64());

    // The exchange was attached to the annotation as an AI comment.
    let json = body_json(
        get(app.clone(), &format!("/api/v1/comments/annotation/{annotation_id}")).await,
    )
    .await;
    let comments = json["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["is_ai_response"], true);
    let content = comments[0]["content"].as_str().unwrap();
    assert!(content.starts_with("Q: what does this mean?"));
    assert!(content.contains("\n\nA: "));

    // And logged in the conversation history, newest first.
    let json = body_json(
        get(app, &format!("/api/v1/ai/conversations/{paper_id}")).await,
    )
    .await;
    let conversations = json["data"].as_array().unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0]["user_question"], "what does this mean?");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ask_with_unknown_annotation_returns_404(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/ai/ask",
        serde_json::json!({"question": "anything?", "annotation_id": 999999}),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ask_without_annotation_creates_no_comment(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool.clone());
    let paper_id = seed_paper(&pool, "Paper").await;

    let response = post_json(
        app,
        "/api/v1/ai/ask",
        serde_json::json!({"question": "general question?", "paper_id": paper_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
