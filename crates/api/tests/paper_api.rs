//! Integration tests for the `/papers` resource.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_bytes, body_json, delete, get, upload_paper};
use sqlx::PgPool;

/// A minimal but plausible PDF payload.
const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< >>\n%%EOF\n";

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_and_list_papers(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let response = upload_paper(
        app.clone(),
        Some("  Attention Is All You Need  "),
        "attention.pdf",
        "application/pdf",
        PDF_BYTES,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let paper = &json["data"];
    assert_eq!(paper["title"], "Attention Is All You Need");
    assert_eq!(paper["filename"], "attention.pdf");
    assert_eq!(paper["file_size"], PDF_BYTES.len() as i64);
    // The stored filepath is a server-side detail and is not exposed.
    assert!(paper.get("filepath").is_none());

    let response = get(app, "/api/v1/papers").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn papers_are_listed_newest_first(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    for title in ["first", "second", "third"] {
        let response = upload_paper(
            app.clone(),
            Some(title),
            "paper.pdf",
            "application/pdf",
            PDF_BYTES,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/v1/papers").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn png_upload_is_rejected_and_nothing_persists(pool: PgPool) {
    let (app, config) = common::build_test_app(pool.clone());

    let response = upload_paper(
        app.clone(),
        Some("Sneaky image"),
        "image.png",
        "image/png",
        b"\x89PNG\r\n",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only PDF files are allowed");

    // No paper row was created.
    let json = body_json(get(app, "/api/v1/papers").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Nothing was written under the uploads path.
    let entries = match std::fs::read_dir(&config.upload_dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0, // directory was never created
    };
    assert_eq!(entries, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_title_is_rejected(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let response =
        upload_paper(app, None, "paper.pdf", "application/pdf", PDF_BYTES).await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pdf_download_streams_stored_bytes(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let json = body_json(
        upload_paper(
            app.clone(),
            Some("Paper"),
            "paper.pdf",
            "application/pdf",
            PDF_BYTES,
        )
        .await,
    )
    .await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/papers/{id}/pdf")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    assert_eq!(body_bytes(response).await, PDF_BYTES);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pdf_download_for_unknown_paper_returns_404(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let response = get(app, "/api/v1/papers/9999/pdf").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_paper_cascades_annotations_and_removes_file(pool: PgPool) {
    let (app, config) = common::build_test_app(pool.clone());

    let json = body_json(
        upload_paper(
            app.clone(),
            Some("Paper"),
            "paper.pdf",
            "application/pdf",
            PDF_BYTES,
        )
        .await,
    )
    .await;
    let paper_id = json["data"]["id"].as_i64().unwrap();

    // Attach an annotation so the cascade has something to delete.
    let coordinates = serde_json::json!({
        "x": 10.0, "y": 20.0, "width": 30.0, "height": 40.0,
        "pageX": 800.0, "pageY": 1000.0
    });
    let response = common::post_json(
        app.clone(),
        "/api/v1/annotations",
        serde_json::json!({
            "paper_id": paper_id,
            "page_number": 1,
            "coordinates": coordinates,
            "highlighted_text": "passage"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete(app.clone(), &format!("/api/v1/papers/{paper_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Paper and its annotations are gone.
    let response = get(app.clone(), "/api/v1/papers").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM annotations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    // The stored file was unlinked.
    let entries = std::fs::read_dir(&config.upload_dir).unwrap().count();
    assert_eq!(entries, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_paper_returns_404(pool: PgPool) {
    let (app, _config) = common::build_test_app(pool);

    let response = delete(app, "/api/v1/papers/424242").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
