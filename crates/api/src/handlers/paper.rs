//! Handlers for the `/papers` resource.
//!
//! Upload is a single-file multipart request; the stored file gets a
//! generated unique name and the original filename is kept only as
//! display metadata. An interrupted upload leaves no database row (the
//! just-written file is removed best-effort on insert failure).

use std::path::{Path as FsPath, PathBuf};

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio_util::io::ReaderStream;

use paperdeck_core::error::CoreError;
use paperdeck_core::types::DbId;
use paperdeck_core::upload::{self, PDF_CONTENT_TYPE};
use paperdeck_db::repositories::PaperRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/papers/upload
///
/// Accept a multipart upload with a `title` text field and a `pdf` file
/// field. The declared media type must be `application/pdf` and the
/// file at most 50 MiB.
pub async fn upload_paper(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut title: Option<String> = None;
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("title") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                title = Some(value);
            }
            Some("pdf") => {
                let filename = field.file_name().unwrap_or("unnamed.pdf").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let title = upload::validate_title(&title.unwrap_or_default())?;
    let (filename, content_type, data) = file.ok_or_else(|| {
        AppError::Core(CoreError::Validation("No PDF file uploaded".to_string()))
    })?;
    upload::validate_upload(content_type.as_deref(), data.len())?;

    // Store under a generated unique name; the original filename never
    // touches the filesystem.
    let stored_name = upload::stored_filename();
    let upload_dir = PathBuf::from(&state.config.upload_dir);
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    let filepath = upload_dir.join(&stored_name);
    let file_size = data.len() as i64;

    tokio::fs::write(&filepath, data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let filepath_str = filepath.to_string_lossy().to_string();
    let paper = match PaperRepo::create(&state.pool, &title, &filename, &filepath_str, file_size)
        .await
    {
        Ok(paper) => paper,
        Err(e) => {
            // Do not leave an unreferenced file behind.
            if let Err(remove_err) = tokio::fs::remove_file(&filepath).await {
                tracing::warn!(path = %filepath_str, error = %remove_err,
                    "Failed to remove file after insert failure");
            }
            return Err(e.into());
        }
    };

    tracing::info!(paper_id = paper.id, title = %paper.title, file_size,
        "Paper uploaded");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: paperdeck_db::models::paper::PaperSummary::from(paper),
        }),
    ))
}

/// GET /api/v1/papers
///
/// List all papers, newest upload first.
pub async fn list_papers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let papers = PaperRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: papers }))
}

/// GET /api/v1/papers/{id}/pdf
///
/// Stream the stored PDF bytes. 404 for an unknown paper or when the
/// stored file has gone missing on disk.
pub async fn download_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let paper = PaperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Paper", id }))?;

    let file = tokio::fs::File::open(FsPath::new(&paper.filepath))
        .await
        .map_err(|e| {
            tracing::warn!(paper_id = id, path = %paper.filepath, error = %e,
                "Stored PDF missing on disk");
            AppError::Core(CoreError::NotFound { entity: "Paper file", id })
        })?;

    let stream = ReaderStream::new(file);
    let disposition = format!("inline; filename=\"{}\"", paper.filename.replace('"', ""));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, PDF_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, paper.file_size)
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// DELETE /api/v1/papers/{id}
///
/// Delete a paper. Annotations and comments cascade at the schema
/// level; the stored file is removed best-effort.
pub async fn delete_paper(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let paper = PaperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Paper", id }))?;

    PaperRepo::delete(&state.pool, id).await?;

    if let Err(e) = tokio::fs::remove_file(&paper.filepath).await {
        tracing::warn!(paper_id = id, path = %paper.filepath, error = %e,
            "Failed to remove stored PDF");
    }

    tracing::info!(paper_id = id, "Paper deleted");

    Ok(StatusCode::NO_CONTENT)
}
