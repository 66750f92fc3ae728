//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::controller::{self, AnalysisOutcome, AnalyzeParams};
use crate::analysis::mode::AnalysisMode;
use crate::document::UploadedDocument;
use crate::errors::AppError;
use crate::session::{SessionHandle, SessionSnapshot};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub mode: AnalysisMode,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

#[derive(Debug, Deserialize)]
pub struct FollowUpRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct FollowUpResponse {
    pub session_id: Uuid,
    pub question: String,
    pub answer: String,
}

/// Fields of the upload form. Browsers submit an empty file part when no file
/// was chosen; that counts as no document.
#[derive(Debug, Default)]
struct AnalysisForm {
    document: Option<UploadedDocument>,
    job_description: Option<String>,
    mode: Option<AnalysisMode>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// One-shot upload + analyze. Multipart fields: `file`, `job_description`, `mode`.
/// Creates a session so follow-up questions can be asked against the result.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;
    let document = form.document.ok_or_else(AppError::missing_resume)?;

    let handle = state.sessions.create().await;
    let mut session = handle.lock().await;

    controller::upload(&mut session, document);
    let outcome = controller::analyze(
        &mut session,
        state.llm.as_ref(),
        AnalyzeParams {
            mode: form.mode.unwrap_or_default(),
            job_description: form.job_description,
        },
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        session_id: session.id,
        outcome,
    }))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let handle = state.sessions.create().await;
    let session = handle.lock().await;
    (StatusCode::CREATED, Json(session.snapshot()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = find_session(&state, session_id).await?;
    let session = handle.lock().await;
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/document
///
/// Multipart field `file`. Replaces any earlier document and analysis.
pub async fn handle_upload_document(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = find_session(&state, session_id).await?;
    let form = read_form(multipart).await?;
    let document = form.document.ok_or_else(AppError::missing_resume)?;

    let mut session = handle.lock().await;
    controller::upload(&mut session, document);
    Ok(Json(session.snapshot()))
}

/// POST /api/v1/sessions/:id/analyze
pub async fn handle_analyze_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let handle = find_session(&state, session_id).await?;
    let mut session = handle.lock().await;

    let outcome = controller::analyze(
        &mut session,
        state.llm.as_ref(),
        AnalyzeParams {
            mode: request.mode,
            job_description: request.job_description,
        },
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        session_id,
        outcome,
    }))
}

/// POST /api/v1/sessions/:id/follow-up
pub async fn handle_follow_up(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<FollowUpRequest>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let handle = find_session(&state, session_id).await?;
    let mut session = handle.lock().await;

    let exchange =
        controller::ask_follow_up(&mut session, state.llm.as_ref(), &request.question).await?;

    Ok(Json(FollowUpResponse {
        session_id,
        question: exchange.question,
        answer: exchange.answer,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, session_id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                if !bytes.is_empty() {
                    form.document = Some(UploadedDocument::new(filename, content_type, bytes));
                }
            }
            "job_description" => {
                let text = read_text(field).await?;
                form.job_description = Some(text);
            }
            "mode" => {
                let text = read_text(field).await?;
                if !text.trim().is_empty() {
                    form.mode = Some(text.parse().map_err(AppError::Validation)?);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}
