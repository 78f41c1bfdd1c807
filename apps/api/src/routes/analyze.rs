//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::AnalysisReport;
use crate::errors::AppError;
use crate::ingest::{BufferSource, TextSource};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub jd_text: String,
}

/// POST /api/v1/analyze
///
/// Compares pasted resume text against pasted job description text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = state
        .analyzer
        .analyze(&request.resume_text, &request.jd_text)?;
    Ok(Json(report))
}

/// One document as it arrived in a multipart body.
#[derive(Default)]
struct DocumentInput {
    upload: Option<BufferSource>,
    pasted: Option<String>,
}

impl DocumentInput {
    /// An uploaded file wins over pasted text for the same document.
    async fn into_text(self) -> Result<String, AppError> {
        match self.upload {
            Some(source) => {
                let text = source.read_text().await?;
                info!("Extracted {} chars from upload '{}'", text.len(), source.name());
                Ok(text)
            }
            None => Ok(self.pasted.unwrap_or_default()),
        }
    }
}

/// Reads a file part. An unselected file input arrives with an empty name and
/// body and counts as no upload.
async fn read_upload(
    file_name: String,
    field: Field<'_>,
) -> Result<Option<BufferSource>, AppError> {
    let bytes = field.bytes().await?;
    if file_name.is_empty() || bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(BufferSource::new(file_name, bytes)))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form. File parts `resume` and `job_description` (.pdf or .txt), or
/// text parts `resume_text` and `jd_text`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume = DocumentInput::default();
    let mut jd = DocumentInput::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);

        match (name.as_str(), file_name) {
            ("resume", Some(file_name)) => {
                resume.upload = read_upload(file_name, field).await?.or(resume.upload.take());
            }
            ("job_description", Some(file_name)) => {
                jd.upload = read_upload(file_name, field).await?.or(jd.upload.take());
            }
            ("resume" | "resume_text", None) => resume.pasted = Some(field.text().await?),
            ("job_description" | "jd_text", None) => jd.pasted = Some(field.text().await?),
            (other, _) => {
                return Err(AppError::Validation(format!(
                    "Unexpected multipart field '{other}'"
                )));
            }
        }
    }

    let resume_text = resume.into_text().await?;
    let jd_text = jd.into_text().await?;

    let report = state.analyzer.analyze(&resume_text, &jd_text)?;
    Ok(Json(report))
}
