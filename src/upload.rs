use std::path::Path;

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Document, SyllabusInput};

pub const FILE_FIELD: &str = "syllabus";
pub const TEXT_FIELD: &str = "text";

const PDF_MIME: &str = "application/pdf";

/// Reads the parse form. The uploaded file is spooled into `upload_dir` and
/// removed again before this returns, whatever the outcome.
pub async fn read_syllabus_form(
    mut multipart: Multipart,
    upload_dir: &Path,
) -> Result<SyllabusInput, AppError> {
    let mut input = SyllabusInput::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => input.document = spool(field, upload_dir).await?,
            Some(TEXT_FIELD) => input.text = Some(field.text().await?),
            other => debug!("ignoring multipart field {:?}", other),
        }
    }

    Ok(input)
}

async fn spool(mut field: Field<'_>, upload_dir: &Path) -> Result<Option<Document>, AppError> {
    let mime_type = match field.content_type() {
        Some(ct) if ct.starts_with("text/") => ct.to_string(),
        _ => PDF_MIME.to_string(),
    };

    // Dropping the handle deletes the file.
    let file = tempfile::Builder::new()
        .prefix("syllabus-")
        .tempfile_in(upload_dir)?;
    let mut out = tokio::fs::File::from_std(file.reopen()?);

    let mut size = 0usize;
    while let Some(chunk) = field.chunk().await? {
        size += chunk.len();
        out.write_all(&chunk).await?;
    }
    out.flush().await?;
    drop(out);

    if size == 0 {
        return Ok(None);
    }

    let data = read_back(&file).await?;
    debug!("spooled {} byte syllabus upload ({})", data.len(), mime_type);
    Ok(Some(Document { mime_type, data }))
}

async fn read_back(file: &NamedTempFile) -> Result<Vec<u8>, AppError> {
    Ok(tokio::fs::read(file.path()).await?)
}
