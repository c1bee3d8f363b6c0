//! Document text extraction dispatched on the uploaded file name.

use std::path::Path;

use sentinel_core::{Error, Result};

use crate::office;

/// Document kinds recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    Pdf,
    Presentation,
    PlainText,
}

impl DocumentKind {
    /// Detect the kind from a file name (case-insensitive extension match).
    pub fn from_filename(filename: &str) -> Self {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "docx" => Self::Docx,
            "pdf" => Self::Pdf,
            "ppt" | "pptx" => Self::Presentation,
            _ => Self::PlainText,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Pdf => "pdf",
            Self::Presentation => "pptx",
            Self::PlainText => "text",
        }
    }

    /// Extensions with a dedicated extractor.
    pub fn supported_extensions() -> &'static [&'static str] {
        &["docx", "pptx", "ppt", "pdf", "txt"]
    }
}

/// Extract plain text from uploaded document bytes.
///
/// Fails with `Error::Extraction` for broken containers and with
/// `Error::EmptyText` when nothing readable remains.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String> {
    let kind = DocumentKind::from_filename(filename);
    tracing::debug!("Extracting {} ({}, {} bytes)", filename, kind.as_str(), bytes.len());

    let text = match kind {
        DocumentKind::Docx => office::extract_docx(bytes)?,
        DocumentKind::Presentation => office::extract_pptx(bytes)?,
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::PlainText => decode_utf8_dropping_invalid(bytes),
    };

    if text.trim().is_empty() {
        return Err(Error::EmptyText);
    }
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::Extraction(format!("File processing error: {}", e)))
}

/// Decode UTF-8, silently dropping invalid byte sequences.
fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Read a file from disk and extract its text.
pub fn extract_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    extract_text(filename, &bytes)
}
