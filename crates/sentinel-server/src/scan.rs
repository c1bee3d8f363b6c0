//! Offline scan of a single document, used by the `scan` subcommand.

use std::path::Path;

use sentinel_core::Result;
use sentinel_protocol::report::preview;
use sentinel_protocol::{Report, SentinelEngine};

/// Extract, score and harden the document at `path`.
pub fn scan_file(engine: &SentinelEngine, path: &Path, preview_chars: usize) -> Result<Report> {
    let text = sentinel_ingest::extract_file(path)?;
    let evaluation = engine.evaluate(&text);
    Ok(Report::from_evaluation(evaluation).with_extracted_text(preview(&text, preview_chars)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_infer::EntityCapability;

    #[test]
    fn test_scan_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bio.txt");
        std::fs::write(&path, "Contact me at jane@acme.com").unwrap();

        let engine = SentinelEngine::with_capability(EntityCapability::unavailable("test"));
        let report = scan_file(&engine, &path, 7).unwrap();
        assert_eq!(report.risk_score, 40);
        assert_eq!(report.market_score, 60);
        assert_eq!(report.safe_text, "Contact me at [ID_GATEWAY]");
        assert_eq!(report.extracted_text.as_deref(), Some("Contact"));
    }

    #[test]
    fn test_scan_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let engine = SentinelEngine::with_capability(EntityCapability::unavailable("test"));
        assert!(matches!(
            scan_file(&engine, &path, 100),
            Err(sentinel_core::Error::EmptyText)
        ));
    }
}
