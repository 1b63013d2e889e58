//! Text extraction adapter over `pdf-extract`.
//!
//! The extractor itself is opaque; this module owns the post-condition: the
//! trimmed text must clear a pipeline-specific minimum length, otherwise the
//! document is treated as unreadable (typically a scanned image).

use crate::errors::PipelineError;

/// Minimum extracted-text length for the interview pipeline.
pub const INTERVIEW_MIN_TEXT_LEN: usize = 30;
/// Minimum extracted-text length for the ATS pipeline.
pub const ATS_MIN_TEXT_LEN: usize = 50;

pub const INTERVIEW_UNREADABLE_HINT: &str = "Failed to extract readable text from resume. \
    Make sure it's a real text-based PDF, not an image scan.";
pub const ATS_UNREADABLE_HINT: &str =
    "Failed to extract text from resume. Ensure it's a readable PDF.";

/// Converts a binary document into text and enforces the minimum-length
/// post-condition. `hint` is the human-readable message surfaced to the
/// caller when the document is unreadable or effectively empty.
pub fn extract_text(
    bytes: &[u8],
    min_len: usize,
    hint: &'static str,
) -> Result<String, PipelineError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|_| PipelineError::UnreadableDocument(hint.to_string()))?;
    readable_text(&raw, min_len, hint)
}

/// Post-condition check, split out from the extractor call so the length
/// boundary is testable without fabricating PDFs.
fn readable_text(raw: &str, min_len: usize, hint: &'static str) -> Result<String, PipelineError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < min_len {
        return Err(PipelineError::UnreadableDocument(hint.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundary_29_rejected_30_accepted() {
        let just_short = "a".repeat(29);
        let just_long = "a".repeat(30);

        assert!(readable_text(&just_short, INTERVIEW_MIN_TEXT_LEN, INTERVIEW_UNREADABLE_HINT)
            .is_err());
        assert!(
            readable_text(&just_long, INTERVIEW_MIN_TEXT_LEN, INTERVIEW_UNREADABLE_HINT).is_ok()
        );
    }

    #[test]
    fn test_whitespace_does_not_count_toward_length() {
        let padded = format!("   {}   ", "a".repeat(29));
        assert!(readable_text(&padded, INTERVIEW_MIN_TEXT_LEN, INTERVIEW_UNREADABLE_HINT).is_err());
    }

    #[test]
    fn test_empty_text_rejected() {
        let result = readable_text("", ATS_MIN_TEXT_LEN, ATS_UNREADABLE_HINT);
        match result {
            Err(PipelineError::UnreadableDocument(msg)) => {
                assert!(msg.contains("readable PDF"));
            }
            other => panic!("expected UnreadableDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_accepted_text_is_trimmed() {
        let raw = format!("\n\n{}\n", "resume text long enough to pass the ats threshold easily");
        let text = readable_text(&raw, ATS_MIN_TEXT_LEN, ATS_UNREADABLE_HINT).unwrap();
        assert!(!text.starts_with('\n'));
        assert!(!text.ends_with('\n'));
    }
}
