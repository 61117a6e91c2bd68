//! PDF Text Extractor — turns an uploaded resume into plain text.
//!
//! Text-layer extraction only (no OCR). Pages are concatenated in page order
//! with nothing inserted between them.

use thiserror::Error;
use tracing::debug;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("the uploaded file is not a PDF")]
    NotPdf,

    #[error("{0}")]
    Parse(String),

    #[error("the PDF contains no extractable text")]
    NoText,
}

/// Extracts the text of every page of `bytes`, in page order.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if !bytes.starts_with(PDF_SIGNATURE) {
        return Err(ExtractError::NotPdf);
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    debug!("Extracted text from {} PDF pages", pages.len());

    let text = pages.concat();
    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }

    Ok(text)
}

/// Runs [`extract_resume_text`] on the blocking pool.
///
/// The parser can panic on hostile input; a panic is reported as a parse failure.
pub async fn extract_resume_text_blocking(bytes: bytes::Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
        .await
        .map_err(|e| ExtractError::Parse(format!("PDF parser aborted: {e}")))?
}


#[cfg(test)]
mod tests {
    use super::fixtures::pdf_with_pages;
    use super::*;

    #[test]
    fn test_single_page_text_extracted() {
        let pdf = pdf_with_pages(&["RustaceanEngineer"]);
        let text = extract_resume_text(&pdf).unwrap();
        assert!(text.contains("RustaceanEngineer"), "got {text:?}");
    }

    #[test]
    fn test_pages_concatenated_in_order() {
        let pdf = pdf_with_pages(&["AlphaPage", "BravoPage", "CharliePage"]);
        let text = extract_resume_text(&pdf).unwrap();

        let a = text.find("AlphaPage").expect("page 1 text missing");
        let b = text.find("BravoPage").expect("page 2 text missing");
        let c = text.find("CharliePage").expect("page 3 text missing");
        assert!(a < b && b < c, "pages out of order: {text:?}");

        let pages = pdf_extract::extract_text_from_mem_by_pages(&pdf).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(text, pages.concat());
    }

    #[test]
    fn test_non_pdf_bytes_rejected() {
        let err = extract_resume_text(b"PK\x03\x04 this is a zip").unwrap_err();
        assert!(matches!(err, ExtractError::NotPdf));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(
            extract_resume_text(b"").unwrap_err(),
            ExtractError::NotPdf
        ));
    }

    #[test]
    fn test_truncated_pdf_is_parse_error() {
        let err = extract_resume_text(b"%PDF-1.4\n1 0 obj\n<< /Type /Cat").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_pdf_without_text_is_no_text() {
        let pdf = pdf_with_pages(&[""]);
        assert!(matches!(
            extract_resume_text(&pdf).unwrap_err(),
            ExtractError::NoText
        ));
    }

    #[tokio::test]
    async fn test_blocking_wrapper_returns_text() {
        let pdf = pdf_with_pages(&["OffloadedParse"]);
        let text = extract_resume_text_blocking(bytes::Bytes::from(pdf))
            .await
            .unwrap();
        assert!(text.contains("OffloadedParse"));
    }

    #[tokio::test]
    async fn test_blocking_wrapper_propagates_errors() {
        let err = extract_resume_text_blocking(bytes::Bytes::from_static(b"garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotPdf));
    }
}
