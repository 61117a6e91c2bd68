//! Axum route handlers for the form, plus the per-submission request handler.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_resume_text_blocking;
use crate::form::view::FormPage;
use crate::llm_client::LanguageModel;
use crate::pipeline::runner::{run_pipeline, PipelineOutput};
use crate::state::AppState;
use crate::wrap::wrap_text;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// The two form inputs as submitted. Either may be absent.
#[derive(Debug, Clone, Default)]
pub struct TailorSubmission {
    pub job_description: Option<String>,
    pub resume: Option<UploadedResume>,
}

#[derive(Debug, Clone)]
pub struct TailoredResume {
    pub run_id: Uuid,
    /// Final suggestions, wrapped for display.
    pub suggestions: String,
    pub analysis: PipelineOutput,
}

// ────────────────────────────────────────────────────────────────────────────
// Request handler
// ────────────────────────────────────────────────────────────────────────────

/// Handles one submission end to end: validate → extract → pipeline → wrap.
///
/// Nothing is retained between calls. No model call is made unless both
/// inputs are present and the resume parses.
pub async fn tailor_resume(
    model: &dyn LanguageModel,
    wrap_width: usize,
    submission: TailorSubmission,
) -> Result<TailoredResume, AppError> {
    let job_description = submission
        .job_description
        .filter(|jd| !jd.trim().is_empty());
    // Browsers send an empty file part when no file was chosen.
    let resume = submission.resume.filter(|r| !r.bytes.is_empty());

    let (Some(job_description), Some(resume)) = (job_description, resume) else {
        warn!("Submission rejected: job description or resume missing");
        return Err(AppError::MissingInput);
    };

    let run_id = Uuid::new_v4();
    let span = info_span!("tailor", %run_id);

    async move {
        info!(
            "Tailoring {} ({} bytes) against a {}-char job description with {}",
            resume.file_name.as_deref().unwrap_or("<unnamed>"),
            resume.bytes.len(),
            job_description.chars().count(),
            model.model_name()
        );

        let resume_text = extract_resume_text_blocking(resume.bytes)
            .await
            .map_err(|e| {
                warn!("Resume could not be read: {e}");
                AppError::UnreadableResume(e.to_string())
            })?;

        let analysis = run_pipeline(model, &job_description, &resume_text).await?;
        let suggestions = wrap_text(&analysis.suggestions, wrap_width);

        info!("Tailoring complete");

        Ok::<_, AppError>(TailoredResume {
            run_id,
            suggestions,
            analysis,
        })
    }
    .instrument(span)
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_form() -> Result<Html<String>, AppError> {
    Ok(Html(FormPage::default().render()?))
}

/// POST /tailor
///
/// Multipart fields: `job_description` (text) and `resume` (PDF file).
///
/// Failures re-render the form with the submitted job description kept in place.
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, Response> {
    let submission = read_submission(multipart)
        .await
        .map_err(IntoResponse::into_response)?;
    let job_description = submission.job_description.clone().unwrap_or_default();

    let wrap_width = state.config.wrap_width;
    let tailored = match tailor_resume(state.llm.as_ref(), wrap_width, submission).await {
        Ok(tailored) => tailored,
        Err(e) => return Err(e.into_form_response(job_description)),
    };
    info!("Rendering suggestions for run {}", tailored.run_id);

    let page = FormPage {
        job_description,
        notice: None,
        result: Some(tailored.suggestions),
        resume_analysis: Some(wrap_text(&tailored.analysis.resume_analysis, wrap_width)),
        job_analysis: Some(wrap_text(&tailored.analysis.job_analysis, wrap_width)),
    };
    page.render()
        .map(Html)
        .map_err(|e| AppError::from(e).into_response())
}

async fn read_submission(mut multipart: Multipart) -> Result<TailorSubmission, AppError> {
    let mut submission = TailorSubmission::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                submission.job_description = Some(field.text().await.map_err(malformed)?);
            }
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                submission.resume = Some(UploadedResume { file_name, bytes });
            }
            other => warn!("Ignoring unexpected form field {other:?}"),
        }
    }

    Ok(submission)
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed form submission: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::pdf_with_pages;
    use crate::llm_client::fake::FakeModel;

    const JD: &str = "Platform Engineer. Required: Rust, Kubernetes, Terraform.";

    fn resume(bytes: Vec<u8>) -> Option<UploadedResume> {
        Some(UploadedResume {
            file_name: Some("resume.pdf".to_string()),
            bytes: Bytes::from(bytes),
        })
    }

    fn valid_submission() -> TailorSubmission {
        TailorSubmission {
            job_description: Some(JD.to_string()),
            resume: resume(pdf_with_pages(&["JaneDoeBackendEngineer", "ProjectsAndAwards"])),
        }
    }

    #[tokio::test]
    async fn test_missing_job_description_makes_no_calls() {
        let model = FakeModel::replying(&["a", "b", "c"]);
        let submission = TailorSubmission {
            job_description: None,
            ..valid_submission()
        };

        let err = tailor_resume(&model, 80, submission).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_job_description_counts_as_missing() {
        let model = FakeModel::replying(&["a", "b", "c"]);
        let submission = TailorSubmission {
            job_description: Some("  \n\t ".to_string()),
            ..valid_submission()
        };

        let err = tailor_resume(&model, 80, submission).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_resume_makes_no_calls() {
        let model = FakeModel::replying(&["a", "b", "c"]);
        let submission = TailorSubmission {
            resume: None,
            ..valid_submission()
        };

        let err = tailor_resume(&model, 80, submission).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_part_counts_as_missing() {
        let model = FakeModel::replying(&["a", "b", "c"]);
        let submission = TailorSubmission {
            resume: resume(Vec::new()),
            ..valid_submission()
        };

        let err = tailor_resume(&model, 80, submission).await.unwrap_err();
        assert!(matches!(err, AppError::MissingInput));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_pdf_is_unreadable_and_makes_no_calls() {
        let model = FakeModel::replying(&["a", "b", "c"]);
        let submission = TailorSubmission {
            resume: resume(b"%PDF-1.7\nthis is not really a pdf".to_vec()),
            ..valid_submission()
        };

        let err = tailor_resume(&model, 80, submission).await.unwrap_err();
        assert!(matches!(err, AppError::UnreadableResume(_)));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_unreadable() {
        let model = FakeModel::replying(&["a", "b", "c"]);
        let submission = TailorSubmission {
            resume: resume(b"Jane Doe, plain text resume".to_vec()),
            ..valid_submission()
        };

        let err = tailor_resume(&model, 80, submission).await.unwrap_err();
        assert!(matches!(err, AppError::UnreadableResume(_)));
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submission_runs_three_steps_with_extracted_text() {
        let model = FakeModel::replying(&["RESUME-REPORT", "JOB-SUMMARY", "SUGGESTIONS"]);

        let tailored = tailor_resume(&model, 80, valid_submission()).await.unwrap();
        assert_eq!(tailored.suggestions, "SUGGESTIONS");
        assert_eq!(tailored.analysis.resume_analysis, "RESUME-REPORT");

        let calls = model.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].prompt.contains("JaneDoeBackendEngineer"));
        assert!(calls[0].prompt.contains("ProjectsAndAwards"));
        assert!(calls[1].prompt.contains(JD));
        assert!(calls[2].prompt.contains("RESUME-REPORT"));
        assert!(calls[2].prompt.contains("JOB-SUMMARY"));
    }

    #[tokio::test]
    async fn test_suggestions_wrapped_to_width() {
        let long = "Quantify the migration project by stating how many services moved and the latency improvement achieved";
        let model = FakeModel::replying(&["r", "j", long]);

        let tailored = tailor_resume(&model, 30, valid_submission()).await.unwrap();
        assert!(tailored.suggestions.lines().count() > 1);
        assert!(tailored.suggestions.lines().all(|l| l.chars().count() <= 30));
        assert_eq!(tailored.analysis.suggestions, long);
    }

    #[tokio::test]
    async fn test_each_run_gets_its_own_id() {
        let model = FakeModel::replying(&["a", "b", "c", "d", "e", "f"]);
        let first = tailor_resume(&model, 80, valid_submission()).await.unwrap();
        let second = tailor_resume(&model, 80, valid_submission()).await.unwrap();
        assert_ne!(first.run_id, second.run_id);
    }
}
