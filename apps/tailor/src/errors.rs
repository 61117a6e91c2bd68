use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::form::view::{FormPage, Notice};

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both the job description and your resume.";

/// Application-level error type.
/// Implements `IntoResponse` so form handlers can return `Result<T, AppError>`;
/// the form is re-rendered with a notice instead of a bare error body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide both the job description and your resume.")]
    MissingInput,

    #[error("Error reading PDF: {0}")]
    UnreadableResume(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_notice(&self) -> (StatusCode, Notice) {
        match self {
            AppError::MissingInput => (
                StatusCode::BAD_REQUEST,
                Notice::warning(MISSING_INPUT_MESSAGE),
            ),
            AppError::UnreadableResume(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Notice::error(self.to_string()))
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, Notice::error(msg.clone())),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    Notice::error(
                        "The language model request failed. No suggestions were produced; \
                         please try again.",
                    ),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Notice::error("The page could not be rendered."),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Notice::error("An internal server error occurred."),
                )
            }
        }
    }
}

impl AppError {
    /// Renders the form with this error's notice, keeping the submitted job description.
    pub fn into_form_response(self, job_description: String) -> Response {
        let (status, notice) = self.status_and_notice();

        let page = FormPage {
            job_description,
            notice: Some(notice),
            ..FormPage::default()
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            // The page itself failed; fall back to the bare message.
            Err(e) => {
                tracing::error!("Failed to render error page: {e}");
                (status, self.to_string()).into_response()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_form_response(String::new())
    }
}
