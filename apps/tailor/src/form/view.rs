//! Askama view models for the form page.

use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// A banner shown above the form.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Warning => "notice-warning",
            NoticeKind::Error => "notice-error",
        }
    }
}

/// The single page of the app. Also used to render error responses.
#[derive(Template, Default)]
#[template(path = "form.html")]
pub struct FormPage {
    /// Echoed back into the textarea after a submission.
    pub job_description: String,
    pub notice: Option<Notice>,
    /// Wrapped suggestions, shown under the result heading.
    pub result: Option<String>,
    /// Intermediate step outputs, shown collapsed below the result.
    pub resume_analysis: Option<String>,
    pub job_analysis: Option<String>,
}
