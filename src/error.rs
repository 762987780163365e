use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("profile summary has no focus items")]
    EmptyFocus,
    #[error("project `{project}` has no images")]
    NoImages { project: String },
    #[error("malformed link in {field}: `{value}`")]
    MalformedLink { field: String, value: String },
    #[error("malformed email address `{0}`")]
    MalformedEmail(String),
}

impl ContentError {
    /// Stable identifier used as the `error` field of structured log lines.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Parse(_) => "content_parse",
            Self::EmptyFocus => "content_empty_focus",
            Self::NoImages { .. } => "content_no_images",
            Self::MalformedLink { .. } => "content_malformed_link",
            Self::MalformedEmail(_) => "content_malformed_email",
        }
    }
}
