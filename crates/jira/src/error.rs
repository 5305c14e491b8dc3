use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jira returned {status}: {body}")]
    Api { status: u16, body: String },
}
