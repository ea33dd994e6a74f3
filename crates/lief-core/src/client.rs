use async_trait::async_trait;
use thiserror::Error;

/// Reaction content posted on a forwarded comment.
pub const REACTION_PLUS_ONE: &str = "+1";

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Jira issue fields the bridge reads.
pub struct TrackerIssue {
    pub key: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
/// Failure raised by a tracker or source-control client.
pub enum ClientError {
    #[error("{service} api {operation} request failed: {source}")]
    Transport {
        service: &'static str,
        operation: &'static str,
        #[source]
        source: BoxError,
    },
    #[error("{service} api {operation} failed with status {status}: {body}")]
    HttpStatus {
        service: &'static str,
        operation: &'static str,
        status: u16,
        body: String,
    },
    #[error("{service} api {operation} returned an invalid response: {message}")]
    InvalidResponse {
        service: &'static str,
        operation: &'static str,
        message: String,
    },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[async_trait]
/// Issue tracker operations used by the dispatcher.
///
/// A lookup miss is `Ok(None)`; only transport or API failures are errors.
pub trait TrackerClient: Send + Sync {
    async fn find_issue(&self, key: &str) -> Result<Option<TrackerIssue>, ClientError>;

    async fn create_issue(
        &self,
        project_key: &str,
        issue_type: &str,
        component: Option<&str>,
        title: &str,
    ) -> Result<TrackerIssue, ClientError>;

    async fn transition_issue(
        &self,
        issue: &TrackerIssue,
        transition_id: &str,
    ) -> Result<(), ClientError>;

    async fn create_comment(&self, issue_key: &str, body: &str) -> Result<(), ClientError>;
}

#[async_trait]
/// Pull request operations used by the dispatcher. `repo` is an `owner/name` slug.
pub trait SourceControlClient: Send + Sync {
    async fn create_comment(
        &self,
        repo: &str,
        pr_number: u64,
        body: &str,
    ) -> Result<(), ClientError>;

    async fn create_reaction(
        &self,
        repo: &str,
        comment_id: u64,
        reaction: &str,
    ) -> Result<(), ClientError>;

    async fn update_pull_request_title(
        &self,
        repo: &str,
        pr_number: u64,
        title: &str,
    ) -> Result<(), ClientError>;
}
