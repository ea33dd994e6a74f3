use std::time::Duration;

use async_trait::async_trait;
use lief_core::{truncate_with_omission, ClientError, SourceControlClient};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::repo_ref::RepoRef;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

const SERVICE: &str = "github";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Debug, Clone, Deserialize)]
struct GithubCommentCreateResponse {
    id: u64,
    html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GithubReactionResponse {
    id: u64,
}

#[derive(Debug, Clone)]
/// Connection settings for [`GithubApiClient`].
pub struct GithubApiConfig {
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: u64,
}

#[derive(Clone)]
/// GitHub REST v3 client. Each call is a single attempt.
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubApiClient {
    pub fn new(config: GithubApiConfig) -> Result<Self, ClientError> {
        if config.token.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "github token must not be empty".to_string(),
            ));
        }
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("lief-bridge"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let auth_header = format!("Bearer {}", config.token.trim());
        let auth_value = reqwest::header::HeaderValue::from_str(&auth_header).map_err(|_| {
            ClientError::InvalidRequest("invalid github authorization header".to_string())
        })?;
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()
            .map_err(|error| ClientError::Transport {
                service: SERVICE,
                operation: "build client",
                source: Box::new(error),
            })?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn repo_ref(repo: &str) -> Result<RepoRef, ClientError> {
        RepoRef::parse(repo).map_err(|error| ClientError::InvalidRequest(error.to_string()))
    }

    async fn request_json<T>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|error| ClientError::Transport {
                service: SERVICE,
                operation,
                source: Box::new(error),
            })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus {
                service: SERVICE,
                operation,
                status: status.as_u16(),
                body: truncate_with_omission(&body, ERROR_BODY_MAX_CHARS),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|error| ClientError::InvalidResponse {
                service: SERVICE,
                operation,
                message: error.to_string(),
            })
    }
}

#[async_trait]
impl SourceControlClient for GithubApiClient {
    async fn create_comment(
        &self,
        repo: &str,
        pr_number: u64,
        body: &str,
    ) -> Result<(), ClientError> {
        let repo = Self::repo_ref(repo)?;
        let request = self
            .http
            .post(format!(
                "{}/repos/{}/{}/issues/{}/comments",
                self.api_base, repo.owner, repo.name, pr_number
            ))
            .json(&json!({ "body": body }));
        let created: GithubCommentCreateResponse =
            self.request_json("create issue comment", request).await?;
        debug!(
            comment_id = created.id,
            url = created.html_url.as_deref().unwrap_or_default(),
            "created github comment"
        );
        Ok(())
    }

    async fn create_reaction(
        &self,
        repo: &str,
        comment_id: u64,
        reaction: &str,
    ) -> Result<(), ClientError> {
        let repo = Self::repo_ref(repo)?;
        let request = self
            .http
            .post(format!(
                "{}/repos/{}/{}/issues/comments/{}/reactions",
                self.api_base, repo.owner, repo.name, comment_id
            ))
            .json(&json!({ "content": reaction }));
        let created: GithubReactionResponse =
            self.request_json("create comment reaction", request).await?;
        debug!(reaction_id = created.id, comment_id, "created github reaction");
        Ok(())
    }

    async fn update_pull_request_title(
        &self,
        repo: &str,
        pr_number: u64,
        title: &str,
    ) -> Result<(), ClientError> {
        let repo = Self::repo_ref(repo)?;
        let request = self
            .http
            .patch(format!(
                "{}/repos/{}/{}/pulls/{}",
                self.api_base, repo.owner, repo.name, pr_number
            ))
            .json(&json!({ "title": title }));
        let _: serde_json::Value = self
            .request_json("update pull request title", request)
            .await?;
        Ok(())
    }
}
