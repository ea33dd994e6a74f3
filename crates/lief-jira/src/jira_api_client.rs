use std::time::Duration;

use async_trait::async_trait;
use lief_core::{truncate_with_omission, ClientError, TrackerClient, TrackerIssue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

const SERVICE: &str = "jira";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Debug, Clone, Deserialize)]
struct JiraIssueFields {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct JiraIssueResponse {
    key: String,
    #[serde(default)]
    fields: Option<JiraIssueFields>,
}

#[derive(Debug, Clone, Deserialize)]
struct JiraCreatedIssueResponse {
    key: String,
}

#[derive(Debug, Clone, Deserialize)]
struct JiraCommentResponse {
    id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Credentials sent with every Jira request.
pub enum JiraAuth {
    /// Jira Cloud: account email plus API token.
    Basic { user: String, token: String },
    /// Jira Data Center personal access token.
    Bearer { token: String },
}

#[derive(Debug, Clone)]
/// Connection settings for [`JiraApiClient`].
pub struct JiraApiConfig {
    pub site: String,
    pub auth: JiraAuth,
    pub request_timeout_ms: u64,
}

#[derive(Clone)]
/// Jira REST v2 client. Each call is a single attempt.
pub struct JiraApiClient {
    http: reqwest::Client,
    site: String,
    auth: JiraAuth,
}

impl JiraApiClient {
    pub fn new(config: JiraApiConfig) -> Result<Self, ClientError> {
        let site = config.site.trim().trim_end_matches('/').to_string();
        if site.is_empty() {
            return Err(ClientError::InvalidRequest(
                "jira site must not be empty".to_string(),
            ));
        }
        let token = match &config.auth {
            JiraAuth::Basic { token, .. } | JiraAuth::Bearer { token } => token,
        };
        if token.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "jira token must not be empty".to_string(),
            ));
        }
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("lief-bridge"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
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
            site,
            auth: config.auth,
        })
    }

    /// Browser URL of an issue.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{key}", self.site)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/2/{path}", self.site)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            JiraAuth::Basic { user, token } => request.basic_auth(user.trim(), Some(token.trim())),
            JiraAuth::Bearer { token } => request.bearer_auth(token.trim()),
        }
    }

    async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|error| ClientError::Transport {
                service: SERVICE,
                operation,
                source: Box::new(error),
            })
    }

    async fn ensure_success(
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::HttpStatus {
            service: SERVICE,
            operation,
            status: status.as_u16(),
            body: truncate_with_omission(&body, ERROR_BODY_MAX_CHARS),
        })
    }

    async fn decode<T>(
        operation: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        response
            .json::<T>()
            .await
            .map_err(|error| ClientError::InvalidResponse {
                service: SERVICE,
                operation,
                message: error.to_string(),
            })
    }

    async fn request_json<T>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(operation, request).await?;
        let response = Self::ensure_success(operation, response).await?;
        Self::decode(operation, response).await
    }
}

#[async_trait]
impl TrackerClient for JiraApiClient {
    async fn find_issue(&self, key: &str) -> Result<Option<TrackerIssue>, ClientError> {
        let operation = "find issue";
        let request = self
            .http
            .get(self.api_url(&format!("issue/{key}")))
            .query(&[("fields", "description")]);
        let response = self.send(operation, request).await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(issue_key = key, "jira issue not found");
            return Ok(None);
        }
        let response = Self::ensure_success(operation, response).await?;
        let issue: JiraIssueResponse = Self::decode(operation, response).await?;
        Ok(Some(TrackerIssue {
            url: Some(self.browse_url(&issue.key)),
            description: issue
                .fields
                .and_then(|fields| fields.description)
                .filter(|description| !description.trim().is_empty()),
            key: issue.key,
        }))
    }

    async fn create_issue(
        &self,
        project_key: &str,
        issue_type: &str,
        component: Option<&str>,
        title: &str,
    ) -> Result<TrackerIssue, ClientError> {
        let mut fields = Map::new();
        fields.insert("project".to_string(), json!({ "key": project_key }));
        fields.insert("issuetype".to_string(), json!({ "name": issue_type }));
        fields.insert("summary".to_string(), Value::String(title.to_string()));
        if let Some(component) = component {
            fields.insert("components".to_string(), json!([{ "name": component }]));
        }
        let request = self
            .http
            .post(self.api_url("issue"))
            .json(&json!({ "fields": fields }));
        let created: JiraCreatedIssueResponse = self.request_json("create issue", request).await?;
        Ok(TrackerIssue {
            url: Some(self.browse_url(&created.key)),
            key: created.key,
            description: None,
        })
    }

    async fn transition_issue(
        &self,
        issue: &TrackerIssue,
        transition_id: &str,
    ) -> Result<(), ClientError> {
        let operation = "transition issue";
        let request = self
            .http
            .post(self.api_url(&format!("issue/{}/transitions", issue.key)))
            .json(&json!({ "transition": { "id": transition_id } }));
        let response = self.send(operation, request).await?;
        Self::ensure_success(operation, response).await?;
        debug!(issue_key = %issue.key, transition_id, "transitioned jira issue");
        Ok(())
    }

    async fn create_comment(&self, issue_key: &str, body: &str) -> Result<(), ClientError> {
        let request = self
            .http
            .post(self.api_url(&format!("issue/{issue_key}/comment")))
            .json(&json!({ "body": body }));
        let created: JiraCommentResponse = self.request_json("create comment", request).await?;
        debug!(issue_key, comment_id = %created.id, "created jira comment");
        Ok(())
    }
}
