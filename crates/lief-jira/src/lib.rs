//! Jira REST client used as the dispatcher's tracker collaborator.

mod jira_api_client;

pub use jira_api_client::{JiraApiClient, JiraApiConfig, JiraAuth};
