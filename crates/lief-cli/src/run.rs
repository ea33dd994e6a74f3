use std::sync::Arc;

use anyhow::{Context, Result};
use lief_core::{CommentOutcome, Dispatcher, PullRequestOutcome};
use lief_github::{decode_github_event, GithubApiClient, GithubBridgeEvent};
use lief_jira::JiraApiClient;
use tracing::info;

use crate::bootstrap::{build_bridge_config, build_github_config, build_jira_config};
use crate::cli_args::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What handling one event did.
pub(crate) enum DispatchReport {
    Unsupported { event_name: String },
    Comment(CommentOutcome),
    PullRequest(PullRequestOutcome),
}

impl DispatchReport {
    pub(crate) fn summary(&self) -> String {
        match self {
            Self::Unsupported { event_name } => format!("event `{event_name}` ignored"),
            Self::Comment(CommentOutcome::Ignored(reason)) => {
                format!("comment ignored: {}", reason.as_str())
            }
            Self::Comment(CommentOutcome::Forwarded {
                issue_key,
                created_issue,
            }) => {
                if *created_issue {
                    format!("comment forwarded to newly created {issue_key}")
                } else {
                    format!("comment forwarded to {issue_key}")
                }
            }
            Self::PullRequest(PullRequestOutcome::Skipped(reason)) => {
                format!("pull request skipped: {}", reason.as_str())
            }
            Self::PullRequest(PullRequestOutcome::Commented { issue_key }) => {
                format!("pull request linked to {issue_key}")
            }
        }
    }
}

pub(crate) async fn run_event(cli: &Cli) -> Result<DispatchReport> {
    let config = build_bridge_config(cli)?;
    let payload = tokio::fs::read_to_string(&cli.event_path)
        .await
        .with_context(|| format!("failed to read event payload {}", cli.event_path.display()))?;
    let Some(event) = decode_github_event(&cli.event_name, &payload)? else {
        return Ok(DispatchReport::Unsupported {
            event_name: cli.event_name.clone(),
        });
    };

    let github = GithubApiClient::new(build_github_config(cli))
        .context("failed to create github api client")?;
    let jira =
        JiraApiClient::new(build_jira_config(cli)).context("failed to create jira api client")?;
    let dispatcher = Dispatcher::new(config, Arc::new(jira), Arc::new(github))
        .context("invalid bridge configuration")?;

    let report = match event {
        GithubBridgeEvent::Comment(event) => {
            info!(
                pr_number = event.pr_number,
                action = %event.action,
                "handling comment event"
            );
            DispatchReport::Comment(
                dispatcher
                    .handle_comment(&event)
                    .await
                    .context("failed to handle comment event")?,
            )
        }
        GithubBridgeEvent::PullRequest(event) => {
            info!(
                pr_number = event.pr_number,
                action = %event.action,
                "handling pull request event"
            );
            DispatchReport::PullRequest(
                dispatcher
                    .handle_pull_request(&event)
                    .await
                    .context("failed to handle pull request event")?,
            )
        }
    };
    Ok(report)
}
