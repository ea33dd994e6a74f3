//! Event dispatch between GitHub pull requests and Jira issues.

use std::sync::Arc;

use lief_markup::{github_to_jira, jira_to_github};
use tracing::{debug, info, warn};

use crate::client::{
    ClientError, SourceControlClient, TrackerClient, TrackerIssue, REACTION_PLUS_ONE,
};
use crate::config::{BridgeConfig, ConfigError};
use crate::content::pull_request_comment_content;
use crate::event::{CommentEvent, PullRequestEvent};
use crate::extract::{extract_issue_id, prefixed_title, QaKeywordMatcher};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a comment event produced no side effects.
pub enum CommentSkipReason {
    NoQaSignal,
    NotCreated,
    BotAuthored,
}

impl CommentSkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoQaSignal => "comment_no_qa_signal",
            Self::NotCreated => "comment_not_created",
            Self::BotAuthored => "comment_bot_authored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of [`Dispatcher::handle_comment`].
pub enum CommentOutcome {
    Ignored(CommentSkipReason),
    Forwarded {
        issue_key: String,
        created_issue: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a pull request event produced no side effects.
pub enum PullRequestSkipReason {
    NoIssueReference,
    IssueNotFound,
    MissingIssueUrl,
    NotOpened,
}

impl PullRequestSkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoIssueReference => "pull_request_no_issue_reference",
            Self::IssueNotFound => "pull_request_issue_not_found",
            Self::MissingIssueUrl => "pull_request_missing_issue_url",
            Self::NotOpened => "pull_request_not_opened",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of [`Dispatcher::handle_pull_request`].
pub enum PullRequestOutcome {
    Skipped(PullRequestSkipReason),
    Commented { issue_key: String },
}

/// Routes pull request events to Jira and GitHub.
///
/// Holds only immutable configuration and client handles, so one instance can
/// serve concurrent events. Every per-event value lives in the handler call.
pub struct Dispatcher {
    config: BridgeConfig,
    qa_matcher: QaKeywordMatcher,
    tracker: Arc<dyn TrackerClient>,
    source_control: Arc<dyn SourceControlClient>,
}

impl Dispatcher {
    pub fn new(
        config: BridgeConfig,
        tracker: Arc<dyn TrackerClient>,
        source_control: Arc<dyn SourceControlClient>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let qa_matcher = QaKeywordMatcher::new(&config.magic_qa_keyword)?;
        Ok(Self {
            config,
            qa_matcher,
            tracker,
            source_control,
        })
    }

    /// Forward a QA comment to the linked Jira issue, creating the issue and
    /// renaming the pull request when no linked issue exists yet.
    pub async fn handle_comment(
        &self,
        event: &CommentEvent,
    ) -> Result<CommentOutcome, ClientError> {
        let Some(qa_comment) = self.qa_matcher.extract(&event.comment) else {
            return Ok(self.ignore_comment(event, CommentSkipReason::NoQaSignal));
        };
        if !event.is_created() {
            return Ok(self.ignore_comment(event, CommentSkipReason::NotCreated));
        }
        if event.is_authored_by(&self.config.bot_login) {
            return Ok(self.ignore_comment(event, CommentSkipReason::BotAuthored));
        }

        let (issue, created_issue) = self.find_or_create_issue(event).await?;
        let jira_comment = github_to_jira(qa_comment);
        self.tracker.create_comment(&issue.key, &jira_comment).await?;
        info!(
            pr_number = event.pr_number,
            issue_key = %issue.key,
            created_issue,
            "forwarded QA comment to jira"
        );

        match event.comment_id {
            Some(comment_id) => {
                self.source_control
                    .create_reaction(&self.config.repo, comment_id, REACTION_PLUS_ONE)
                    .await?;
            }
            None => warn!(
                pr_number = event.pr_number,
                "comment event has no comment id; skipping reaction"
            ),
        }

        Ok(CommentOutcome::Forwarded {
            issue_key: issue.key,
            created_issue,
        })
    }

    /// Post the linked Jira issue's description and URL on a newly opened pull request.
    pub async fn handle_pull_request(
        &self,
        event: &PullRequestEvent,
    ) -> Result<PullRequestOutcome, ClientError> {
        let Some(issue_key) = extract_issue_id(&event.title) else {
            return Ok(self.skip_pull_request(event, PullRequestSkipReason::NoIssueReference));
        };
        let Some(issue) = self.tracker.find_issue(&issue_key).await? else {
            return Ok(self.skip_pull_request(event, PullRequestSkipReason::IssueNotFound));
        };
        let Some(issue_url) = issue.url.as_deref().filter(|url| !url.trim().is_empty()) else {
            return Ok(self.skip_pull_request(event, PullRequestSkipReason::MissingIssueUrl));
        };
        if !event.is_opened() {
            return Ok(self.skip_pull_request(event, PullRequestSkipReason::NotOpened));
        }

        let description = jira_to_github(issue.description.as_deref());
        let body = pull_request_comment_content(
            issue_url,
            description.as_deref(),
            self.config.max_description_chars,
        );
        self.source_control
            .create_comment(&self.config.repo, event.pr_number, &body)
            .await?;
        info!(
            pr_number = event.pr_number,
            issue_key = %issue.key,
            "posted jira issue summary on pull request"
        );
        Ok(PullRequestOutcome::Commented {
            issue_key: issue.key,
        })
    }

    async fn find_or_create_issue(
        &self,
        event: &CommentEvent,
    ) -> Result<(TrackerIssue, bool), ClientError> {
        if let Some(issue_key) = extract_issue_id(&event.title) {
            if let Some(issue) = self.tracker.find_issue(&issue_key).await? {
                return Ok((issue, false));
            }
            debug!(issue_key = %issue_key, "linked jira issue not found; creating a new one");
        }
        let issue = self.create_issue_and_rename_pull_request(event).await?;
        Ok((issue, true))
    }

    async fn create_issue_and_rename_pull_request(
        &self,
        event: &CommentEvent,
    ) -> Result<TrackerIssue, ClientError> {
        let jira = &self.config.jira;
        let issue = self
            .tracker
            .create_issue(
                &jira.project_key,
                &jira.issue_type,
                self.config.component(),
                &event.title,
            )
            .await?;
        info!(issue_key = %issue.key, pr_number = event.pr_number, "created jira issue");

        if let Some(transition_id) = jira.transition_id.as_deref() {
            self.tracker.transition_issue(&issue, transition_id).await?;
        }

        let title = prefixed_title(&issue.key, &event.title);
        self.source_control
            .update_pull_request_title(&self.config.repo, event.pr_number, &title)
            .await?;
        Ok(issue)
    }

    fn ignore_comment(&self, event: &CommentEvent, reason: CommentSkipReason) -> CommentOutcome {
        debug!(
            pr_number = event.pr_number,
            action = %event.action,
            reason = reason.as_str(),
            "ignoring comment event"
        );
        CommentOutcome::Ignored(reason)
    }

    fn skip_pull_request(
        &self,
        event: &PullRequestEvent,
        reason: PullRequestSkipReason,
    ) -> PullRequestOutcome {
        debug!(
            pr_number = event.pr_number,
            action = %event.action,
            reason = reason.as_str(),
            "skipping pull request event"
        );
        PullRequestOutcome::Skipped(reason)
    }
}
