//! Event dispatch for the lief GitHub ⇄ Jira bridge.
//!
//! The [`Dispatcher`] turns pull-request and pull-request-comment events into
//! Jira and GitHub side effects through the [`TrackerClient`] and
//! [`SourceControlClient`] traits. Transport lives in `lief-github` and
//! `lief-jira`.

mod client;
mod config;
mod content;
mod dispatcher;
mod event;
mod extract;

pub use client::{
    BoxError, ClientError, SourceControlClient, TrackerClient, TrackerIssue, REACTION_PLUS_ONE,
};
pub use config::{BridgeConfig, ComponentMap, ConfigError, JiraConfiguration};
pub use content::{pull_request_comment_content, truncate_with_omission, DESCRIPTION_SUMMARY};
pub use dispatcher::{
    CommentOutcome, CommentSkipReason, Dispatcher, PullRequestOutcome, PullRequestSkipReason,
};
pub use event::{
    CommentEvent, PullRequestEvent, COMMENT_ACTION_CREATED, PULL_REQUEST_ACTION_OPENED,
};
pub use extract::{extract_issue_id, prefixed_title, QaKeywordMatcher};
