//! Decoding of GitHub `issue_comment` and `pull_request` webhook payloads.

use lief_core::{CommentEvent, PullRequestEvent};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
/// Enumerates webhook payload decoding failures.
pub enum EventPayloadError {
    #[error("failed to decode github {event_name} payload: {source}")]
    Json {
        event_name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A webhook event the dispatcher handles.
pub enum GithubBridgeEvent {
    Comment(CommentEvent),
    PullRequest(PullRequestEvent),
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct PayloadIssue {
    number: u64,
    title: String,
    #[serde(default)]
    pull_request: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct PayloadComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    user: Option<GithubUser>,
}

#[derive(Debug, Deserialize)]
struct IssueCommentPayload {
    action: String,
    issue: PayloadIssue,
    comment: PayloadComment,
}

#[derive(Debug, Deserialize)]
struct PayloadPullRequest {
    number: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    action: String,
    pull_request: PayloadPullRequest,
}

/// Decode a webhook payload by its `X-GitHub-Event` name.
///
/// Returns `Ok(None)` for events the bridge does not handle, including
/// comments on plain issues.
pub fn decode_github_event(
    event_name: &str,
    payload: &str,
) -> Result<Option<GithubBridgeEvent>, EventPayloadError> {
    let decode_error = |source: serde_json::Error| EventPayloadError::Json {
        event_name: event_name.to_string(),
        source,
    };
    match event_name.trim() {
        "issue_comment" => {
            let payload: IssueCommentPayload =
                serde_json::from_str(payload).map_err(decode_error)?;
            if payload.issue.pull_request.is_none() {
                debug!(
                    issue_number = payload.issue.number,
                    "ignoring comment on a plain issue"
                );
                return Ok(None);
            }
            Ok(Some(GithubBridgeEvent::Comment(CommentEvent {
                action: payload.action,
                title: payload.issue.title,
                comment: payload.comment.body.unwrap_or_default(),
                pr_number: payload.issue.number,
                author: payload.comment.user.map(|user| user.login),
                comment_id: Some(payload.comment.id),
            })))
        }
        "pull_request" | "pull_request_target" => {
            let payload: PullRequestPayload =
                serde_json::from_str(payload).map_err(decode_error)?;
            Ok(Some(GithubBridgeEvent::PullRequest(PullRequestEvent {
                action: payload.action,
                title: payload.pull_request.title,
                pr_number: payload.pull_request.number,
            })))
        }
        other => {
            debug!(event_name = other, "ignoring unsupported github event");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{decode_github_event, EventPayloadError, GithubBridgeEvent};
    use lief_core::{CommentEvent, PullRequestEvent};

    #[test]
    fn functional_decode_issue_comment_on_pull_request() {
        let payload = json!({
            "action": "created",
            "issue": {
                "number": 23,
                "title": "[#LIEF-123] Cure World Hunger!",
                "pull_request": { "url": "https://api.github.com/repos/foo/bar/pulls/23" }
            },
            "comment": {
                "id": 12345,
                "body": "QA: foo",
                "user": { "login": "jonhue" }
            },
            "repository": { "full_name": "foo/bar" }
        });
        let event = decode_github_event("issue_comment", &payload.to_string())
            .expect("decoded")
            .expect("supported event");
        assert_eq!(
            event,
            GithubBridgeEvent::Comment(CommentEvent {
                action: "created".to_string(),
                title: "[#LIEF-123] Cure World Hunger!".to_string(),
                comment: "QA: foo".to_string(),
                pr_number: 23,
                author: Some("jonhue".to_string()),
                comment_id: Some(12345),
            })
        );
    }

    #[test]
    fn regression_decode_issue_comment_on_plain_issue_is_ignored() {
        let payload = json!({
            "action": "created",
            "issue": { "number": 5, "title": "Bug" },
            "comment": { "id": 1, "body": "QA: foo", "user": { "login": "jonhue" } }
        });
        assert!(decode_github_event("issue_comment", &payload.to_string())
            .expect("decoded")
            .is_none());
    }

    #[test]
    fn functional_decode_pull_request_event() {
        let payload = json!({
            "action": "opened",
            "number": 23,
            "pull_request": { "number": 23, "title": "[#LIEF-123] Cure World Hunger!" }
        });
        assert_eq!(
            decode_github_event("pull_request", &payload.to_string())
                .expect("decoded")
                .expect("supported event"),
            GithubBridgeEvent::PullRequest(PullRequestEvent {
                action: "opened".to_string(),
                title: "[#LIEF-123] Cure World Hunger!".to_string(),
                pr_number: 23,
            })
        );
    }

    #[test]
    fn unit_decode_unknown_event_is_ignored() {
        assert!(decode_github_event("push", "{}").expect("decoded").is_none());
    }

    #[test]
    fn regression_decode_malformed_payload_reports_event_name() {
        let error = decode_github_event("pull_request", "{\"action\":\"opened\"}")
            .expect_err("missing pull_request");
        let EventPayloadError::Json { event_name, .. } = &error;
        assert_eq!(event_name, "pull_request");
        assert!(error.to_string().contains("pull_request payload"));
    }
}
