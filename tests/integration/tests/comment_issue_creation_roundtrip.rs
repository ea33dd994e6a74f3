use std::sync::Arc;

use httpmock::prelude::*;
use lief_core::{
    BridgeConfig, CommentEvent, CommentOutcome, ComponentMap, Dispatcher, JiraConfiguration,
};
use lief_github::{GithubApiClient, GithubApiConfig};
use lief_jira::{JiraApiClient, JiraApiConfig, JiraAuth};
use serde_json::json;

fn dispatcher(github: &MockServer, jira: &MockServer, transition_id: Option<&str>) -> Dispatcher {
    let config = BridgeConfig {
        repo: "foo/bar".to_string(),
        magic_qa_keyword: "QA:".to_string(),
        max_description_chars: Some(600),
        component_map: ComponentMap::from([("foo/bar".to_string(), "Backend".to_string())]),
        bot_login: "bot-user".to_string(),
        jira: JiraConfiguration {
            project_key: "FOO".to_string(),
            issue_type: "Story".to_string(),
            transition_id: transition_id.map(ToOwned::to_owned),
        },
    };
    let github = GithubApiClient::new(GithubApiConfig {
        api_base: github.base_url(),
        token: "github-secret".to_string(),
        request_timeout_ms: 5_000,
    })
    .expect("github client");
    let jira = JiraApiClient::new(JiraApiConfig {
        site: jira.base_url(),
        auth: JiraAuth::Bearer {
            token: "jira-pat".to_string(),
        },
        request_timeout_ms: 5_000,
    })
    .expect("jira client");
    Dispatcher::new(config, Arc::new(jira), Arc::new(github)).expect("dispatcher")
}

#[tokio::test]
async fn integration_unknown_issue_is_created_transitioned_and_linked() {
    let github = MockServer::start();
    let jira = MockServer::start();

    let find = jira.mock(|when, then| {
        when.method(GET)
            .path("/rest/api/2/issue/LIEF-999")
            .header("authorization", "Bearer jira-pat");
        then.status(404);
    });
    let create = jira.mock(|when, then| {
        when.method(POST).path("/rest/api/2/issue").json_body(json!({
            "fields": {
                "project": { "key": "FOO" },
                "issuetype": { "name": "Story" },
                "summary": "[#LIEF-999] Cure World Hunger!",
                "components": [{ "name": "Backend" }]
            }
        }));
        then.status(201).json_body(json!({ "id": "10", "key": "FOO-42" }));
    });
    let transition = jira.mock(|when, then| {
        when.method(POST)
            .path("/rest/api/2/issue/FOO-42/transitions")
            .json_body(json!({ "transition": { "id": "31" } }));
        then.status(204);
    });
    let jira_comment = jira.mock(|when, then| {
        when.method(POST)
            .path("/rest/api/2/issue/FOO-42/comment")
            .json_body(json!({ "body": "h3. Verified\nlogin works" }));
        then.status(201).json_body(json!({ "id": "500" }));
    });
    let rename = github.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/repos/foo/bar/pulls/23")
            .json_body(json!({ "title": "[#FOO-42] [#LIEF-999] Cure World Hunger!" }));
        then.status(200).json_body(json!({ "number": 23 }));
    });
    let reaction = github.mock(|when, then| {
        when.method(POST)
            .path("/repos/foo/bar/issues/comments/777/reactions")
            .json_body(json!({ "content": "+1" }));
        then.status(201).json_body(json!({ "id": 1 }));
    });

    let outcome = dispatcher(&github, &jira, Some("31"))
        .handle_comment(&CommentEvent {
            action: "created".to_string(),
            title: "[#LIEF-999] Cure World Hunger!".to_string(),
            comment: "looks good\n@QA: ### Verified\nlogin works".to_string(),
            pr_number: 23,
            author: Some("jonhue".to_string()),
            comment_id: Some(777),
        })
        .await
        .expect("comment handled");

    assert_eq!(
        outcome,
        CommentOutcome::Forwarded {
            issue_key: "FOO-42".to_string(),
            created_issue: true,
        }
    );
    find.assert();
    create.assert();
    transition.assert();
    rename.assert();
    jira_comment.assert();
    reaction.assert();
}

#[tokio::test]
async fn integration_rename_failure_stops_before_forwarding() {
    let github = MockServer::start();
    let jira = MockServer::start();

    jira.mock(|when, then| {
        when.method(POST).path("/rest/api/2/issue");
        then.status(201).json_body(json!({ "key": "FOO-43" }));
    });
    let jira_comment = jira.mock(|when, then| {
        when.method(POST).path("/rest/api/2/issue/FOO-43/comment");
        then.status(201).json_body(json!({ "id": "1" }));
    });
    github.mock(|when, then| {
        when.method(httpmock::Method::PATCH).path("/repos/foo/bar/pulls/24");
        then.status(403).body("Resource not accessible by integration");
    });

    let error = dispatcher(&github, &jira, None)
        .handle_comment(&CommentEvent {
            action: "created".to_string(),
            title: "Untracked change".to_string(),
            comment: "QA: please verify".to_string(),
            pr_number: 24,
            author: Some("jonhue".to_string()),
            comment_id: Some(778),
        })
        .await
        .expect_err("rename failure propagates");

    assert!(error.to_string().contains("status 403"));
    jira_comment.assert_calls(0);
}
