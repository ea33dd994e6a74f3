use std::path::PathBuf;

use clap::Parser;
use lief_github::DEFAULT_GITHUB_API_BASE;

fn parse_positive_usize(value: &str) -> Result<usize, String> {
    let parsed = value
        .parse::<usize>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "lief",
    about = "Bridge GitHub pull request events to Jira issues",
    version
)]
/// Command-line and environment configuration of the bridge.
pub(crate) struct Cli {
    #[arg(
        long,
        env = "GITHUB_REPOSITORY",
        help = "GitHub repository in owner/repo format the events belong to"
    )]
    pub(crate) repo: String,

    #[arg(
        long = "magic-qa-keyword",
        env = "LIEF_MAGIC_QA_KEYWORD",
        default_value = "QA:",
        help = "Keyword marking a pull request comment for forwarding to Jira"
    )]
    pub(crate) magic_qa_keyword: String,

    #[arg(
        long = "max-description-chars",
        env = "LIEF_MAX_DESCRIPTION_CHARS",
        value_parser = parse_positive_usize,
        help = "Truncate Jira descriptions posted on pull requests to this many characters; without it the full description is posted in a collapsible block"
    )]
    pub(crate) max_description_chars: Option<usize>,

    #[arg(
        long = "component-map",
        env = "LIEF_COMPONENT_MAP",
        help = "JSON object mapping owner/repo to the Jira component of created issues"
    )]
    pub(crate) component_map: Option<String>,

    #[arg(
        long = "bot-login",
        env = "LIEF_BOT_LOGIN",
        help = "GitHub login of the bot account; its own comments are never forwarded"
    )]
    pub(crate) bot_login: String,

    #[arg(long = "jira-project-key", env = "JIRA_PROJECT_KEY")]
    pub(crate) jira_project_key: String,

    #[arg(
        long = "jira-issue-type",
        env = "JIRA_ISSUE_TYPE",
        default_value = "Story"
    )]
    pub(crate) jira_issue_type: String,

    #[arg(
        long = "jira-transition-id",
        env = "JIRA_TRANSITION_ID",
        help = "Transition applied to issues the bridge creates"
    )]
    pub(crate) jira_transition_id: Option<String>,

    #[arg(
        long = "jira-site",
        env = "JIRA_SITE",
        help = "Jira base URL, e.g. https://example.atlassian.net"
    )]
    pub(crate) jira_site: String,

    #[arg(
        long = "jira-user",
        env = "JIRA_USER",
        help = "Jira account email for basic auth; omit to send the token as a bearer token"
    )]
    pub(crate) jira_user: Option<String>,

    #[arg(long = "jira-token", env = "JIRA_TOKEN", hide_env_values = true)]
    pub(crate) jira_token: String,

    #[arg(
        long = "github-api-base",
        env = "GITHUB_API_URL",
        default_value = DEFAULT_GITHUB_API_BASE
    )]
    pub(crate) github_api_base: String,

    #[arg(long = "github-token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub(crate) github_token: String,

    #[arg(
        long = "request-timeout-ms",
        env = "LIEF_REQUEST_TIMEOUT_MS",
        default_value_t = 30_000,
        value_parser = parse_positive_u64
    )]
    pub(crate) request_timeout_ms: u64,

    #[arg(
        long = "event-name",
        env = "GITHUB_EVENT_NAME",
        help = "GitHub event name (issue_comment, pull_request)"
    )]
    pub(crate) event_name: String,

    #[arg(
        long = "event-path",
        env = "GITHUB_EVENT_PATH",
        help = "Path to the JSON webhook payload of the event"
    )]
    pub(crate) event_path: PathBuf,
}
