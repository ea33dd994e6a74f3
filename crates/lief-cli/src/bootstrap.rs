use anyhow::{Context, Result};
use lief_core::{BridgeConfig, ComponentMap, JiraConfiguration};
use lief_github::GithubApiConfig;
use lief_jira::{JiraApiConfig, JiraAuth};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli_args::Cli;

pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Parse `--component-map`, a JSON object of `owner/repo` → component name.
pub(crate) fn parse_component_map(raw: Option<&str>) -> Result<ComponentMap> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(ComponentMap::new());
    };
    serde_json::from_str::<ComponentMap>(raw)
        .context("invalid --component-map, expected a JSON object of repo to component")
}

pub(crate) fn build_bridge_config(cli: &Cli) -> Result<BridgeConfig> {
    let config = BridgeConfig {
        repo: cli.repo.trim().to_string(),
        magic_qa_keyword: cli.magic_qa_keyword.clone(),
        max_description_chars: cli.max_description_chars,
        component_map: parse_component_map(cli.component_map.as_deref())?,
        bot_login: cli.bot_login.trim().to_string(),
        jira: JiraConfiguration {
            project_key: cli.jira_project_key.trim().to_string(),
            issue_type: cli.jira_issue_type.trim().to_string(),
            transition_id: cli
                .jira_transition_id
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned),
        },
    };
    config.validate().context("invalid bridge configuration")?;
    Ok(config)
}

pub(crate) fn build_github_config(cli: &Cli) -> GithubApiConfig {
    GithubApiConfig {
        api_base: cli.github_api_base.clone(),
        token: cli.github_token.clone(),
        request_timeout_ms: cli.request_timeout_ms,
    }
}

pub(crate) fn build_jira_config(cli: &Cli) -> JiraApiConfig {
    let token = cli.jira_token.clone();
    let auth = match cli
        .jira_user
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        Some(user) => JiraAuth::Basic {
            user: user.to_string(),
            token,
        },
        None => JiraAuth::Bearer { token },
    };
    JiraApiConfig {
        site: cli.jira_site.clone(),
        auth,
        request_timeout_ms: cli.request_timeout_ms,
    }
}
