use std::collections::BTreeMap;

use thiserror::Error;

/// Repository slug → Jira component used when auto-creating issues.
pub type ComponentMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Jira settings used when the bridge creates an issue.
pub struct JiraConfiguration {
    pub project_key: String,
    pub issue_type: String,
    pub transition_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable bridge configuration injected into the dispatcher.
pub struct BridgeConfig {
    pub repo: String,
    pub magic_qa_keyword: String,
    pub max_description_chars: Option<usize>,
    pub component_map: ComponentMap,
    pub bot_login: String,
    pub jira: JiraConfiguration,
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Enumerates bridge configuration validation failures.
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("invalid repository '{0}', expected owner/repo")]
    InvalidRepo(String),
    #[error("invalid magic QA keyword '{keyword}': {message}")]
    InvalidQaKeyword { keyword: String, message: String },
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("repo", &self.repo)?;
        require_non_empty("magic_qa_keyword", &self.magic_qa_keyword)?;
        require_non_empty("bot_login", &self.bot_login)?;
        require_non_empty("jira.project_key", &self.jira.project_key)?;
        require_non_empty("jira.issue_type", &self.jira.issue_type)?;
        match self.repo.trim().split_once('/') {
            Some((owner, name))
                if !owner.trim().is_empty() && !name.trim().is_empty() && !name.contains('/') => {}
            _ => return Err(ConfigError::InvalidRepo(self.repo.clone())),
        }
        Ok(())
    }

    /// Component for the configured repository; a miss means "no component".
    pub fn component(&self) -> Option<&str> {
        self.component_map.get(&self.repo).map(String::as_str)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{BridgeConfig, ComponentMap, ConfigError, JiraConfiguration};

    pub(crate) fn sample_config() -> BridgeConfig {
        BridgeConfig {
            repo: "foo/bar".to_string(),
            magic_qa_keyword: "QA:".to_string(),
            max_description_chars: Some(600),
            component_map: ComponentMap::from([("repo".to_string(), "component".to_string())]),
            bot_login: "bot-user".to_string(),
            jira: JiraConfiguration {
                project_key: "FOO".to_string(),
                issue_type: "Story".to_string(),
                transition_id: None,
            },
        }
    }

    #[test]
    fn unit_validate_accepts_sample_config() {
        assert_eq!(sample_config().validate(), Ok(()));
    }

    #[test]
    fn functional_validate_rejects_blank_fields() {
        let mut config = sample_config();
        config.bot_login = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Empty { field: "bot_login" })
        );

        let mut config = sample_config();
        config.jira.issue_type.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Empty {
                field: "jira.issue_type"
            })
        );
    }

    #[test]
    fn regression_validate_rejects_malformed_repo_slug() {
        for repo in ["foo", "/bar", "foo/", "foo/bar/baz"] {
            let mut config = sample_config();
            config.repo = repo.to_string();
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidRepo(repo.to_string()))
            );
        }
    }

    #[test]
    fn unit_component_lookup_miss_yields_none() {
        let mut config = sample_config();
        assert_eq!(config.component(), None);
        config
            .component_map
            .insert("foo/bar".to_string(), "Backend".to_string());
        assert_eq!(config.component(), Some("Backend"));
    }
}
