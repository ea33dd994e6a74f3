use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::pattern::static_regex;

fn jira_heading_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    static_regex(&CELL, r"(?mR)^[ \t]*h([1-6])\.[ \t]+(.*)$")
}

/// Rewrite Jira headings (`h2. Title`) into ATX headings (`## Title`).
pub fn jira_heading_to_github(text: &str) -> String {
    jira_heading_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let level = caps[1].parse::<usize>().unwrap_or(1);
            format!("{} {}", "#".repeat(level), &caps[2])
        })
        .into_owned()
}

/// Inbound conversion applied to Jira descriptions posted on GitHub.
pub fn jira_to_github(text: Option<&str>) -> Option<String> {
    text.map(jira_heading_to_github)
}
