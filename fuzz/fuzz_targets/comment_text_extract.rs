#![no_main]

use libfuzzer_sys::fuzz_target;
use lief_core::{
    extract_issue_id, pull_request_comment_content, truncate_with_omission, QaKeywordMatcher,
};
use lief_markup::{github_to_jira, jira_heading_to_github};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    if let Some(key) = extract_issue_id(&raw) {
        assert!(raw.starts_with(&format!("[#{key}]")));
        let (prefix, number) = key.split_once('-').expect("key has a hyphen");
        assert!(!prefix.is_empty() && prefix.chars().all(|ch| ch.is_ascii_uppercase()));
        assert!(!number.is_empty() && number.chars().all(|ch| ch.is_ascii_digit()));
    }

    let matcher = QaKeywordMatcher::new("QA:").expect("keyword compiles");
    if let Some(payload) = matcher.extract(&raw) {
        assert!(!payload.is_empty());
        assert!(raw.trim_end().ends_with(payload));
        let _ = github_to_jira(payload);
    }

    let _ = jira_heading_to_github(&raw);
    let truncated = truncate_with_omission(&raw, 64);
    assert!(truncated.chars().count() <= 64);
    let url = "https://example.atlassian.net/browse/A-1";
    let body = pull_request_comment_content(url, Some(&raw), Some(64));
    assert!(body.ends_with(&format!("\n\n{url}")));
});
