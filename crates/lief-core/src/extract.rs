use std::sync::OnceLock;

use regex::Regex;

use crate::config::ConfigError;

fn issue_tag_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| match Regex::new(r"\A\[#([A-Z]+-\d+)\]") {
        Ok(regex) => regex,
        Err(_) => unreachable!("static regex pattern"),
    })
}

/// Extract the Jira key from a title that starts with a `[#KEY-123]` tag.
pub fn extract_issue_id(title: &str) -> Option<String> {
    issue_tag_regex()
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|key| key.as_str().trim().to_string())
}

/// Pull request title after linking it to a freshly created issue.
pub fn prefixed_title(issue_key: &str, title: &str) -> String {
    format!("[#{issue_key}] {title}")
}

#[derive(Debug, Clone)]
/// Detects the magic QA keyword in a comment and extracts the text to forward.
///
/// The keyword may be prefixed with `@` or `#` and followed by `:`. It only
/// counts when a word character follows on the same line. The forwarded text
/// runs from the end of the keyword to the end of the comment.
pub struct QaKeywordMatcher {
    pattern: Regex,
}

impl QaKeywordMatcher {
    pub fn new(keyword: &str) -> Result<Self, ConfigError> {
        let pattern = format!(r"(?P<marker>[@#]?{}:?)[^\n]*\w", regex::escape(keyword));
        let pattern = Regex::new(&pattern).map_err(|error| ConfigError::InvalidQaKeyword {
            keyword: keyword.to_string(),
            message: error.to_string(),
        })?;
        Ok(Self { pattern })
    }

    pub fn extract<'a>(&self, comment: &'a str) -> Option<&'a str> {
        let marker = self.pattern.captures(comment)?.name("marker")?;
        let payload = comment[marker.end()..].trim();
        if payload.is_empty() {
            return None;
        }
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_issue_id, prefixed_title, QaKeywordMatcher};

    fn matcher() -> QaKeywordMatcher {
        QaKeywordMatcher::new("QA:").expect("keyword compiles")
    }

    #[test]
    fn unit_extract_issue_id_reads_leading_tag() {
        assert_eq!(
            extract_issue_id("[#LIEF-123] Cure World Hunger!"),
            Some("LIEF-123".to_string())
        );
    }

    #[test]
    fn functional_extract_issue_id_rejects_titles_without_leading_tag() {
        assert_eq!(extract_issue_id("Title without issue id"), None);
        assert_eq!(extract_issue_id(" [#LIEF-123] leading space"), None);
        assert_eq!(extract_issue_id("Fix [#LIEF-123] in the middle"), None);
        assert_eq!(extract_issue_id("[#lief-123] lowercase"), None);
        assert_eq!(extract_issue_id("[LIEF-123] missing hash"), None);
        assert_eq!(extract_issue_id("[#LIEF-] missing number"), None);
    }

    #[test]
    fn unit_prefixed_title_joins_key_and_title_with_single_space() {
        assert_eq!(
            prefixed_title("FOO-7", "Cure World Hunger!"),
            "[#FOO-7] Cure World Hunger!"
        );
    }

    #[test]
    fn unit_qa_matcher_extracts_text_after_keyword() {
        assert_eq!(matcher().extract("QA: foo"), Some("foo"));
        assert_eq!(matcher().extract("bar baz QA: foo"), Some("foo"));
    }

    #[test]
    fn functional_qa_matcher_keeps_all_following_lines() {
        assert_eq!(
            matcher().extract("foo\nbar\nbaz QA: this\nis\na\nmultiline\ncomment"),
            Some("this\nis\na\nmultiline\ncomment")
        );
    }

    #[test]
    fn functional_qa_matcher_accepts_mention_and_hash_prefixes() {
        let matcher = QaKeywordMatcher::new("QA").expect("keyword compiles");
        assert_eq!(matcher.extract("@QA: please check"), Some("please check"));
        assert_eq!(matcher.extract("#QA retest login"), Some("retest login"));
    }

    #[test]
    fn regression_qa_matcher_ignores_keyword_without_words() {
        assert_eq!(matcher().extract("QA:"), None);
        assert_eq!(matcher().extract("QA:   !!!"), None);
        assert_eq!(matcher().extract("QA:\nfoo"), None);
        assert_eq!(matcher().extract("Nice weather isn't it?"), None);
    }

    #[test]
    fn regression_qa_matcher_escapes_keyword_metacharacters() {
        let matcher = QaKeywordMatcher::new("QA+").expect("keyword compiles");
        assert_eq!(matcher.extract("QA+ works"), Some("works"));
        assert_eq!(matcher.extract("QAA works"), None);
    }
}
