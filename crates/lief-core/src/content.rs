/// Summary label of the collapsible block wrapping a full ticket description.
pub const DESCRIPTION_SUMMARY: &str = "Ticket description";

const OMISSION: &str = "...";

/// Truncate `text` to at most `max_chars` characters.
///
/// Truncated text ends with `...` within the limit. Limits too small to hold
/// the omission are cut without it.
pub fn truncate_with_omission(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let omission_len = OMISSION.chars().count();
    if max_chars <= omission_len {
        return text.chars().take(max_chars).collect();
    }
    let mut truncated: String = text.chars().take(max_chars - omission_len).collect();
    truncated.push_str(OMISSION);
    truncated
}

/// Body of the GitHub comment linking a pull request to its Jira issue.
pub fn pull_request_comment_content(
    issue_url: &str,
    description: Option<&str>,
    max_description_chars: Option<usize>,
) -> String {
    let Some(description) = description else {
        return issue_url.to_string();
    };
    match max_description_chars {
        Some(max_chars) => format!(
            "{}\n\n{issue_url}",
            truncate_with_omission(description, max_chars)
        ),
        None => format!(
            "<details><summary>{DESCRIPTION_SUMMARY}</summary>{description}</details>\n\n{issue_url}"
        ),
    }
}
