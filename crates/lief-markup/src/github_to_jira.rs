use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::pattern::static_regex;

fn markdown_image_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    static_regex(&CELL, r"!\[[^\]]*\]\(\s*<?([^)\s>]+)>?(?:\s+[^)]*)?\)")
}

fn html_image_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    static_regex(&CELL, r#"(?i)<img\b[^>]*?\bsrc\s*=\s*["']([^"']+)["'][^>]*>"#)
}

fn markdown_heading_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    static_regex(&CELL, r"(?mR)^[ \t]{0,3}(#{1,6})[ \t]+(.*?)(?:[ \t]+#+)?[ \t]*$")
}

fn fenced_code_regex() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    static_regex(
        &CELL,
        concat!(
            r"(?msR)^[ \t]{0,3}```[^`\r\n]*$.*?(?:^[ \t]{0,3}```[ \t]*$|\z)",
            r"|^[ \t]{0,3}~~~[^\r\n]*$.*?(?:^[ \t]{0,3}~~~[ \t]*$|\z)",
        ),
    )
}

/// Rewrite markdown and inline-HTML images into Jira `!url!` embeds.
pub fn github_image_to_jira(text: &str) -> String {
    let rewritten = markdown_image_regex().replace_all(text, |caps: &Captures<'_>| {
        format!("!{}!", &caps[1])
    });
    html_image_regex()
        .replace_all(&rewritten, |caps: &Captures<'_>| format!("!{}!", &caps[1]))
        .into_owned()
}

fn rewrite_headings(text: &str) -> String {
    markdown_heading_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("h{}. {}", caps[1].len(), &caps[2])
        })
        .into_owned()
}

/// Rewrite ATX headings (`## Title`) into Jira headings (`h2. Title`).
///
/// Lines inside fenced code blocks are left alone; an unclosed fence runs to
/// the end of the text.
pub fn github_heading_to_jira(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for fence in fenced_code_regex().find_iter(text) {
        output.push_str(&rewrite_headings(&text[cursor..fence.start()]));
        output.push_str(fence.as_str());
        cursor = fence.end();
    }
    output.push_str(&rewrite_headings(&text[cursor..]));
    output
}

/// Full outbound conversion applied to comments forwarded to Jira.
/// Images are rewritten before headings.
pub fn github_to_jira(text: &str) -> String {
    github_heading_to_jira(&github_image_to_jira(text))
}
