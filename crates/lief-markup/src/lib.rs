//! Markup conversion between GitHub-flavoured markdown and Jira wiki markup.
//! Only the constructs the bridge forwards are rewritten: headings and images.

mod github_to_jira;
mod jira_to_github;
mod pattern;

pub use github_to_jira::{github_heading_to_jira, github_image_to_jira, github_to_jira};
pub use jira_to_github::{jira_heading_to_github, jira_to_github};
