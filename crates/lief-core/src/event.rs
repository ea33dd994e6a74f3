/// Comment action that is forwarded; edits and deletions are ignored.
pub const COMMENT_ACTION_CREATED: &str = "created";
/// Pull request action that triggers the ticket summary comment.
pub const PULL_REQUEST_ACTION_OPENED: &str = "opened";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A comment posted on a pull request.
pub struct CommentEvent {
    pub action: String,
    pub title: String,
    pub comment: String,
    pub pr_number: u64,
    pub author: Option<String>,
    pub comment_id: Option<u64>,
}

impl CommentEvent {
    pub fn is_created(&self) -> bool {
        self.action == COMMENT_ACTION_CREATED
    }

    pub fn is_authored_by(&self, login: &str) -> bool {
        self.author.as_deref() == Some(login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A pull request lifecycle event.
pub struct PullRequestEvent {
    pub action: String,
    pub title: String,
    pub pr_number: u64,
}

impl PullRequestEvent {
    pub fn is_opened(&self) -> bool {
        self.action == PULL_REQUEST_ACTION_OPENED
    }
}
