use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid github repository '{0}', expected owner/repo")]
pub struct RepoRefError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
/// A GitHub repository identified by owner and name.
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> Result<Self, RepoRefError> {
        let trimmed = raw.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| RepoRefError(raw.to_string()))?;
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(RepoRefError(raw.to_string()));
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RepoRef, RepoRefError};

    #[test]
    fn unit_repo_ref_parses_and_trims_slug() {
        let repo = RepoRef::parse(" foo / bar ").expect("valid slug");
        assert_eq!(repo.owner, "foo");
        assert_eq!(repo.name, "bar");
    }

    #[test]
    fn regression_repo_ref_rejects_malformed_slugs() {
        for raw in ["foo", "foo/", "/bar", "foo/bar/baz", ""] {
            assert_eq!(RepoRef::parse(raw), Err(RepoRefError(raw.to_string())));
        }
    }
}
