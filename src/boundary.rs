use std::fmt;

/// Non-fatal conditions reported while resolving versions from repository
/// history. These never abort the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No qualifying commits since the latest release
    NoNewCommits {
        latest_version: String,
        current_commit_hash: String,
    },
    /// Tag matched no configured pattern or was not a valid semantic version
    UnparsableTag { tag: String },
    /// A commit message the configured parser could not understand
    UnparsableCommit { commit_hash: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_version,
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No release-worthy commits since version '{}' (current: {})",
                    latest_version, short_hash
                )
            }
            BoundaryWarning::UnparsableTag { tag } => {
                write!(f, "Tag '{}' is not a version tag, skipping", tag)
            }
            BoundaryWarning::UnparsableCommit {
                commit_hash,
                reason,
            } => {
                let short_hash = if commit_hash.len() > 7 {
                    &commit_hash[..7]
                } else {
                    commit_hash.as_str()
                };
                write!(f, "Cannot parse commit {}: {}", short_hash, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_new_commits_display_shortens_hash() {
        let warning = BoundaryWarning::NoNewCommits {
            latest_version: "1.0.0".to_string(),
            current_commit_hash: "abc1234def5678".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("1.0.0"));
        assert!(msg.contains("abc1234"));
        assert!(!msg.contains("abc1234d"));
    }

    #[test]
    fn test_unparsable_tag_display() {
        let warning = BoundaryWarning::UnparsableTag {
            tag: "nightly".to_string(),
        };
        assert!(warning.to_string().contains("nightly"));
    }

    #[test]
    fn test_unparsable_commit_display() {
        let warning = BoundaryWarning::UnparsableCommit {
            commit_hash: "short".to_string(),
            reason: "not conventional".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("short"));
        assert!(msg.contains("not conventional"));
    }
}
