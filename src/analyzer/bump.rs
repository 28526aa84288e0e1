//! Bump aggregation: reduce a commit range to the most significant change.

use crate::boundary::BoundaryWarning;
use crate::domain::{CommitParser, LevelBump, ParseResult};
use crate::git::CommitInfo;
use std::collections::HashSet;

/// Parse every commit and reduce to the maximum bump level observed.
///
/// Parse errors are logged and contribute nothing; duplicate levels collapse
/// into the set before the reduction. An empty range aggregates to
/// `NoRelease`.
pub fn aggregate_bump<P: CommitParser + ?Sized>(commits: &[CommitInfo], parser: &P) -> LevelBump {
    let mut levels: HashSet<LevelBump> = HashSet::new();

    for commit in commits {
        // One commit may expand into several results (squash expansion).
        for result in parser.parse(commit) {
            match result {
                ParseResult::Parsed(parsed) => {
                    levels.insert(parsed.bump);
                }
                ParseResult::Error(err) => {
                    log::debug!(
                        "{}",
                        BoundaryWarning::UnparsableCommit {
                            commit_hash: err.commit_id.to_string(),
                            reason: err.message,
                        }
                    );
                }
            }
        }
    }

    levels.into_iter().max().unwrap_or(LevelBump::NoRelease)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ConventionalParser;
    use git2::Oid;

    fn commit(byte: u8, message: &str) -> CommitInfo {
        CommitInfo {
            id: Oid::from_bytes(&[byte; 20]).unwrap(),
            parents: Vec::new(),
            message: message.to_string(),
            author: "Test Author".to_string(),
        }
    }

    #[test]
    fn test_aggregate_maximum_wins() {
        let parser = ConventionalParser::default();
        let commits = vec![
            commit(1, "fix: bug"),
            commit(2, "feat: new thing"),
            commit(3, "fix: another bug"),
        ];

        assert_eq!(aggregate_bump(&commits, &parser), LevelBump::Minor);
    }

    #[test]
    fn test_aggregate_breaking_change() {
        let parser = ConventionalParser::default();
        let commits = vec![
            commit(1, "feat: new thing"),
            commit(2, "fix(core)!: rework internals"),
        ];

        assert_eq!(aggregate_bump(&commits, &parser), LevelBump::Major);
    }

    #[test]
    fn test_aggregate_parse_errors_are_skipped() {
        let parser = ConventionalParser::default();
        let commits = vec![
            commit(1, "Merge branch 'main'"),
            commit(2, "WIP stuff"),
            commit(3, "fix: real fix"),
        ];

        assert_eq!(aggregate_bump(&commits, &parser), LevelBump::Patch);
    }

    #[test]
    fn test_aggregate_empty_range() {
        let parser = ConventionalParser::default();
        assert_eq!(aggregate_bump(&[], &parser), LevelBump::NoRelease);
    }

    #[test]
    fn test_aggregate_only_unparseable_commits() {
        let parser = ConventionalParser::default();
        let commits = vec![commit(1, "random message"), commit(2, "another one")];

        assert_eq!(aggregate_bump(&commits, &parser), LevelBump::NoRelease);
    }

    #[test]
    fn test_aggregate_no_release_types() {
        let parser = ConventionalParser::default();
        let commits = vec![commit(1, "docs: update readme"), commit(2, "chore: deps")];

        assert_eq!(aggregate_bump(&commits, &parser), LevelBump::NoRelease);
    }
}
