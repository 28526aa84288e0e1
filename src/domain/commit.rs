//! Parsed-commit types and the commit parser contract.
//!
//! Parsers turn raw commit messages into release metadata. Results are a
//! tagged sum so the bump aggregator can pattern-match exhaustively instead
//! of inspecting types at runtime.

use crate::domain::version::LevelBump;
use crate::git::CommitInfo;
use git2::Oid;

/// Successfully parsed commit with release metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// Magnitude of change this commit implies
    pub bump: LevelBump,
    /// Commit type (e.g. "feat", "fix", "chore")
    pub commit_type: String,
    pub scope: Option<String>,
    /// Subject line plus body paragraphs
    pub descriptions: Vec<String>,
    /// Text of any breaking-change notices
    pub breaking_descriptions: Vec<String>,
    /// Identity of the source commit
    pub commit_id: Oid,
    /// Issue references pulled from the message (e.g. "#42")
    pub linked_issues: Vec<String>,
    pub include_in_changelog: bool,
}

/// Commit that could not be parsed; contributes nothing to the bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub commit_id: Oid,
    pub message: String,
}

/// Outcome of parsing one commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Parsed(ParsedCommit),
    Error(ParseError),
}

impl ParseResult {
    /// Bump level contributed to aggregation, if any
    pub fn bump(&self) -> Option<LevelBump> {
        match self {
            ParseResult::Parsed(parsed) => Some(parsed.bump),
            ParseResult::Error(_) => None,
        }
    }
}

/// Pluggable commit message parser.
///
/// One commit may expand into several results (squash commits carrying
/// multiple entries), hence the Vec return; most parsers yield exactly one.
pub trait CommitParser {
    fn parse(&self, commit: &CommitInfo) -> Vec<ParseResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    #[test]
    fn test_parse_result_bump() {
        let parsed = ParseResult::Parsed(ParsedCommit {
            bump: LevelBump::Minor,
            commit_type: "feat".to_string(),
            scope: None,
            descriptions: vec!["add thing".to_string()],
            breaking_descriptions: vec![],
            commit_id: oid(1),
            linked_issues: vec![],
            include_in_changelog: true,
        });
        assert_eq!(parsed.bump(), Some(LevelBump::Minor));

        let err = ParseResult::Error(ParseError {
            commit_id: oid(2),
            message: "not conventional".to_string(),
        });
        assert_eq!(err.bump(), None);
    }
}
