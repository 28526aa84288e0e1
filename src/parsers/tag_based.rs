//! Legacy tag-token parser.
//!
//! Classifies commits by a single change token in the message (the style
//! predating conventional commits), with a text marker for breaking changes.
//! Messages carrying no known token are parse errors.

use crate::domain::{CommitParser, LevelBump, ParseError, ParseResult, ParsedCommit};
use crate::git::CommitInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TagParserConfig {
    #[serde(default = "default_minor_tag")]
    pub minor_tag: String,

    #[serde(default = "default_patch_tag")]
    pub patch_tag: String,

    #[serde(default = "default_breaking_marker")]
    pub breaking_marker: String,
}

fn default_minor_tag() -> String {
    ":sparkles:".to_string()
}

fn default_patch_tag() -> String {
    ":nut_and_bolt:".to_string()
}

fn default_breaking_marker() -> String {
    "BREAKING CHANGE:".to_string()
}

impl Default for TagParserConfig {
    fn default() -> Self {
        TagParserConfig {
            minor_tag: default_minor_tag(),
            patch_tag: default_patch_tag(),
            breaking_marker: default_breaking_marker(),
        }
    }
}

#[derive(Default)]
pub struct TagParser {
    config: TagParserConfig,
}

impl TagParser {
    pub fn new(config: TagParserConfig) -> Self {
        TagParser { config }
    }
}

impl CommitParser for TagParser {
    fn parse(&self, commit: &CommitInfo) -> Vec<ParseResult> {
        let message = commit.message.trim();
        let subject = message.lines().next().unwrap_or("");

        let (commit_type, level) = if message.contains(&self.config.minor_tag) {
            ("feature", LevelBump::Minor)
        } else if message.contains(&self.config.patch_tag) {
            ("fix", LevelBump::Patch)
        } else {
            return vec![ParseResult::Error(ParseError {
                commit_id: commit.id,
                message: format!(
                    "no change token ({} or {}) in '{}'",
                    self.config.minor_tag, self.config.patch_tag, subject
                ),
            })];
        };

        let breaking = message.contains(&self.config.breaking_marker);
        let bump = if breaking { LevelBump::Major } else { level };

        let breaking_descriptions = message
            .lines()
            .filter_map(|line| line.trim().strip_prefix(self.config.breaking_marker.as_str()))
            .map(|rest| rest.trim().to_string())
            .collect();

        vec![ParseResult::Parsed(ParsedCommit {
            bump,
            commit_type: commit_type.to_string(),
            scope: None,
            descriptions: vec![subject.to_string()],
            breaking_descriptions,
            commit_id: commit.id,
            linked_issues: Vec::new(),
            include_in_changelog: true,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Oid;

    fn parse(message: &str) -> ParseResult {
        let parser = TagParser::default();
        let commit = CommitInfo {
            id: Oid::from_bytes(&[5; 20]).unwrap(),
            parents: Vec::new(),
            message: message.to_string(),
            author: "Test Author".to_string(),
        };
        parser.parse(&commit).remove(0)
    }

    fn parsed(message: &str) -> ParsedCommit {
        match parse(message) {
            ParseResult::Parsed(p) => p,
            ParseResult::Error(e) => panic!("expected parse, got error: {}", e.message),
        }
    }

    #[test]
    fn test_minor_tag() {
        let p = parsed("add dark mode :sparkles:");
        assert_eq!(p.bump, LevelBump::Minor);
        assert_eq!(p.commit_type, "feature");
    }

    #[test]
    fn test_patch_tag() {
        assert_eq!(parsed("tighten bolts :nut_and_bolt:").bump, LevelBump::Patch);
    }

    #[test]
    fn test_breaking_marker_escalates() {
        let p = parsed("redo api :sparkles:\n\nBREAKING CHANGE: new response shape");
        assert_eq!(p.bump, LevelBump::Major);
        assert_eq!(p.breaking_descriptions, vec!["new response shape"]);
    }

    #[test]
    fn test_untagged_message_is_error() {
        assert!(matches!(parse("just some text"), ParseResult::Error(_)));
    }
}
