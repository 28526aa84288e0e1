//! Conventional-commits (Angular style) message parser.
//!
//! Supported forms:
//! - `type(scope)!: description`
//! - `type(scope): description`
//! - `type!: description`
//! - `type: description`
//!
//! Anything else is a parse error, which the aggregation layer treats as
//! contributing no release.

use crate::domain::{CommitParser, LevelBump, ParseError, ParseResult, ParsedCommit};
use crate::git::CommitInfo;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for conventional commit analysis
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConventionalParserConfig {
    /// Types implying a minor bump
    #[serde(default = "default_minor_types")]
    pub minor_types: Vec<String>,

    /// Types implying a patch bump
    #[serde(default = "default_patch_types")]
    pub patch_types: Vec<String>,

    /// Types excluded from the changelog (still parsed for their bump)
    #[serde(default = "default_hidden_types")]
    pub hidden_types: Vec<String>,

    /// Body markers that escalate any commit to a major bump
    #[serde(default = "default_breaking_indicators")]
    pub breaking_indicators: Vec<String>,
}

fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string(), "feature".to_string()]
}

fn default_patch_types() -> Vec<String> {
    vec!["fix".to_string(), "perf".to_string()]
}

fn default_hidden_types() -> Vec<String> {
    vec![
        "chore".to_string(),
        "ci".to_string(),
        "style".to_string(),
        "test".to_string(),
    ]
}

fn default_breaking_indicators() -> Vec<String> {
    vec![
        "BREAKING CHANGE:".to_string(),
        "BREAKING-CHANGE:".to_string(),
    ]
}

impl Default for ConventionalParserConfig {
    fn default() -> Self {
        ConventionalParserConfig {
            minor_types: default_minor_types(),
            patch_types: default_patch_types(),
            hidden_types: default_hidden_types(),
            breaking_indicators: default_breaking_indicators(),
        }
    }
}

pub struct ConventionalParser {
    config: ConventionalParserConfig,
    subject_re: Regex,
    issue_re: Regex,
}

impl ConventionalParser {
    pub fn new(config: ConventionalParserConfig) -> Self {
        ConventionalParser {
            config,
            subject_re: Regex::new(r"^([a-z]+)(?:\(([^)]+)\))?(!?):\s+(.+)")
                .expect("conventional subject regex is valid"),
            issue_re: Regex::new(r"#(\d+)").expect("issue regex is valid"),
        }
    }

    fn bump_for(&self, commit_type: &str, breaking: bool) -> LevelBump {
        if breaking {
            LevelBump::Major
        } else if self.config.minor_types.iter().any(|t| t == commit_type) {
            LevelBump::Minor
        } else if self.config.patch_types.iter().any(|t| t == commit_type) {
            LevelBump::Patch
        } else {
            LevelBump::NoRelease
        }
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        ConventionalParser::new(ConventionalParserConfig::default())
    }
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &CommitInfo) -> Vec<ParseResult> {
        let message = commit.message.trim();
        let subject = message.lines().next().unwrap_or("");

        let captures = match self.subject_re.captures(subject) {
            Some(c) => c,
            None => {
                return vec![ParseResult::Error(ParseError {
                    commit_id: commit.id,
                    message: format!("not a conventional commit: '{}'", subject),
                })]
            }
        };

        let commit_type = captures[1].to_string();
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let bang = captures.get(3).map(|m| m.as_str()) == Some("!");
        let description = captures[4].to_string();

        let mut descriptions = vec![description];
        let mut breaking_descriptions = Vec::new();

        // Body paragraphs are split on blank lines; breaking-change notices
        // land in their own bucket.
        for paragraph in message.split("\n\n").skip(1) {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }
            match self
                .config
                .breaking_indicators
                .iter()
                .find_map(|marker| paragraph.strip_prefix(marker.as_str()))
            {
                Some(rest) => breaking_descriptions.push(rest.trim().to_string()),
                None => descriptions.push(paragraph.to_string()),
            }
        }

        let breaking = bang || !breaking_descriptions.is_empty();
        let linked_issues = self
            .issue_re
            .captures_iter(message)
            .map(|c| format!("#{}", &c[1]))
            .collect();

        vec![ParseResult::Parsed(ParsedCommit {
            bump: self.bump_for(&commit_type, breaking),
            include_in_changelog: !self.config.hidden_types.iter().any(|t| t == &commit_type),
            commit_type,
            scope,
            descriptions,
            breaking_descriptions,
            commit_id: commit.id,
            linked_issues,
        })]
    }
}
