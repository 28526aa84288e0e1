//! Gitmoji message parser.
//!
//! The bump level is decided by the highest-priority emoji found in the
//! subject line. Messages without a known emoji still parse (type "other",
//! no release), so this parser never produces errors.

use crate::domain::{CommitParser, LevelBump, ParseResult, ParsedCommit};
use crate::git::CommitInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmojiParserConfig {
    #[serde(default = "default_major_emojis")]
    pub major_emojis: Vec<String>,

    #[serde(default = "default_minor_emojis")]
    pub minor_emojis: Vec<String>,

    #[serde(default = "default_patch_emojis")]
    pub patch_emojis: Vec<String>,
}

fn default_major_emojis() -> Vec<String> {
    vec![":boom:".to_string()]
}

fn default_minor_emojis() -> Vec<String> {
    vec![":sparkles:".to_string()]
}

fn default_patch_emojis() -> Vec<String> {
    vec![
        ":ambulance:".to_string(),
        ":bug:".to_string(),
        ":lock:".to_string(),
        ":zap:".to_string(),
    ]
}

impl Default for EmojiParserConfig {
    fn default() -> Self {
        EmojiParserConfig {
            major_emojis: default_major_emojis(),
            minor_emojis: default_minor_emojis(),
            patch_emojis: default_patch_emojis(),
        }
    }
}

#[derive(Default)]
pub struct EmojiParser {
    config: EmojiParserConfig,
}

impl EmojiParser {
    pub fn new(config: EmojiParserConfig) -> Self {
        EmojiParser { config }
    }

    /// Highest-priority emoji present in the subject, with its bump level
    fn classify(&self, subject: &str) -> Option<(String, LevelBump)> {
        let tiers = [
            (&self.config.major_emojis, LevelBump::Major),
            (&self.config.minor_emojis, LevelBump::Minor),
            (&self.config.patch_emojis, LevelBump::Patch),
        ];
        for (emojis, bump) in tiers {
            if let Some(emoji) = emojis.iter().find(|e| subject.contains(e.as_str())) {
                return Some((emoji.clone(), bump));
            }
        }
        None
    }
}

impl CommitParser for EmojiParser {
    fn parse(&self, commit: &CommitInfo) -> Vec<ParseResult> {
        let message = commit.message.trim();
        let subject = message.lines().next().unwrap_or("").to_string();

        let (commit_type, bump) = self
            .classify(&subject)
            .unwrap_or_else(|| ("other".to_string(), LevelBump::NoRelease));

        vec![ParseResult::Parsed(ParsedCommit {
            bump,
            include_in_changelog: bump > LevelBump::NoRelease,
            commit_type,
            scope: None,
            descriptions: vec![subject],
            breaking_descriptions: Vec::new(),
            commit_id: commit.id,
            linked_issues: Vec::new(),
        })]
    }
}
