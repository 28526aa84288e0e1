use crate::domain::{CommitParser, VersionTranslator};
use crate::error::{Result, SemrelError};
use crate::parsers::{
    ConventionalParser, ConventionalParserConfig, EmojiParser, EmojiParserConfig, TagParser,
    TagParserConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete configuration for semrel.
///
/// Covers version policy (tag format, prerelease channel, zero-version
/// handling) and commit parser selection.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub parser: ParserConfig,
}

/// Version resolution policy
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VersionConfig {
    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default = "default_prerelease_token")]
    pub prerelease_token: String,

    #[serde(default = "default_true")]
    pub major_on_zero: bool,

    #[serde(default = "default_true")]
    pub allow_zero_version: bool,
}

fn default_tag_format() -> String {
    crate::domain::DEFAULT_TAG_FORMAT.to_string()
}

fn default_prerelease_token() -> String {
    crate::domain::DEFAULT_PRERELEASE_TOKEN.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            tag_format: default_tag_format(),
            prerelease_token: default_prerelease_token(),
            major_on_zero: true,
            allow_zero_version: true,
        }
    }
}

impl VersionConfig {
    /// Build the translator for this configuration.
    ///
    /// Fails fast on a tag format without a `{version}` placeholder.
    pub fn translator(&self) -> Result<VersionTranslator> {
        VersionTranslator::new(self.tag_format.clone(), self.prerelease_token.clone())
    }
}

/// Which commit parser to use, with per-parser options
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ParserConfig {
    #[serde(default)]
    pub kind: ParserKind,

    #[serde(default)]
    pub conventional: ConventionalParserConfig,

    #[serde(default)]
    pub emoji: EmojiParserConfig,

    #[serde(default)]
    pub tag: TagParserConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    #[default]
    Conventional,
    Emoji,
    Tag,
}

impl ParserConfig {
    /// Instantiate the configured parser
    pub fn build(&self) -> Box<dyn CommitParser> {
        match self.kind {
            ParserKind::Conventional => {
                Box::new(ConventionalParser::new(self.conventional.clone()))
            }
            ParserKind::Emoji => Box::new(EmojiParser::new(self.emoji.clone())),
            ParserKind::Tag => Box::new(TagParser::new(self.tag.clone())),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Resolution order:
/// 1. Custom path provided as parameter
/// 2. `semrel.toml` in the current directory
/// 3. `semrel.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./semrel.toml").exists() {
        fs::read_to_string("./semrel.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("semrel.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| SemrelError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version.tag_format, "v{version}");
        assert_eq!(config.version.prerelease_token, "rc");
        assert!(config.version.major_on_zero);
        assert!(config.version.allow_zero_version);
        assert_eq!(config.parser.kind, ParserKind::Conventional);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
[version]
tag_format = "release-{version}"
major_on_zero = false
"#,
        )
        .unwrap();
        assert_eq!(config.version.tag_format, "release-{version}");
        assert!(!config.version.major_on_zero);
        // Untouched fields fall back to defaults.
        assert_eq!(config.version.prerelease_token, "rc");
        assert!(config.version.allow_zero_version);
    }

    #[test]
    fn test_parser_kind_selection() {
        let config: Config = toml::from_str(
            r#"
[parser]
kind = "emoji"
"#,
        )
        .unwrap();
        assert_eq!(config.parser.kind, ParserKind::Emoji);
        let _ = config.parser.build();
    }

    #[test]
    fn test_translator_from_bad_format_fails() {
        let config: Config = toml::from_str(
            r#"
[version]
tag_format = "release"
"#,
        )
        .unwrap();
        assert!(config.version.translator().is_err());
    }
}
