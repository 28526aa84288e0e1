//! Bidirectional mapping between versions and tag names.
//!
//! A translator owns the configured tag format (e.g. "v{version}") and
//! inverts it into a regex so arbitrary repository tags can be screened:
//! tags that do not match the format are simply not version tags.

use crate::domain::version::Version;
use crate::error::{Result, SemrelError};
use regex::Regex;

/// Default prerelease channel token
pub const DEFAULT_PRERELEASE_TOKEN: &str = "rc";

#[derive(Debug, Clone)]
pub struct VersionTranslator {
    tag_format: String,
    prerelease_token: String,
    tag_regex: Regex,
}

impl VersionTranslator {
    /// Create a translator for the given tag format and prerelease token.
    ///
    /// Fails with a configuration error when the format lacks a `{version}`
    /// placeholder; a format that cannot embed a version can never be
    /// inverted.
    pub fn new(tag_format: impl Into<String>, prerelease_token: impl Into<String>) -> Result<Self> {
        let tag_format = tag_format.into();
        if !tag_format.contains("{version}") {
            return Err(SemrelError::config(format!(
                "tag_format '{}' must contain a {{version}} placeholder",
                tag_format
            )));
        }

        // Escape the literal parts of the format, then swap the placeholder
        // for a capture group. The capture is validated by Version::parse so
        // it can stay permissive here.
        let escaped = regex::escape(&tag_format);
        let pattern = format!("^{}$", escaped.replace(r"\{version\}", "(?P<version>.+)"));
        let tag_regex = Regex::new(&pattern)
            .map_err(|e| SemrelError::config(format!("tag_format '{}': {}", tag_format, e)))?;

        Ok(VersionTranslator {
            tag_format,
            prerelease_token: prerelease_token.into(),
            tag_regex,
        })
    }

    /// Configured prerelease channel token
    pub fn prerelease_token(&self) -> &str {
        &self.prerelease_token
    }

    /// Configured tag format template
    pub fn tag_format(&self) -> &str {
        &self.tag_format
    }

    /// Interpret a tag name as a version.
    ///
    /// Returns `None` when the tag does not match the format or the captured
    /// substring is not a valid semantic version. Callers treat `None` as
    /// "not a version tag", never as a hard error.
    pub fn from_tag(&self, tag_name: &str) -> Option<Version> {
        let captures = self.tag_regex.captures(tag_name)?;
        let raw = captures.name("version")?.as_str();
        Version::parse(raw)
            .ok()
            .map(|v| v.with_tag_format(self.tag_format.clone()))
    }

    /// Parse a bare version string, tagging the result with this
    /// translator's format so later `as_tag` calls stay consistent.
    pub fn from_string(&self, text: &str) -> Result<Version> {
        Ok(Version::parse(text)?.with_tag_format(self.tag_format.clone()))
    }

    /// Render a version as a tag name using this translator's format
    pub fn to_tag(&self, version: &Version) -> String {
        self.tag_format.replace("{version}", &version.to_string())
    }

    /// Materialize a default version string (e.g. "0.0.0") into a tag name,
    /// passing it through the same parse/format pipeline as real tags.
    pub fn str_to_tag(&self, default_version: &str) -> Result<String> {
        Ok(self.from_string(default_version)?.as_tag())
    }
}

impl Default for VersionTranslator {
    fn default() -> Self {
        VersionTranslator::new(
            crate::domain::version::DEFAULT_TAG_FORMAT,
            DEFAULT_PRERELEASE_TOKEN,
        )
        .expect("default tag format is valid")
    }
}
