//! Semantic version value type and bump levels.
//!
//! Versions are immutable; every operation returns a new instance. Precedence
//! follows the semver.org rules, including numeric-vs-alphanumeric prerelease
//! identifier comparison: https://semver.org/#spec-item-11

use crate::error::{Result, SemrelError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;
use std::sync::OnceLock;

/// Default tag format used when none is configured
pub const DEFAULT_TAG_FORMAT: &str = "v{version}";

/// Seed version used when a repository has no prior release
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Magnitude of change implied by a set of commits.
///
/// Totally ordered so that `max()` over a collection selects the most
/// significant change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelBump {
    NoRelease,
    PrereleaseRevision,
    Patch,
    Minor,
    Major,
}

impl fmt::Display for LevelBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LevelBump::NoRelease => "no release",
            LevelBump::PrereleaseRevision => "prerelease revision",
            LevelBump::Patch => "patch",
            LevelBump::Minor => "minor",
            LevelBump::Major => "major",
        };
        write!(f, "{}", name)
    }
}

/// Semantic version with optional prerelease and build metadata.
///
/// The prerelease component is modelled as a token plus an optional trailing
/// numeric revision ("rc.2" -> token "rc", revision 2), which is the shape
/// the increment algorithm manipulates. `tag_format` travels with the value
/// so `as_tag` renders consistently with the translator that produced it.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease_token: Option<String>,
    pub prerelease_revision: Option<u64>,
    pub build_metadata: Option<String>,
    pub tag_format: String,
}

/// Regex per the semver.org suggested pattern (no leading zeros in the
/// release triple or numeric prerelease identifiers).
fn semver_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        )
        .expect("semver regex is valid")
    })
}

impl Version {
    /// Create a full release version with the default tag format
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease_token: None,
            prerelease_revision: None,
            build_metadata: None,
            tag_format: DEFAULT_TAG_FORMAT.to_string(),
        }
    }

    /// Parse a version string per the semver grammar
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = semver_regex().captures(text).ok_or_else(|| {
            SemrelError::version(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]",
                text
            ))
        })?;

        let component = |idx: usize| -> Result<u64> {
            captures[idx].parse::<u64>().map_err(|_| {
                SemrelError::version(format!("Version component out of range in '{}'", text))
            })
        };

        let (prerelease_token, prerelease_revision) = match captures.get(4) {
            Some(pre) => split_prerelease(pre.as_str()),
            None => (None, None),
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            prerelease_token,
            prerelease_revision,
            build_metadata: captures.get(5).map(|m| m.as_str().to_string()),
            tag_format: DEFAULT_TAG_FORMAT.to_string(),
        })
    }

    /// True when a prerelease token is present
    pub fn is_prerelease(&self) -> bool {
        self.prerelease_token.is_some()
    }

    /// Return a copy carrying the given tag format
    pub fn with_tag_format(mut self, tag_format: impl Into<String>) -> Self {
        self.tag_format = tag_format.into();
        self
    }

    /// Render as a tag name using the stored tag format
    pub fn as_tag(&self) -> String {
        self.tag_format.replace("{version}", &self.to_string())
    }

    /// Increment the given component and zero everything below it.
    ///
    /// Clears prerelease and build metadata. `NoRelease` and
    /// `PrereleaseRevision` are precondition violations here; the increment
    /// algorithm handles those levels before calling `bump`.
    pub fn bump(&self, level: LevelBump) -> Result<Self> {
        let (major, minor, patch) = match level {
            LevelBump::Major => (self.major + 1, 0, 0),
            LevelBump::Minor => (self.major, self.minor + 1, 0),
            LevelBump::Patch => (self.major, self.minor, self.patch + 1),
            LevelBump::NoRelease | LevelBump::PrereleaseRevision => {
                return Err(SemrelError::internal(format!(
                    "cannot bump a version by '{}'",
                    level
                )))
            }
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease_token: None,
            prerelease_revision: None,
            build_metadata: None,
            tag_format: self.tag_format.clone(),
        })
    }

    /// Return a copy with the given prerelease token and revision attached,
    /// build metadata cleared.
    pub fn to_prerelease(&self, token: &str, revision: u64) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease_token: Some(token.to_string()),
            prerelease_revision: Some(revision),
            build_metadata: None,
            tag_format: self.tag_format.clone(),
        }
    }

    /// Strip prerelease and build metadata, keeping the release triple
    pub fn finalize_version(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease_token: None,
            prerelease_revision: None,
            build_metadata: None,
            tag_format: self.tag_format.clone(),
        }
    }

    /// Return a copy with the given build metadata attached
    pub fn with_build_metadata(&self, metadata: &str) -> Self {
        let mut v = self.clone();
        v.build_metadata = Some(metadata.to_string());
        v
    }

    /// Dot-joined prerelease identifiers (token segments plus revision),
    /// empty for full releases. Used for precedence comparison.
    fn prerelease_identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = match &self.prerelease_token {
            Some(token) => token.split('.').map(|s| s.to_string()).collect(),
            None => return Vec::new(),
        };
        if let Some(revision) = self.prerelease_revision {
            identifiers.push(revision.to_string());
        }
        identifiers
    }
}

/// Split a raw prerelease string into (token, revision).
///
/// The revision is a trailing purely-numeric identifier following at least
/// one other identifier; a lone identifier is always the token, even when
/// numeric, so formatting round-trips.
fn split_prerelease(raw: &str) -> (Option<String>, Option<u64>) {
    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() >= 2 {
        if let Ok(revision) = segments[segments.len() - 1].parse::<u64>() {
            let token = segments[..segments.len() - 1].join(".");
            return (Some(token), Some(revision));
        }
    }
    (Some(raw.to_string()), None)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(token) = &self.prerelease_token {
            write!(f, "-{}", token)?;
            if let Some(revision) = self.prerelease_revision {
                write!(f, ".{}", revision)?;
            }
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        // tag_format is presentation only and never part of value identity
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease_token == other.prerelease_token
            && self.prerelease_revision == other.prerelease_revision
            && self.build_metadata == other.build_metadata
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| cmp_prerelease(&self.prerelease_identifiers(), &other.prerelease_identifiers()))
            // Build metadata has no semver precedence; compared last only so
            // that Ord stays consistent with Eq.
            .then_with(|| self.build_metadata.cmp(&other.build_metadata))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Semver rule 11: a prerelease sorts below the same release without one;
/// identifiers compare pairwise, numeric before alphanumeric, and a shorter
/// identifier list sorts first when it is a prefix of the longer.
fn cmp_prerelease(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (left, right) in a.iter().zip(b.iter()) {
        let ord = match (left.parse::<u64>(), right.parse::<u64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => left.cmp(right),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.len().cmp(&b.len())
}

impl Sub for &Version {
    type Output = LevelBump;

    /// Highest-order component that differs between the two versions.
    ///
    /// A shared release triple with any prerelease difference yields
    /// `PrereleaseRevision`; fully identical precedence yields `NoRelease`.
    fn sub(self, other: &Version) -> LevelBump {
        if self.major != other.major {
            LevelBump::Major
        } else if self.minor != other.minor {
            LevelBump::Minor
        } else if self.patch != other.patch {
            LevelBump::Patch
        } else if self.prerelease_token != other.prerelease_token
            || self.prerelease_revision != other.prerelease_revision
        {
            LevelBump::PrereleaseRevision
        } else {
            LevelBump::NoRelease
        }
    }
}
