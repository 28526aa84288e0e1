//! The version increment algorithm and the top-level `next_version` driver.

use crate::analyzer::bump::aggregate_bump;
use crate::analyzer::history::{commits_since, nearest_full_release};
use crate::analyzer::tags::tags_and_versions;
use crate::boundary::BoundaryWarning;
use crate::domain::{CommitParser, LevelBump, Version, VersionTranslator, DEFAULT_VERSION};
use crate::error::{Result, SemrelError};
use crate::git::Repository;

/// Caller policy for resolving the next version
#[derive(Debug, Clone)]
pub struct NextVersionOptions {
    /// Produce a prerelease instead of a full release
    pub prerelease: bool,
    /// Prerelease channel token; falls back to the translator's token
    pub prerelease_token: Option<String>,
    /// Whether a breaking change on a 0.x line bumps to 1.0.0
    pub major_on_zero: bool,
    /// Whether 0.x versions are permitted at all
    pub allow_zero_version: bool,
    /// Build metadata to attach; forces a release even with no qualifying
    /// commits
    pub build_metadata: Option<String>,
}

impl Default for NextVersionOptions {
    fn default() -> Self {
        NextVersionOptions {
            prerelease: false,
            prerelease_token: None,
            major_on_zero: true,
            allow_zero_version: true,
            build_metadata: None,
        }
    }
}

/// Compute the single next version from the latest version, the latest full
/// release, and the aggregated bump level.
///
/// `latest_version` may be a prerelease; `latest_full_version` is the most
/// recent non-prerelease release (possibly older). The zero-major policy is
/// applied first, then the prerelease/full split decides between restarting
/// a prerelease series, incrementing its revision, promoting a prerelease,
/// or a plain bump.
pub fn increment_version(
    latest_version: &Version,
    latest_full_version: &Version,
    mut level_bump: LevelBump,
    prerelease: bool,
    prerelease_token: &str,
    major_on_zero: bool,
    allow_zero_version: bool,
) -> Result<Version> {
    if latest_version.major == 0 {
        if !allow_zero_version {
            // The first release of a no-zero project jumps straight to 1.0.0
            // no matter what the commits say.
            level_bump = LevelBump::Major;
        } else if !major_on_zero {
            // 0.x carries no stability guarantee; breaking changes only
            // advance the minor component.
            level_bump = level_bump.min(LevelBump::Minor);
        }
    }

    // How far the current branch has already progressed, as prereleases,
    // beyond the last full release.
    let diff = latest_version - latest_full_version;

    if prerelease {
        if level_bump > diff {
            // Bigger change than any prerelease so far: restart the series.
            return Ok(latest_full_version
                .finalize_version()
                .bump(level_bump)?
                .to_prerelease(prerelease_token, 1));
        }
        // The series already covers this level; advance the revision.
        // Switching channel token resets the revision to 1.
        let revision = if latest_version.prerelease_token.as_deref() != Some(prerelease_token) {
            1
        } else {
            latest_version.prerelease_revision.unwrap_or(0) + 1
        };
        return Ok(latest_version.to_prerelease(prerelease_token, revision));
    }

    if latest_version.is_prerelease() {
        if level_bump > diff {
            // Promote with the bigger change.
            return latest_version.bump(level_bump);
        }
        // The prerelease already represents the necessary bump.
        return Ok(latest_version.finalize_version());
    }

    latest_version.bump(level_bump)
}

/// Resolve the next version for the repository's active branch.
///
/// Enumerates version tags, locates the latest full release reachable from
/// the merge-base of HEAD and the most recent full-release tag, aggregates
/// the bump level over the unreleased commit range, and runs the increment
/// algorithm. Returns the latest version unchanged when nothing warrants a
/// release.
pub fn next_version<R, P>(
    repo: &R,
    translator: &VersionTranslator,
    parser: &P,
    options: &NextVersionOptions,
) -> Result<Version>
where
    R: Repository,
    P: CommitParser + ?Sized,
{
    let all_tags = repo.list_tags()?;
    let all_pairs = tags_and_versions(&all_tags, translator);
    let full_pairs: Vec<_> = all_pairs
        .iter()
        .filter(|(_, v)| !v.is_prerelease())
        .cloned()
        .collect();

    let latest_version = match all_pairs.first() {
        Some((_, version)) => version.clone(),
        None => translator.from_string(DEFAULT_VERSION)?,
    };

    let head = repo.head_oid()?;

    // Latest full release *in this branch's history*, found by BFS from the
    // merge-base with the most recent full-release tag. Its tag anchors the
    // stop-set for commit collection.
    let (latest_full_version, stop) = match full_pairs.first() {
        Some((latest_full_tag, _)) => {
            let merge_bases = repo.merge_bases(head, latest_full_tag.target)?;
            if merge_bases.len() > 1 {
                return Err(SemrelError::unsupported(format!(
                    "branch has {} merge-bases with release tag '{}'; \
                     cannot decide which lineage is canonical",
                    merge_bases.len(),
                    latest_full_tag.name
                )));
            }
            match merge_bases.first() {
                Some(merge_base) => {
                    match nearest_full_release(repo, *merge_base, &full_pairs)? {
                        Some((tag, version)) => (version, Some(tag.target)),
                        None => (translator.from_string(DEFAULT_VERSION)?, None),
                    }
                }
                // Unrelated histories: nothing on this branch was released.
                None => (translator.from_string(DEFAULT_VERSION)?, None),
            }
        }
        None => (translator.from_string(DEFAULT_VERSION)?, None),
    };

    let commits = commits_since(repo, head, stop)?;
    let level_bump = aggregate_bump(&commits, parser);
    log::debug!(
        "{} commits since last release, aggregated bump: {}",
        commits.len(),
        level_bump
    );

    if level_bump == LevelBump::NoRelease
        && (latest_version.major != 0 || options.allow_zero_version)
    {
        // Caller-supplied build metadata still forces a release; the version
        // precedence is unchanged but the rendered tag is new.
        if let Some(metadata) = &options.build_metadata {
            return Ok(latest_version.with_build_metadata(metadata));
        }
        log::info!(
            "{}",
            BoundaryWarning::NoNewCommits {
                latest_version: latest_version.to_string(),
                current_commit_hash: head.to_string(),
            }
        );
        return Ok(latest_version);
    }

    let token = options
        .prerelease_token
        .as_deref()
        .unwrap_or_else(|| translator.prerelease_token());

    let next = increment_version(
        &latest_version,
        &latest_full_version,
        level_bump,
        options.prerelease,
        token,
        options.major_on_zero,
        options.allow_zero_version,
    )?;

    Ok(match &options.build_metadata {
        Some(metadata) => next.with_build_metadata(metadata),
        None => next,
    })
}
