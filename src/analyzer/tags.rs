//! Tag enumeration: screen repository tags down to version tags.

use crate::boundary::BoundaryWarning;
use crate::domain::{Version, VersionTranslator};
use crate::git::TagInfo;

/// Pair every tag that parses under the translator with its version, sorted
/// descending by semantic-version precedence.
///
/// Tags that do not match the configured format are logged and dropped;
/// a repository full of unrelated tags is a normal condition, not an error.
/// Two tags parsing to the same version is a user configuration problem but
/// must not crash; the sort is stable so input order decides.
pub fn tags_and_versions(
    tags: &[TagInfo],
    translator: &VersionTranslator,
) -> Vec<(TagInfo, Version)> {
    let mut pairs: Vec<(TagInfo, Version)> = Vec::new();

    for tag in tags {
        match translator.from_tag(&tag.name) {
            Some(version) => pairs.push((tag.clone(), version)),
            None => {
                log::debug!(
                    "{}",
                    BoundaryWarning::UnparsableTag {
                        tag: tag.name.clone(),
                    }
                );
            }
        }
    }

    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}
