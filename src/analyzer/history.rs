//! Commit-graph traversal: nearest-release search and unreleased-range
//! collection.
//!
//! Both walks are explicit worklist algorithms over commit ids. Commit DAGs
//! are acyclic by construction, but every walk still carries a visited set
//! so merge points are processed once and a corrupt graph cannot loop.

use crate::domain::Version;
use crate::error::Result;
use crate::git::{CommitInfo, Repository, TagInfo};
use git2::Oid;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first search from `start` through parent edges for the nearest
/// ancestor carrying a full-release tag.
///
/// BFS order makes the result the nearest match in edge-distance. Parents
/// are enqueued first-parent first, so equidistant ties resolve toward the
/// primary lineage. Returns `None` when no ancestor is tagged with a full
/// release.
pub fn nearest_full_release<R: Repository>(
    repo: &R,
    start: Oid,
    full_releases: &[(TagInfo, Version)],
) -> Result<Option<(TagInfo, Version)>> {
    // Duplicate tags on one commit are a configuration quirk; the last pair
    // seen wins, arbitrarily.
    let mut by_commit: HashMap<Oid, &(TagInfo, Version)> = HashMap::new();
    for pair in full_releases {
        by_commit.insert(pair.0.target, pair);
    }

    let mut visited: HashSet<Oid> = HashSet::new();
    let mut queue: VecDeque<Oid> = VecDeque::from([start]);

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        if let Some((tag, version)) = by_commit.get(&id) {
            return Ok(Some((tag.clone(), version.clone())));
        }
        queue.extend(repo.find_commit(id)?.parents);
    }

    Ok(None)
}

/// Collect every commit reachable from `head` but not reachable from
/// `stop` (the prior release's ancestry). With no stop commit the entire
/// history is collected.
///
/// Stop-set membership is checked before a node is pushed, so already
/// released commits are pruned even when reachable along another path.
/// Parents are pushed in reverse so the first-parent lineage is yielded
/// before merged-in branches; downstream consumers rely on that ordering
/// staying stable.
pub fn commits_since<R: Repository>(
    repo: &R,
    head: Oid,
    stop: Option<Oid>,
) -> Result<Vec<CommitInfo>> {
    let stop_set = match stop {
        Some(stop_id) => ancestry(repo, stop_id)?,
        None => HashSet::new(),
    };

    let mut collected = Vec::new();
    let mut visited: HashSet<Oid> = HashSet::new();
    let mut stack: Vec<Oid> = Vec::new();

    if !stop_set.contains(&head) {
        stack.push(head);
    }

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let commit = repo.find_commit(id)?;
        for parent in commit.parents.iter().rev() {
            if !stop_set.contains(parent) && !visited.contains(parent) {
                stack.push(*parent);
            }
        }
        collected.push(commit);
    }

    Ok(collected)
}

/// All commits reachable from `start`, including `start` itself
fn ancestry<R: Repository>(repo: &R, start: Oid) -> Result<HashSet<Oid>> {
    let mut seen: HashSet<Oid> = HashSet::new();
    let mut queue: VecDeque<Oid> = VecDeque::from([start]);

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        queue.extend(repo.find_commit(id)?.parents);
    }

    Ok(seen)
}
