use crate::error::{Result, SemrelError};
use crate::git::{CommitInfo, Repository, TagInfo};
use git2::Oid;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

/// In-memory commit DAG for testing without actual git operations.
///
/// Commits are added with explicit parent links; merge-bases are computed
/// from the stored graph so tests can build branchy histories directly.
pub struct MockRepository {
    commits: HashMap<Oid, CommitInfo>,
    tags: Mutex<Vec<TagInfo>>,
    head: Option<Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: Mutex::new(Vec::new()),
            head: None,
        }
    }

    /// Shorthand oid for tests: 20 repeated bytes
    pub fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    /// Add a commit with the given parents and message, returning its id
    pub fn add_commit(&mut self, id: Oid, parents: &[Oid], message: &str) -> Oid {
        self.commits.insert(
            id,
            CommitInfo {
                id,
                parents: parents.to_vec(),
                message: message.to_string(),
                author: "Test Author".to_string(),
            },
        );
        id
    }

    /// Add a tag pointing at a commit
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        self.tags.lock().unwrap().push(TagInfo {
            name: name.into(),
            target,
        });
    }

    /// Set the active branch head
    pub fn set_head(&mut self, id: Oid) {
        self.head = Some(id);
    }

    /// All ancestors of a commit, including the commit itself
    fn ancestors(&self, start: Oid) -> HashSet<Oid> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(commit) = self.commits.get(&id) {
                queue.extend(&commit.parents);
            }
        }
        seen
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| SemrelError::tag("mock repository has no head".to_string()))
    }

    fn list_tags(&self) -> Result<Vec<TagInfo>> {
        Ok(self.tags.lock().unwrap().clone())
    }

    fn find_commit(&self, id: Oid) -> Result<CommitInfo> {
        self.commits
            .get(&id)
            .cloned()
            .ok_or_else(|| SemrelError::tag(format!("mock commit not found: {}", id)))
    }

    fn merge_bases(&self, a: Oid, b: Oid) -> Result<Vec<Oid>> {
        let ancestors_a = self.ancestors(a);
        let ancestors_b = self.ancestors(b);
        let common: Vec<Oid> = ancestors_a.intersection(&ancestors_b).copied().collect();

        // A merge-base is a common ancestor that is not an ancestor of
        // another common ancestor.
        let mut bases: Vec<Oid> = common
            .iter()
            .copied()
            .filter(|candidate| {
                !common.iter().any(|other| {
                    other != candidate && {
                        let mut proper = self.ancestors(*other);
                        proper.remove(other);
                        proper.contains(candidate)
                    }
                })
            })
            .collect();

        bases.sort();
        Ok(bases)
    }

    fn create_tag(&self, name: &str, target: Oid) -> Result<()> {
        self.tags.lock().unwrap().push(TagInfo {
            name: name.to_string(),
            target,
        });
        Ok(())
    }

    fn push_tags(&self, _remote: &str, _tag_names: &[&str]) -> Result<()> {
        Ok(())
    }
}
