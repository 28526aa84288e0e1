//! Git operations abstraction layer
//!
//! The version algorithm only ever reads a snapshot of repository metadata:
//! tags with their target commits, commit parent links, and merge-base
//! queries. The [Repository] trait models exactly that surface, with two
//! implementations:
//!
//! - [repository::Git2Repository]: real repositories via the `git2` crate
//! - [mock::MockRepository]: an in-memory commit DAG for testing
//!
//! Code should depend on the trait rather than a concrete implementation.
//!
//! ```rust
//! # use semrel::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.head_oid()?;
//! for tag in repo.list_tags()? {
//!     println!("{} -> {}", tag.name, tag.target);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Commit snapshot used by traversal and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Stable commit identity
    pub id: Oid,
    /// Parent commit ids in recorded order (first parent first)
    pub parents: Vec<Oid>,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author: String,
}

/// A tag name together with the commit it points at (peeled for annotated tags)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    pub target: Oid,
}

/// Read-mostly repository contract consumed by the version algorithm.
///
/// Implementations map their underlying errors into
/// [crate::error::SemrelError]. The only mutating operations are
/// [Repository::create_tag] and [Repository::push_tags], both invoked by the
/// caller after the next version has been computed.
pub trait Repository: Send + Sync {
    /// Commit id at the tip of the active branch
    fn head_oid(&self) -> Result<Oid>;

    /// All tags in the repository with their peeled target commits.
    ///
    /// Non-version tags are included; filtering happens downstream in the
    /// tag enumeration.
    fn list_tags(&self) -> Result<Vec<TagInfo>>;

    /// Load one commit's metadata
    fn find_commit(&self, id: Oid) -> Result<CommitInfo>;

    /// All merge-bases between two commits.
    ///
    /// More than one element means the history is ambiguous; callers decide
    /// whether that is an error.
    fn merge_bases(&self, a: Oid, b: Oid) -> Result<Vec<Oid>>;

    /// Create a lightweight tag pointing at the given commit
    fn create_tag(&self, name: &str, target: Oid) -> Result<()>;

    /// Push the given tags to a remote
    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()>;
}
