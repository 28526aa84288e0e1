//! Domain logic - pure version and commit semantics independent of git plumbing

pub mod commit;
pub mod translator;
pub mod version;

pub use commit::{CommitParser, ParseError, ParseResult, ParsedCommit};
pub use translator::{VersionTranslator, DEFAULT_PRERELEASE_TOKEN};
pub use version::{LevelBump, Version, DEFAULT_TAG_FORMAT, DEFAULT_VERSION};
