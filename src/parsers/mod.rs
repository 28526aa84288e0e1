//! Commit parser implementations, each with its own configuration struct

pub mod conventional;
pub mod emoji;
pub mod tag_based;

pub use conventional::{ConventionalParser, ConventionalParserConfig};
pub use emoji::{EmojiParser, EmojiParserConfig};
pub use tag_based::{TagParser, TagParserConfig};
