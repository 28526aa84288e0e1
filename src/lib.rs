pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod parsers;
pub mod ui;

pub use analyzer::{next_version, NextVersionOptions};
pub use domain::{LevelBump, Version, VersionTranslator};
pub use error::{Result, SemrelError};
