//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Symlink-safe normalization of one or more paths
//! - `split`: Lexical segment split
//! - `is_subpath`: Lexical prefix test
//! - `relationship`: Four-way lexical relationship
//! - `same`: `lstat` identity comparison
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod is_subpath;
pub mod normalize;
pub mod relationship;
pub mod same;
pub mod split;

pub use completions::CompletionsCommand;
pub use is_subpath::IsSubpathCommand;
pub use normalize::NormalizeCommand;
pub use relationship::RelationshipCommand;
pub use same::SameCommand;
pub use split::SplitCommand;
