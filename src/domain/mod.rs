//! Domain layer: the tree, its construction and the algorithms over it
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod display;
pub mod error;
pub mod path_sum;
pub mod token;
pub mod value;
pub mod views;

pub use arena::{BinaryTree, Side, TreeNode};
pub use builder::{BuildEvent, Request, ScriptedTokens, TokenSource, TreeBuilder};
pub use error::{DomainError, DomainResult};
pub use path_sum::{max_path_sum, PeakPath};
pub use token::{Token, TokenError, TokenGrammar};
pub use value::NodeValue;
