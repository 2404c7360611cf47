//! Level-wise binary tree construction with depth-first traversals,
//! breadth-first views and a maximum peak path sum.
//!
//! ```
//! use bintree::domain::{max_path_sum, views, ScriptedTokens, TreeBuilder};
//!
//! let mut tokens = ScriptedTokens::new(["1", "2", "3", "4", "null", "null", "null"]);
//! let tree = TreeBuilder::default().build(&mut tokens).unwrap();
//!
//! let inorder: Vec<i32> = views::inorder(&tree).iter().map(|v| v.get()).collect();
//! assert_eq!(inorder, vec![4, 2, 1, 3]);
//! assert_eq!(max_path_sum(&tree).unwrap().sum, 10);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
