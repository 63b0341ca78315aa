//! T9 predictive text: a trie keyed by telephone keypad digits.
//!
//! Build a [`TrieNode`] once from a word list, then walk it one key at a time
//! with [`Walker`] (or [`TrieNode::walk`] directly). Each step reports the
//! words that end at the new position; [`TrieNode::next_steps`] reports which
//! keys can follow.
//!
//! ```
//! use t9::{Digit, TrieNode};
//!
//! let (root, _) = TrieNode::from_words(["beam", "bean", "bear"]);
//! let node = root.lookup(&[Digit::Two, Digit::Three, Digit::Two]).unwrap();
//! assert_eq!(node.next_steps(), vec![Digit::Six, Digit::Seven]);
//!
//! let (_, words) = node.walk(6).unwrap();
//! assert_eq!(words, ["beam", "bean"]);
//! assert!(node.walk(5).is_err());
//! ```

pub mod error;
pub mod keypad;
pub mod trie;
pub mod walker;
pub mod words;

pub use error::T9Error;
pub use keypad::Digit;
pub use trie::{BuildReport, TrieNode};
pub use walker::Walker;
