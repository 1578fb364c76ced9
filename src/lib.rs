//! # Functional Immutable List
//!
//! A persistent singly-linked list built from cons cells, together with the
//! classic fold-based traversal library (`fold_right`, `fold_left`, and the
//! operations derived from them).
//!
//! This crate is a teaching artifact: it demonstrates algebraic data type
//! design and functional traversal patterns, not a production collection.
//! For real workloads prefer `Vec<T>`, slices, and iterator combinators, or
//! a production persistent library such as `im`.
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: every operation returns a new list instead of
//!    mutating; edge cases degrade to the empty list rather than erroring
//! 2. **Structural Sharing**: lists freely share a common suffix, which is
//!    safe because no cell is ever mutated after construction
//! 3. **Thread-safe**: cells are reference-counted with `Arc`, so a list is
//!    `Send + Sync` whenever its elements are and may be read from many
//!    threads at once
//! 4. **Honest recursion**: `fold_right` and its derivatives are defined by
//!    structural recursion and consume stack proportional to list length;
//!    `fold_left` and its derivatives run as an explicit loop and are
//!    stack-safe for any finite list
//!
//! ## Example
//!
//! ```
//! use fp_list::{list, List};
//!
//! let numbers = list![1, 2, 3, 4, 5];
//!
//! assert_eq!(numbers.length(), 5);
//! assert_eq!(numbers.reverse(), list![5, 4, 3, 2, 1]);
//! assert_eq!(numbers.map(|x| x * x), list![1, 4, 9, 16, 25]);
//! assert_eq!(numbers.fold_left(0, |acc, x| acc + x), 15);
//! ```

pub mod list;

// Re-export main types for convenience
pub use list::{Cell, List};
