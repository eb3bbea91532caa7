//! A mutable last-in-first-out stack built on a singly linked chain of owned nodes.
//!
//! ```
//! use linked_stack::{stack, Stack};
//!
//! let mut stack = stack![1, 2, 3];
//! assert_eq!(stack.top(), Ok(&3));
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.to_string(), "Stack(1)");
//! assert!(stack.hash_code().is_err());
//!
//! let empty: Stack<i32> = Stack::new();
//! assert!(empty.top().is_err());
//! ```

pub mod chain;
pub mod error;
pub mod shared;
pub mod stack;

pub use error::StackError;
pub use stack::{Drain, Snapshot, Stack};
