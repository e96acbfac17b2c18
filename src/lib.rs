//! A doubly linked list with forward cursors.  
//! 
//! `O(1)` push and pop at both ends, `O(1)` insert and erase at a cursor.  
//! The length is not cached, so `len` is `O(n)`.
//! 
//! ## Example
//! 
//! ```rust
//! use dlinked::DoublyLinkedList;
//! 
//! let mut list = DoublyLinkedList::new();
//! 
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//! 
//! assert_eq!(format!("{:?}", list), "[0, 1, 2]");
//! assert_eq!(list.front(), Some(&0));
//! assert_eq!(list.back(), Some(&2));
//! 
//! let mut cursor = list.begin_mut();
//! assert!(cursor.advance());
//! assert_eq!(cursor.erase(), Some(1));
//! cursor.insert(5);
//! 
//! assert_eq!(format!("{:?}", list), "[0, 5, 2]");
//! 
//! let copy = list.clone();
//! let num = list.into_iter().fold(0, |acc, elem| acc + elem);
//! 
//! assert_eq!(num, 7);
//! assert_eq!(copy.len(), 3);
//! ```
//! 
//! ## Cursors
//! 
//! [`Cursor`] is a read-only position and the list's iterator;
//! [`CursorMut`] borrows the list mutably and inserts or erases at its position.
//! The end cursor sits one past the tail and references no element.

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]
#![allow(clippy::option_map_unit_fn)]

mod list;
pub use list::{DoublyLinkedList, Cursor, CursorMut, IntoIter};
