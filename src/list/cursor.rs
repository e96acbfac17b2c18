use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::node::Node;
use super::DoublyLinkedList;

/// A read-only position in a `DoublyLinkedList`.
/// Either references a node or is the end cursor, one past the tail.
/// Cursors only move forward, and they compare equal when they reference the same node.
///
/// Internally the cursor is a single nullable pointer, so it is one word in size.
/// It is also the list's forward iterator.
/// ```
/// # use dlinked::DoublyLinkedList;
/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
/// let mut cursor = list.begin();
///
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.current(), Some(&3));
///
/// assert_eq!(cursor.next(), Some(&3));
/// assert_eq!(cursor, list.end());
/// ```
pub struct Cursor<'i, T> {
	current: Option<NonNull<Node<T>>>,
	_list:   PhantomData<&'i T>,
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

impl<T> Clone for Cursor<'_, T> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
	/// The end cursor. `O(1)`.
	/// ```
	/// # use dlinked::{Cursor, DoublyLinkedList};
	/// let list = DoublyLinkedList::from(vec![1, 2]);
	/// let cursor: Cursor<'_, i32> = Cursor::default();
	///
	/// assert!(cursor.is_end());
	/// assert_eq!(cursor, list.end());
	/// ```
	#[inline]
	fn default() -> Self {
		Self::new(None)
	}
}

impl<'i, T> Cursor<'i, T> {
	#[inline]
	pub(super) const fn new(current: Option<NonNull<Node<T>>>) -> Self {
		Self { current, _list: PhantomData }
	}

	/// Get a ref to the referenced element. `O(1)`.
	/// Returns `None` for the end cursor.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// assert_eq!(list.begin().current(), Some(&1));
	/// assert_eq!(list.end().current(), None);
	/// ```
	#[inline]
	pub fn current(&self) -> Option<&'i T> {
		self.current.map(|c| unsafe { &c.as_ref().elem })
	}

	/// Get a ref to the referenced element. `O(1)`.
	///
	/// # Safety
	/// The cursor must not be the end cursor.
	#[inline]
	pub unsafe fn current_unchecked(&self) -> &'i T {
		&self.current.unwrap_unchecked().as_ref().elem
	}

	/// Move the cursor one step forward. `O(1)`.
	/// Stepping off the tail reaches the end cursor.
	/// Returns `false` if the cursor was already at the end.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1]);
	/// let mut cursor = list.begin();
	///
	/// assert!(cursor.advance());
	/// assert!(cursor.is_end());
	/// assert!(!cursor.advance());
	/// ```
	#[inline]
	#[must_use]
	pub fn advance(&mut self) -> bool {
		self.current
			.map(|c| self.current = unsafe { c.as_ref().next })
			.is_some()
	}

	/// Check if this is the end cursor. `O(1)`.
	#[inline]
	pub const fn is_end(&self) -> bool {
		self.current.is_none()
	}
}

impl<'i, T> Iterator for Cursor<'i, T> {
	type Item = &'i T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.current.map(|c| {
			self.current = unsafe { c.as_ref().next };
			unsafe { &c.as_ref().elem }
		})
	}
}

impl<T> std::iter::FusedIterator for Cursor<'_, T> {}

impl<T> std::ops::Deref for Cursor<'_, T> {
	type Target = T;

	/// # Panics
	/// Panics on the end cursor.
	#[inline]
	fn deref(&self) -> &Self::Target {
		self.current().unwrap_or_else(|| panic!("Dereferenced the end cursor"))
	}
}

impl<T> PartialEq for Cursor<'_, T> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.current == other.current
	}
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.current() {
			Some(elem) => write!(f, "Cursor({:?})", elem),
			None       => write!(f, "Cursor(end)"),
		}
	}
}


/*
* ===========================
* ===== Mutable cursors =====
* ===========================
*/

/// A position in a `DoublyLinkedList` that can insert and erase in place.
/// Holds the list mutably, so no other cursor can go stale while it lives.
/// ```
/// # use dlinked::DoublyLinkedList;
/// let mut list = DoublyLinkedList::from(vec![1, 3, 4]);
/// let mut cursor = list.begin_mut();
///
/// assert!(cursor.advance());
/// cursor.insert(2);
/// assert!(cursor.advance());
/// assert!(cursor.advance());
/// assert_eq!(cursor.erase(), Some(4));
/// assert!(cursor.is_end());
///
/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
/// ```
pub struct CursorMut<'i, T> {
	current: Option<NonNull<Node<T>>>,
	list:    &'i mut DoublyLinkedList<T>,
}

impl<'i, T> CursorMut<'i, T> {
	#[inline]
	pub(super) fn new(current: Option<NonNull<Node<T>>>, list: &'i mut DoublyLinkedList<T>) -> Self {
		Self { current, list }
	}

	/// Get a ref to the referenced element. `O(1)`.
	/// Returns `None` for the end cursor.
	#[inline]
	pub fn current(&self) -> Option<&T> {
		self.current.map(|c| unsafe { &c.as_ref().elem })
	}

	/// Get a mut ref to the referenced element. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let mut cursor = list.begin_mut();
	///
	/// assert!(cursor.advance());
	/// *cursor.current_mut().unwrap() = 4;
	/// assert_eq!(format!("{:?}", list), "[1, 4, 3]");
	/// ```
	#[inline]
	pub fn current_mut(&mut self) -> Option<&mut T> {
		self.current.map(|mut c| unsafe { &mut c.as_mut().elem })
	}

	/// Move the cursor one step forward. `O(1)`.
	/// Returns `false` if the cursor was already at the end.
	#[inline]
	#[must_use]
	pub fn advance(&mut self) -> bool {
		self.current
			.map(|c| self.current = unsafe { c.as_ref().next })
			.is_some()
	}

	/// Check if this is the end cursor. `O(1)`.
	#[inline]
	pub const fn is_end(&self) -> bool {
		self.current.is_none()
	}

	/// A read-only copy of this position, borrowing the cursor. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let mut cursor = list.begin_mut();
	/// assert!(cursor.advance());
	///
	/// let rest: Vec<_> = cursor.as_cursor().copied().collect();
	/// assert_eq!(rest, [2, 3]);
	/// ```
	#[inline]
	pub fn as_cursor(&self) -> Cursor<'_, T> {
		Cursor::new(self.current)
	}

	/// Insert an element before the cursor, moving the cursor to it. `O(1)`.
	/// At the end cursor this appends, at the head it prepends.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 3]);
	/// let mut cursor = list.begin_mut();
	///
	/// assert!(cursor.advance());
	/// cursor.insert(2);
	/// assert_eq!(cursor.current(), Some(&2));
	///
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	pub fn insert(&mut self, elem: T) {
		self.current = match self.current {
			None => {
				self.list.push_back(elem);
				self.list.tail
			},
			Some(mut node) => match unsafe { node.as_ref().prev } {
				None => {
					self.list.push_front(elem);
					self.list.head
				},
				Some(mut prev) => {
					let new = Node::new_nonnull(elem, Some(prev), Some(node));
					unsafe {
						prev.as_mut().next = Some(new);
						node.as_mut().prev = Some(new);
					}
					Some(new)
				},
			},
		};
	}

	/// Remove the referenced element and return it. `O(1)`.
	/// The cursor then references the following element, or the end if the tail was removed.
	/// At the end cursor nothing happens and `None` is returned.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let mut cursor = list.begin_mut();
	///
	/// assert_eq!(cursor.erase(), Some(1));
	/// assert_eq!(cursor.current(), Some(&2));
	///
	/// let mut end = list.end_mut();
	/// assert_eq!(end.erase(), None);
	/// ```
	pub fn erase(&mut self) -> Option<T> {
		let node = self.current?;
		let (prev, next) = unsafe { (node.as_ref().prev, node.as_ref().next) };

		self.current = next;
		match (prev, next) {
			(None, _) => self.list.pop_front(),
			(_, None) => self.list.pop_back(),
			(Some(mut prev), Some(mut next)) => unsafe {
				prev.as_mut().next = Some(next);
				next.as_mut().prev = Some(prev);
				Some(Node::into_elem(node))
			},
		}
	}
}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

impl<T: Debug> Debug for CursorMut<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		Debug::fmt(&self.as_cursor(), f)
	}
}
