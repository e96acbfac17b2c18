use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

mod node;
use node::Node;

mod cursor;
pub use cursor::{Cursor, CursorMut};

/// A doubly linked list. Holds the head and tail of an owned chain of nodes,
/// both absent exactly when the list is empty.
/// The length is not cached; `len` walks the chain.
pub struct DoublyLinkedList<T> {
	head: Option<NonNull<Node<T>>>,
	tail: Option<NonNull<Node<T>>>,
	_boo: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> DoublyLinkedList<T> {
	/// Create a new empty list. `O(1)`.
	/// Does not allocate any memory.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list: DoublyLinkedList<u8> = DoublyLinkedList::new();
	/// assert!(list.is_empty());
	/// ```
	#[inline]
	pub const fn new() -> Self {
		Self {
			head: None,
			tail: None,
			_boo: PhantomData,
		}
	}

	/// Append an element after the tail. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::new();
	/// list.push_back(1);
	/// list.push_back(2);
	/// list.push_back(3);
	///
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	pub fn push_back(&mut self, elem: T) {
		let new = Node::new_nonnull(elem, self.tail, None);

		match self.tail {
			None           => self.head = Some(new),
			Some(mut tail) => unsafe { tail.as_mut().next = Some(new) },
		}

		self.tail = Some(new);
	}

	/// Prepend an element before the head. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::new();
	/// list.push_front(1);
	/// list.push_front(2);
	/// list.push_front(3);
	///
	/// assert_eq!(format!("{:?}", list), "[3, 2, 1]");
	/// ```
	pub fn push_front(&mut self, elem: T) {
		let new = Node::new_nonnull(elem, None, self.head);

		match self.head {
			None           => self.tail = Some(new),
			Some(mut head) => unsafe { head.as_mut().prev = Some(new) },
		}

		self.head = Some(new);
	}

	/// Remove the tail and return its element. `O(1)`.
	/// Does nothing and returns `None` on an empty list.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2]);
	/// assert_eq!(list.pop_back(), Some(2));
	/// assert_eq!(list.pop_back(), Some(1));
	/// assert_eq!(list.pop_back(), None);
	/// assert!(list.is_empty());
	/// ```
	pub fn pop_back(&mut self) -> Option<T> {
		self.tail.map(|tail| {
			let prev = unsafe { tail.as_ref().prev };

			match prev {
				Some(mut prev) => unsafe { prev.as_mut().next = None },
				None           => self.head = None,
			}

			self.tail = prev;
			unsafe { Node::into_elem(tail) }
		})
	}

	/// Remove the head and return its element. `O(1)`.
	/// Does nothing and returns `None` on an empty list.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2]);
	/// assert_eq!(list.pop_front(), Some(1));
	/// assert_eq!(list.pop_front(), Some(2));
	/// assert_eq!(list.pop_front(), None);
	/// ```
	pub fn pop_front(&mut self) -> Option<T> {
		self.head.map(|head| {
			let next = unsafe { head.as_ref().next };

			match next {
				Some(mut next) => unsafe { next.as_mut().prev = None },
				None           => self.tail = None,
			}

			self.head = next;
			unsafe { Node::into_elem(head) }
		})
	}

	/// Get a ref to the first element. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::new();
	/// assert_eq!(list.front(), None);
	///
	/// list.push_back(1);
	/// list.push_back(2);
	/// assert_eq!(list.front(), Some(&1));
	/// ```
	#[inline]
	pub fn front(&self) -> Option<&T> {
		self.head.map(|ptr| unsafe { &ptr.as_ref().elem })
	}

	/// Get a mut ref to the first element. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	///
	/// *list.front_mut().unwrap() = 4;
	/// assert_eq!(format!("{:?}", list), "[4, 2, 3]");
	/// ```
	#[inline]
	pub fn front_mut(&mut self) -> Option<&mut T> {
		self.head.map(|mut ptr| unsafe { &mut ptr.as_mut().elem })
	}

	/// Get a ref to the last element. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// assert_eq!(list.back(), Some(&3));
	/// ```
	#[inline]
	pub fn back(&self) -> Option<&T> {
		self.tail.map(|ptr| unsafe { &ptr.as_ref().elem })
	}

	/// Get a mut ref to the last element. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	///
	/// *list.back_mut().unwrap() = 4;
	/// assert_eq!(format!("{:?}", list), "[1, 2, 4]");
	/// ```
	#[inline]
	pub fn back_mut(&mut self) -> Option<&mut T> {
		self.tail.map(|mut ptr| unsafe { &mut ptr.as_mut().elem })
	}

	/// Get a ref to the first element without checking for emptiness. `O(1)`.
	///
	/// # Safety
	/// The list must not be empty.
	#[inline]
	pub unsafe fn front_unchecked(&self) -> &T {
		&self.head.unwrap_unchecked().as_ref().elem
	}

	/// Get a ref to the last element without checking for emptiness. `O(1)`.
	///
	/// # Safety
	/// The list must not be empty.
	#[inline]
	pub unsafe fn back_unchecked(&self) -> &T {
		&self.tail.unwrap_unchecked().as_ref().elem
	}

	/// Get a mut ref to the first element without checking for emptiness. `O(1)`.
	///
	/// # Safety
	/// The list must not be empty.
	#[inline]
	pub unsafe fn front_mut_unchecked(&mut self) -> &mut T {
		&mut self.head.unwrap_unchecked().as_mut().elem
	}

	/// Get a mut ref to the last element without checking for emptiness. `O(1)`.
	///
	/// # Safety
	/// The list must not be empty.
	#[inline]
	pub unsafe fn back_mut_unchecked(&mut self) -> &mut T {
		&mut self.tail.unwrap_unchecked().as_mut().elem
	}

	/// Remove every element. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// list.clear();
	///
	/// assert!(list.is_empty());
	/// assert_eq!(list.len(), 0);
	/// ```
	pub fn clear(&mut self) {
		while self.pop_back().is_some() {}
	}

	/// Check if the list is empty. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list: DoublyLinkedList<u8> = DoublyLinkedList::new();
	/// assert!(list.is_empty());
	/// ```
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.head.is_none()
	}

	/// Count the elements. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// assert_eq!(list.len(), 3);
	/// ```
	#[inline]
	pub fn len(&self) -> usize {
		self.iter().count()
	}

	/// Check whether any element equals `elem`. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// assert!(list.contains(&2));
	/// assert!(!list.contains(&4));
	/// ```
	pub fn contains(&self, elem: &T) -> bool
	where T: PartialEq {
		self.iter().any(|e| e == elem)
	}

	/// A read-only cursor at the head. `O(1)`.
	/// On an empty list this is equal to `end()`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let mut cursor = list.begin();
	///
	/// assert_eq!(*cursor, 1);
	/// assert!(cursor.advance());
	/// assert_eq!(*cursor, 2);
	///
	/// let empty: DoublyLinkedList<u8> = DoublyLinkedList::new();
	/// assert_eq!(empty.begin(), empty.end());
	/// ```
	#[inline]
	pub fn begin(&self) -> Cursor<'_, T> {
		Cursor::new(self.head)
	}

	/// A read-only cursor one past the tail. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1]);
	/// let mut cursor = list.begin();
	///
	/// assert!(cursor.advance());
	/// assert_eq!(cursor, list.end());
	/// assert_eq!(cursor.current(), None);
	/// ```
	#[inline]
	pub fn end(&self) -> Cursor<'_, T> {
		Cursor::new(None)
	}

	/// Forward iterator over the elements, the same cursor `begin` returns. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// assert_eq!(list.iter().sum::<i32>(), 6);
	/// ```
	#[inline]
	pub fn iter(&self) -> Cursor<'_, T> {
		self.begin()
	}

	/// A mutable cursor at the head, used to insert and erase in place. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let mut cursor = list.begin_mut();
	///
	/// assert!(cursor.advance());
	/// assert_eq!(cursor.erase(), Some(2));
	/// assert_eq!(cursor.current(), Some(&3));
	///
	/// assert_eq!(format!("{:?}", list), "[1, 3]");
	/// ```
	#[inline]
	pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
		CursorMut::new(self.head, self)
	}

	/// A mutable cursor one past the tail. Inserting here appends. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1, 2]);
	/// list.end_mut().insert(3);
	///
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	#[inline]
	pub fn end_mut(&mut self) -> CursorMut<'_, T> {
		CursorMut::new(None, self)
	}

	/// Walk the chain both ways and check every link. Returns the length.
	#[cfg(test)]
	fn check_links(&self) -> usize {
		assert_eq!(self.head.is_none(), self.tail.is_none());

		let mut forward = 0;
		let mut prev    = None;
		let mut current = self.head;
		while let Some(node) = current {
			assert_eq!(unsafe { node.as_ref().prev }, prev);
			prev    = current;
			current = unsafe { node.as_ref().next };
			forward += 1;
		}
		assert_eq!(prev, self.tail);

		let mut backward = 0;
		let mut next     = None;
		let mut current  = self.tail;
		while let Some(node) = current {
			assert_eq!(unsafe { node.as_ref().next }, next);
			next     = current;
			current  = unsafe { node.as_ref().prev };
			backward += 1;
		}
		assert_eq!(next, self.head);

		assert_eq!(forward, backward);
		forward
	}
}

impl<T> Default for DoublyLinkedList<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
	/// Deep copy the list. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let mut cloned = list.clone();
	///
	/// cloned.push_back(4);
	/// assert_eq!(format!("{:?}", list),   "[1, 2, 3]");
	/// assert_eq!(format!("{:?}", cloned), "[1, 2, 3, 4]");
	/// ```
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}

	/// Replace the contents with a deep copy of `source`. `O(n + m)`.
	fn clone_from(&mut self, source: &Self) {
		self.clear();
		self.extend(source.iter().cloned());
	}
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
	fn eq(&self, other: &Self) -> bool {
		self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Drop for DoublyLinkedList<T> {
	/// Drop the list. `O(n)`.
	/// If an element's destructor panics, the remaining nodes are still freed.
	fn drop(&mut self) {
		struct DropGuard<'a, T>(&'a mut DoublyLinkedList<T>);

		impl<T> Drop for DropGuard<'_, T> {
			fn drop(&mut self) {
				while self.0.pop_back().is_some() {}
			}
		}

		while let Some(elem) = self.pop_back() {
			let guard = DropGuard(self);
			mem::drop(elem);
			mem::forget(guard);
		}
	}
}


/*
* ==========================
* ===== Iteratory bits =====
* ==========================
*/

/// An owning forward iterator, see `DoublyLinkedList::into_iter`.
pub struct IntoIter<T> {
	list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	/// Internally this call is just `pop_front`. `O(1)`.
	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.list.pop_front()
	}
}

impl<T: Debug> Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.list).finish()
	}
}

impl<T> IntoIterator for DoublyLinkedList<T> {
	type Item     = T;
	type IntoIter = IntoIter<T>;

	/// Consume the list front to back. `O(1)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// let num = list.into_iter().fold(0, |acc, elem| acc + elem);
	/// assert_eq!(num, 6);
	/// ```
	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		IntoIter { list: self }
	}
}

impl<'i, T> IntoIterator for &'i DoublyLinkedList<T> {
	type Item     = &'i T;
	type IntoIter = Cursor<'i, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.begin()
	}
}

impl<T> Extend<T> for DoublyLinkedList<T> {
	/// Append every element at the back. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let mut list = DoublyLinkedList::from(vec![1]);
	/// list.extend(vec![2, 3]);
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		iter.into_iter().for_each(|elem| self.push_back(elem));
	}
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DoublyLinkedList<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.extend(iter.into_iter().copied());
	}
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
	/// Create a new list from an iterator. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = (1..=3).collect::<DoublyLinkedList<_>>();
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		iter.into_iter().fold(Self::new(),
			|mut list, elem| { list.push_back(elem); list })
	}
}

impl<T> From<Vec<T>> for DoublyLinkedList<T> {
	/// Create a new list from a Vec. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from(vec![1, 2, 3]);
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<T: Clone> From<&[T]> for DoublyLinkedList<T> {
	/// Create a new list from a slice. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let array: &[u8] = &[1, 2, 3];
	/// let list = DoublyLinkedList::from(array);
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	fn from(slice: &[T]) -> Self {
		slice.iter().cloned().collect()
	}
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
	/// Create a new list from an array. `O(n)`.
	/// ```
	/// # use dlinked::DoublyLinkedList;
	/// let list = DoublyLinkedList::from([1, 2, 3]);
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	fn from(array: [T; N]) -> Self {
		array.into_iter().collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use std::mem;

	fn collect<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
		list.iter().cloned().collect()
	}

	#[test]
	fn push_back_keeps_order() {
		let mut list = DoublyLinkedList::new();
		list.push_back(1);
		list.push_back(2);
		list.push_back(3);

		assert_eq!(collect(&list), [1, 2, 3]);
		assert_eq!(list.len(), 3);
		assert_eq!(list.front(), Some(&1));
		assert_eq!(list.back(), Some(&3));
		assert_eq!(list.check_links(), 3);
	}

	#[test]
	fn push_front_reverses_order() {
		let mut list = DoublyLinkedList::new();
		(1..=4).for_each(|i| list.push_front(i));

		assert_eq!(collect(&list), [4, 3, 2, 1]);
		assert_eq!(list.check_links(), 4);
	}

	#[test]
	fn push_then_pop_restores_state() {
		let mut list = DoublyLinkedList::new();
		list.push_back('a');
		assert_eq!(list.pop_back(), Some('a'));
		assert!(list.is_empty());
		assert_eq!(list.check_links(), 0);

		let mut list = DoublyLinkedList::from(vec!['a', 'b']);
		list.push_back('c');
		assert_eq!(list.pop_back(), Some('c'));
		assert_eq!(collect(&list), ['a', 'b']);
		assert_eq!(list.check_links(), 2);
	}

	#[test]
	fn pops_on_empty_are_noops() {
		let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
		assert_eq!(list.pop_front(), None);
		assert_eq!(list.pop_back(), None);
		assert_eq!(list.len(), 0);
		assert!(list.is_empty());
		assert_eq!(list.front(), None);
		assert_eq!(list.back(), None);
	}

	#[test]
	fn single_element_is_head_and_tail() {
		let mut list = DoublyLinkedList::from(vec![7]);
		assert_eq!(list.front(), list.back());
		assert_eq!(unsafe { list.front_unchecked() }, &7);
		assert_eq!(unsafe { list.back_unchecked() }, &7);

		assert_eq!(list.pop_front(), Some(7));
		assert_eq!(list.check_links(), 0);
	}

	#[test]
	fn unchecked_mut_access() {
		let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
		unsafe {
			*list.front_mut_unchecked() = 10;
			*list.back_mut_unchecked()  = 30;
		}
		assert_eq!(collect(&list), [10, 2, 30]);

		let mut single = DoublyLinkedList::from(vec![5]);
		unsafe { *single.back_mut_unchecked() += 1; }
		assert_eq!(single.front(), Some(&6));
	}

	#[test]
	fn clear_twice() {
		let mut list = DoublyLinkedList::from(vec![1, 2, 3]);
		list.clear();
		assert!(list.is_empty());
		list.clear();
		assert!(list.is_empty());
		assert_eq!(list.len(), 0);

		list.push_back(4);
		assert_eq!(collect(&list), [4]);
	}

	#[test]
	fn insert_at_begin_is_push_front() {
		let mut inserted = DoublyLinkedList::from(vec![1, 2]);
		let mut pushed   = inserted.clone();

		let mut cursor = inserted.begin_mut();
		cursor.insert(0);
		assert_eq!(cursor.current(), Some(&0));

		pushed.push_front(0);
		assert_eq!(inserted, pushed);
		assert_eq!(inserted.check_links(), 3);
	}

	#[test]
	fn insert_at_end_is_push_back() {
		let mut inserted = DoublyLinkedList::from(vec![1, 2]);
		let mut pushed   = inserted.clone();

		let mut cursor = inserted.end_mut();
		cursor.insert(3);
		assert_eq!(cursor.current(), Some(&3));

		pushed.push_back(3);
		assert_eq!(inserted, pushed);
		assert_eq!(inserted.check_links(), 3);
	}

	#[test]
	fn insert_into_empty() {
		let mut list = DoublyLinkedList::new();
		list.begin_mut().insert(1);
		assert_eq!(collect(&list), [1]);
		assert_eq!(list.check_links(), 1);
	}

	#[test]
	fn insert_in_middle_splices() {
		let mut list = DoublyLinkedList::from(vec![1, 3]);
		let mut cursor = list.begin_mut();
		assert!(cursor.advance());
		cursor.insert(2);
		assert_eq!(cursor.current(), Some(&2));
		assert!(cursor.advance());
		assert_eq!(cursor.current(), Some(&3));

		assert_eq!(collect(&list), [1, 2, 3]);
		assert_eq!(list.check_links(), 3);
	}

	#[test]
	fn erase_begin_is_pop_front() {
		let mut erased = DoublyLinkedList::from(vec![1, 2, 3]);
		let mut popped = erased.clone();

		let mut cursor = erased.begin_mut();
		assert_eq!(cursor.erase(), Some(1));
		assert_eq!(cursor.current(), Some(&2));

		popped.pop_front();
		assert_eq!(erased, popped);
		assert_eq!(erased.check_links(), 2);
	}

	#[test]
	fn erase_tail_is_pop_back() {
		let mut erased = DoublyLinkedList::from(vec![1, 2, 3]);
		let mut popped = erased.clone();

		let mut cursor = erased.begin_mut();
		assert!(cursor.advance());
		assert!(cursor.advance());
		assert_eq!(cursor.erase(), Some(3));
		assert!(cursor.is_end());

		popped.pop_back();
		assert_eq!(erased, popped);
		assert_eq!(erased.check_links(), 2);
	}

	#[test]
	fn erase_second_of_two() {
		let mut list = DoublyLinkedList::new();
		list.push_back(1);
		list.push_back(2);

		let mut cursor = list.begin_mut();
		assert!(cursor.advance());
		assert_eq!(cursor.erase(), Some(2));

		assert_eq!(collect(&list), [1]);
		assert_eq!(list.len(), 1);
		assert_eq!(list.check_links(), 1);
	}

	#[test]
	fn erase_at_end_is_noop() {
		let mut list = DoublyLinkedList::from(vec![1, 2]);
		let mut cursor = list.end_mut();
		assert_eq!(cursor.erase(), None);
		assert!(cursor.is_end());
		assert_eq!(collect(&list), [1, 2]);
	}

	#[test]
	fn erase_only_element() {
		let mut list = DoublyLinkedList::from(vec![1]);
		let mut cursor = list.begin_mut();
		assert_eq!(cursor.erase(), Some(1));
		assert!(cursor.is_end());
		assert!(list.is_empty());
		assert_eq!(list.check_links(), 0);
	}

	#[test]
	fn cursors_compare_by_node() {
		let list = DoublyLinkedList::from(vec![1, 1]);
		let mut a = list.begin();
		let b     = list.begin();
		assert_eq!(a, b);

		assert!(a.advance());
		assert_ne!(a, b);
		assert_eq!(unsafe { a.current_unchecked() }, &1);

		assert!(a.advance());
		assert_eq!(a, list.end());
		assert_eq!(format!("{a:?}"), "Cursor(end)");
		assert_eq!(format!("{b:?}"), "Cursor(1)");
	}

	#[test]
	fn default_cursor_is_end() {
		let list = DoublyLinkedList::from(vec![1]);
		let mut cursor = list.begin();
		assert_ne!(cursor, Cursor::default());

		assert!(cursor.advance());
		assert_eq!(cursor, Cursor::default());
		assert_eq!(Cursor::<u8>::default().count(), 0);
	}

	#[test]
	#[should_panic(expected = "Dereferenced the end cursor")]
	fn deref_end_panics() {
		let list = DoublyLinkedList::from(vec![1]);
		let elem: i32 = *list.end();
		assert_eq!(elem, 1);
	}

	#[test]
	fn clone_is_independent() {
		let mut original = DoublyLinkedList::from(vec![1, 2, 3]);
		let mut copy     = original.clone();
		assert_eq!(collect(&copy), collect(&original));

		*copy.front_mut().unwrap() = 10;
		copy.push_back(4);
		assert_eq!(collect(&original), [1, 2, 3]);

		original.pop_front();
		assert_eq!(collect(&copy), [10, 2, 3, 4]);
		assert_eq!(copy.check_links(), 4);
	}

	#[test]
	fn clone_from_replaces_contents() {
		let source   = DoublyLinkedList::from(vec![1, 2]);
		let mut dest = DoublyLinkedList::from(vec![9, 9, 9]);
		dest.clone_from(&source);

		assert_eq!(dest, source);
		assert_eq!(dest.check_links(), 2);
	}

	#[test]
	fn take_leaves_source_empty() {
		let mut source = DoublyLinkedList::from(vec![1, 2, 3]);
		let moved = mem::take(&mut source);

		assert_eq!(collect(&moved), [1, 2, 3]);
		assert!(source.is_empty());
		assert_eq!(source.len(), 0);
		assert_eq!(source.check_links(), 0);
	}

	#[test]
	fn drops_every_element() {
		use std::rc::Rc;

		let counter = Rc::new(());
		let mut list = DoublyLinkedList::new();
		(0..5).for_each(|_| list.push_back(Rc::clone(&counter)));
		assert_eq!(Rc::strong_count(&counter), 6);

		list.begin_mut().erase();
		assert_eq!(Rc::strong_count(&counter), 5);

		drop(list);
		assert_eq!(Rc::strong_count(&counter), 1);
	}

	#[test]
	fn panicking_drop_frees_the_rest() {
		use std::cell::Cell;
		use std::panic::{self, AssertUnwindSafe};
		use std::rc::Rc;

		struct Counted {
			dropped: Rc<Cell<usize>>,
			panics:  bool,
		}

		impl Drop for Counted {
			fn drop(&mut self) {
				self.dropped.set(self.dropped.get() + 1);
				if self.panics { panic!("element drop failed"); }
			}
		}

		let dropped = Rc::new(Cell::new(0));
		let mut list = DoublyLinkedList::new();
		[false, true, false].into_iter().for_each(|panics|
			list.push_back(Counted { dropped: Rc::clone(&dropped), panics }));

		let result = panic::catch_unwind(AssertUnwindSafe(|| drop(list)));
		assert!(result.is_err());
		assert_eq!(dropped.get(), 3);
		assert_eq!(Rc::strong_count(&dropped), 1);
	}

	#[test]
	fn into_iter_drops_remainder() {
		use std::rc::Rc;

		let counter = Rc::new(());
		let list: DoublyLinkedList<_> = (0..3).map(|_| Rc::clone(&counter)).collect();

		let mut iter = list.into_iter();
		assert!(iter.next().is_some());
		drop(iter);
		assert_eq!(Rc::strong_count(&counter), 1);
	}

	#[test]
	fn extend_by_ref() {
		let mut list = DoublyLinkedList::from([1, 2]);
		list.extend(&[3, 4]);
		assert_eq!(collect(&list), [1, 2, 3, 4]);
		assert_eq!(format!("{list:?}"), "[1, 2, 3, 4]");
	}
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
	use std::collections::VecDeque;

	use proptest::prelude::*;
	use proptest::test_runner::Config;
	use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

	use super::*;

	proptest_state_machine::prop_state_machine! {
		#![proptest_config(Config {
			failure_persistence: None,
			.. Config::default()
		})]

		#[test]
		fn list_matches_deque(sequential 1..200 => DoublyLinkedList<u32>);
	}

	#[derive(Clone, Debug)]
	pub enum Transition {
		PushFront(u32),
		PushBack(u32),
		PopFront,
		PopBack,
		/// Insert before the element at this index, or append at `len`.
		Insert(usize, u32),
		/// Erase the element at this index, `len` is the end cursor.
		Erase(usize),
		Clear,
	}

	#[derive(Clone, Debug, Default)]
	pub struct Reference {
		items:  VecDeque<u32>,
		/// Element removed by the last `Erase`, if any.
		erased: Option<u32>,
	}

	pub struct DequeMachine;

	impl ReferenceStateMachine for DequeMachine {
		type State      = Reference;
		type Transition = Transition;

		fn init_state() -> BoxedStrategy<Self::State> {
			Just(Reference::default()).boxed()
		}

		fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
			let len = state.items.len();
			prop_oneof![
				3 => any::<u32>().prop_map(Transition::PushFront),
				3 => any::<u32>().prop_map(Transition::PushBack),
				2 => Just(Transition::PopFront),
				2 => Just(Transition::PopBack),
				3 => (0..=len, any::<u32>()).prop_map(|(at, elem)| Transition::Insert(at, elem)),
				3 => (0..=len).prop_map(Transition::Erase),
				1 => Just(Transition::Clear),
			]
			.boxed()
		}

		fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
			match transition {
				Transition::Insert(at, _) | Transition::Erase(at) => *at <= state.items.len(),
				_ => true,
			}
		}

		fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
			let items = &mut state.items;
			state.erased = None;

			match *transition {
				Transition::PushFront(elem)  => items.push_front(elem),
				Transition::PushBack(elem)   => items.push_back(elem),
				Transition::PopFront         => { items.pop_front(); },
				Transition::PopBack          => { items.pop_back(); },
				Transition::Insert(at, elem) => items.insert(at, elem),
				Transition::Erase(at)        => state.erased = items.remove(at),
				Transition::Clear            => items.clear(),
			}
			state
		}
	}

	fn cursor_at(list: &mut DoublyLinkedList<u32>, at: usize) -> CursorMut<'_, u32> {
		let mut cursor = list.begin_mut();
		(0..at).for_each(|_| assert!(cursor.advance()));
		cursor
	}

	impl StateMachineTest for DoublyLinkedList<u32> {
		type SystemUnderTest = Self;
		type Reference       = DequeMachine;

		fn init_test(
			_ref_state: &<Self::Reference as ReferenceStateMachine>::State,
		) -> Self::SystemUnderTest {
			Self::new()
		}

		fn apply(
			mut state: Self::SystemUnderTest,
			ref_state: &<Self::Reference as ReferenceStateMachine>::State,
			transition: Transition,
		) -> Self::SystemUnderTest {
			match transition {
				Transition::PushFront(elem) => state.push_front(elem),
				Transition::PushBack(elem)  => state.push_back(elem),
				Transition::PopFront        => { state.pop_front(); },
				Transition::PopBack         => { state.pop_back(); },
				Transition::Insert(at, elem) => {
					let mut cursor = cursor_at(&mut state, at);
					cursor.insert(elem);
					assert_eq!(cursor.current(), Some(&elem));
				},
				Transition::Erase(at) => {
					let mut cursor = cursor_at(&mut state, at);
					assert_eq!(cursor.erase(), ref_state.erased);
					// ref_state already has the transition applied
					assert_eq!(cursor.current(), ref_state.items.get(at));
				},
				Transition::Clear => state.clear(),
			}
			state
		}

		fn check_invariants(
			state: &Self::SystemUnderTest,
			ref_state: &<Self::Reference as ReferenceStateMachine>::State,
		) {
			let items = &ref_state.items;
			assert_eq!(state.check_links(), items.len());
			assert_eq!(state.len(), items.len());
			assert_eq!(state.is_empty(), items.is_empty());
			assert_eq!(state.front(), items.front());
			assert_eq!(state.back(), items.back());
			assert!(state.iter().eq(items.iter()));
		}
	}
}
