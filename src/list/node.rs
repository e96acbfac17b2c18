use std::ptr::NonNull;

/// The list owns every node through the forward chain; `prev` never frees.
pub struct Node<T> {
	pub next: Option<NonNull<Node<T>>>,
	pub prev: Option<NonNull<Node<T>>>,
	pub elem: T,
}

impl<T> Node<T> {
	pub fn new_nonnull(elem: T, prev: Option<NonNull<Self>>, next: Option<NonNull<Self>>) -> NonNull<Self> {
		unsafe {
			NonNull::new_unchecked(Box::into_raw(Box::new(Self {
				next,
				prev,
				elem,
			})))
		}
	}

	/// Free a detached node, handing back its element.
	///
	/// # Safety
	/// `node` must come from `new_nonnull`, be unlinked from its list,
	/// and not be freed twice.
	#[inline]
	pub unsafe fn into_elem(node: NonNull<Self>) -> T {
		Box::from_raw(node.as_ptr()).elem
	}
}
