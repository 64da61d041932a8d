use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod item;
mod side;

pub use item::Item;
pub use side::Side;

/// Reference to a child slot.
///
/// `None` is the external sentinel: it has rank `-1`, size `0`, no item, and is the child of
/// every leaf. Since it carries no identity it is never shared between trees.
pub type Link = Option<usize>;

/// Rank of the external sentinel.
pub const EXTERNAL_RANK: i32 = -1;

/// Rank-difference pattern of a node.
///
/// The pair `(rank(node) - rank(left), rank(node) - rank(right))` used to select a
/// rebalancing action.
/// A node satisfying the AVL invariant has pattern `(1, 1)`, `(1, 2)` or `(2, 1)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
	pub left: i32,
	pub right: i32,
}

impl Pattern {
	#[inline]
	pub fn new(left: i32, right: i32) -> Pattern {
		Pattern { left, right }
	}

	/// Rank difference on the given side.
	#[inline]
	pub fn on(&self, side: Side) -> i32 {
		match side {
			Side::Left => self.left,
			Side::Right => self.right,
		}
	}

	#[inline]
	pub fn as_tuple(&self) -> (i32, i32) {
		(self.left, self.right)
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "({},{})", self.left, self.right)
	}
}

impl fmt::Debug for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

/// AVL tree node.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Node<K, V> {
	item: Item<K, V>,

	/// Height label of the node.
	rank: i32,

	/// Number of real nodes in the subtree rooted here, including this one.
	size: usize,

	parent: Link,
	left: Link,
	right: Link,
}

impl<K, V> Node<K, V> {
	/// Creates a new leaf: rank 0, size 1, both children external.
	#[inline]
	pub fn leaf(parent: Link, item: Item<K, V>) -> Node<K, V> {
		Node {
			item,
			rank: 0,
			size: 1,
			parent,
			left: None,
			right: None,
		}
	}

	/// Creates a detached node from its parts.
	///
	/// Rank and size are not checked against the children.
	#[inline]
	pub fn from_parts(item: Item<K, V>, rank: i32, size: usize, left: Link, right: Link) -> Node<K, V> {
		Node {
			item,
			rank,
			size,
			parent: None,
			left,
			right,
		}
	}

	#[inline]
	pub fn item(&self) -> &Item<K, V> {
		&self.item
	}

	#[inline]
	pub fn item_mut(&mut self) -> &mut Item<K, V> {
		&mut self.item
	}

	#[inline]
	pub fn into_item(self) -> Item<K, V> {
		self.item
	}

	#[inline]
	pub fn key(&self) -> &K {
		self.item.key()
	}

	#[inline]
	pub fn value(&self) -> &V {
		self.item.value()
	}

	#[inline]
	pub fn rank(&self) -> i32 {
		self.rank
	}

	#[inline]
	pub fn promote(&mut self) {
		self.rank += 1
	}

	#[inline]
	pub fn demote(&mut self) {
		self.rank -= 1
	}

	#[inline]
	pub fn size(&self) -> usize {
		self.size
	}

	#[inline]
	pub fn set_size(&mut self, size: usize) {
		self.size = size
	}

	#[inline]
	pub fn parent(&self) -> Link {
		self.parent
	}

	#[inline]
	pub fn set_parent(&mut self, p: Link) {
		self.parent = p
	}

	#[inline]
	pub fn left(&self) -> Link {
		self.left
	}

	#[inline]
	pub fn right(&self) -> Link {
		self.right
	}

	#[inline]
	pub fn child(&self, side: Side) -> Link {
		match side {
			Side::Left => self.left,
			Side::Right => self.right,
		}
	}

	#[inline]
	pub fn set_child(&mut self, side: Side, child: Link) {
		match side {
			Side::Left => self.left = child,
			Side::Right => self.right = child,
		}
	}

	/// Returns the side on which `id` is attached to this node, if it is a child of it.
	#[inline]
	pub fn side_of(&self, id: usize) -> Option<Side> {
		if self.left == Some(id) {
			Some(Side::Left)
		} else if self.right == Some(id) {
			Some(Side::Right)
		} else {
			None
		}
	}

	#[inline]
	pub fn is_leaf(&self) -> bool {
		self.left.is_none() && self.right.is_none()
	}

	#[inline]
	pub fn children(&self) -> impl Iterator<Item = usize> {
		self.left.into_iter().chain(self.right)
	}

	/// Write the label of the node in the DOT format.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(
			f,
			"{}|{}|r{}|s{}",
			self.item.key(),
			self.item.value(),
			self.rank,
			self.size
		)
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Node")
			.field("item", &self.item)
			.field("rank", &self.rank)
			.field("size", &self.size)
			.field("parent", &self.parent)
			.field("left", &self.left)
			.field("right", &self.right)
			.finish()
	}
}
