use crate::{
	error::Error,
	generic::{
		node::{Item, Link, Node, Side},
		AvlTree, AvlTreeExt, AvlTreeExtMut,
	},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, SlabMut};
use log::debug;
use smallvec::SmallVec;
use std::{borrow::Borrow, cmp::max};

/// Absolute difference between two ranks.
#[inline]
pub(crate) fn rank_gap(a: i32, b: i32) -> usize {
	(a - b).abs() as usize
}

impl<K, V, C: SlabMut<Node<K, V>>> AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Joins `self`, the separator entry `(key, value)` and `other` into `self`.
	///
	/// Every key of one of the two trees must be smaller than `key`,
	/// and every key of the other tree must be greater.
	/// `other` may be on either side of `self`.
	///
	/// Returns `|rank(self) - rank(other)| + 1`, the rank of an empty tree being `-1`.
	///
	/// # Complexity
	///
	/// Each tree owns its slab, so the nodes of the smaller tree are moved one by one into
	/// the slab of the larger tree: `O(min(n, m))` where `n` and `m` are the sizes of the
	/// two trees. Linking the separator and rebalancing is then `O(|rank(self) - rank(other)|)`.
	///
	/// # Panics
	///
	/// Panics if the key ranges of the two trees and the separator overlap.
	///
	/// # Example
	///
	/// ```
	/// use avl_slab::AvlTree;
	///
	/// let mut high: AvlTree<i32, ()> = (10..20).map(|k| (k, ())).collect();
	/// let low: AvlTree<i32, ()> = (0..3).map(|k| (k, ())).collect();
	///
	/// assert_eq!(high.join(5, (), low), 3);
	/// assert_eq!(high.len(), 14);
	/// assert_eq!(high.first_key_value(), Some((&0, &())));
	/// ```
	pub fn join(&mut self, key: K, value: V, mut other: Self) -> usize
	where
		K: Ord,
	{
		let cost = rank_gap(self.rank(), other.rank()) + 1;

		let mut other_side = match (self.first_key_value(), other.first_key_value()) {
			(_, Some((other_min, _))) => {
				if key < *other_min {
					Side::Right
				} else {
					Side::Left
				}
			}
			(Some((min, _)), None) => {
				if key < *min {
					Side::Left
				} else {
					Side::Right
				}
			}
			(None, None) => Side::Right,
		};

		{
			let (low, high) = match other_side {
				Side::Right => (&*self, &other),
				Side::Left => (&other, &*self),
			};

			if let Some((low_max, _)) = low.last_key_value() {
				assert!(*low_max < key, "joined trees overlap")
			}

			if let Some((high_min, _)) = high.first_key_value() {
				assert!(key < *high_min, "joined trees overlap")
			}
		}

		// Only the nodes of the smaller tree are moved.
		if other.size() > self.size() {
			std::mem::swap(self, &mut other);
			other_side = other_side.opposite()
		}

		if other.is_empty() {
			if let Err(parent) = self.locate(&key) {
				self.insert_at(parent, Item::new(key, value));
			}

			return cost;
		}

		let other_root = self.adopt(&mut other.nodes, other.root, None);
		let (low, high) = match other_side {
			Side::Right => (self.root, other_root),
			Side::Left => (other_root, self.root),
		};

		self.link(low, Item::new(key, value), high);
		debug!("joined {} nodes with cost {}", self.size(), cost);
		cost
	}

	/// Splits the tree around `key`.
	///
	/// Returns the tree of the keys smaller than `key` and the tree of the keys greater than
	/// `key`. The entry of `key` itself is dropped and `self` is left empty.
	///
	/// Returns [`Error::NotFound`] if `key` is not in the tree, in which case the tree is left
	/// unchanged.
	///
	/// # Complexity
	///
	/// Every node is moved into the slab of one of the two resulting trees,
	/// so a split is `O(n)` in the size of the tree.
	///
	/// # Example
	///
	/// ```
	/// use avl_slab::{AvlTree, Error};
	///
	/// let mut tree: AvlTree<i32, char> = vec![(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
	/// assert!(matches!(tree.split(&4), Err(Error::NotFound)));
	/// assert_eq!(tree.len(), 3);
	///
	/// let (left, right) = tree.split(&2).unwrap();
	/// assert_eq!(left.values_in_order(), ['a']);
	/// assert_eq!(right.values_in_order(), ['c']);
	/// ```
	pub fn split<Q: ?Sized>(&mut self, key: &Q) -> Result<(Self, Self), Error>
	where
		K: Borrow<Q> + Ord,
		Q: Ord,
		C: Default,
	{
		let id = self.locate(key).map_err(|_| Error::NotFound)?;

		let mut path: SmallVec<[(usize, Side); 32]> = SmallVec::new();
		let mut current = id;
		while let Some((parent_id, side)) = self.parent_side(current) {
			path.push((parent_id, side));
			current = parent_id
		}

		let mut source = std::mem::take(self);
		let node = source.release_node(id);
		let mut left = Self::adopted(&mut source.nodes, node.left());
		let mut right = Self::adopted(&mut source.nodes, node.right());

		for (ancestor_id, side) in path {
			let ancestor = source.release_node(ancestor_id);
			let tree = Self::adopted(&mut source.nodes, ancestor.child(side.opposite()));
			let (key, value) = ancestor.into_item().into_pair();

			match side {
				Side::Left => right.join(key, value, tree),
				Side::Right => left.join(key, value, tree),
			};
		}

		debug!("split into {} and {} nodes", left.size(), right.size());
		Ok((left, right))
	}

	/// Builds a new tree out of the subtree rooted at `link` in `source`.
	fn adopted(source: &mut C, link: Link) -> Self
	where
		C: Default,
	{
		let mut tree = Self::new();
		tree.root = tree.adopt(source, link, None);
		tree.reset_extrema();
		tree
	}

	/// Moves the subtree rooted at `link` in `source` into this tree's slab.
	///
	/// Ranks and sizes are preserved. Returns the new id of the subtree root.
	fn adopt(&mut self, source: &mut C, link: Link, parent: Link) -> Link {
		let old_id = link?;
		let node = source.remove(old_id).unwrap();
		let (rank, size, left, right) = (node.rank(), node.size(), node.left(), node.right());

		let id = self.allocate_node(Node::from_parts(node.into_item(), rank, size, None, None));
		self.node_mut(id).set_parent(parent);

		let left = self.adopt(source, left, Some(id));
		let right = self.adopt(source, right, Some(id));
		let node = self.node_mut(id);
		node.set_child(Side::Left, left);
		node.set_child(Side::Right, right);

		Some(id)
	}

	/// Links the two non-empty subtrees `low` and `high` of this tree's slab with a new node
	/// holding `item`, every key of `low` being smaller than the item key,
	/// and every key of `high` greater.
	///
	/// The taller subtree is descended along its spine facing the other one.
	fn link(&mut self, low: Link, item: Item<K, V>, high: Link) {
		let (tall, short, spine) = if self.rank_of(low) >= self.rank_of(high) {
			(low, high, Side::Right)
		} else {
			(high, low, Side::Left)
		};

		let short_rank = self.rank_of(short);
		let mut parent = None;
		let mut current = tall;
		while self.rank_of(current) > short_rank {
			parent = current;
			current = current.and_then(|id| self.node(id).child(spine))
		}

		let rank = 1 + max(self.rank_of(current), short_rank);
		let size = 1 + self.size_of(current) + self.size_of(short);
		let (left, right) = match spine {
			Side::Right => (current, short),
			Side::Left => (short, current),
		};

		let id = self.allocate_node(Node::from_parts(item, rank, size, left, right));
		self.node_mut(id).set_parent(parent);
		for &child_id in [left, right].iter().flatten() {
			self.node_mut(child_id).set_parent(Some(id))
		}

		match parent {
			Some(parent_id) => {
				self.node_mut(parent_id).set_child(spine, Some(id));
				self.root = tall
			}
			None => self.root = Some(id),
		}

		let delta = 1 + self.size_of(short);
		self.grow_path(parent, delta);
		self.rebalance_after_insert(parent);
		self.reset_extrema()
	}

	#[inline]
	fn reset_extrema(&mut self) {
		self.min = self.root.map(|id| self.first_in(id));
		self.max = self.root.map(|id| self.last_in(id));
	}
}
