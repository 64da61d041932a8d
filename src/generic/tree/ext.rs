use crate::generic::{
	node::{Item, Link, Node, Pattern, Side, EXTERNAL_RANK},
	AvlTree,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{borrow::Borrow, cmp::Ordering};

/// Extension methods.
///
/// This trait can be imported to access the internal methods of the AVL tree.
/// These methods are not intended to be directly called by users, but can be used to
/// extend the data structure with new functionalities.
pub trait AvlTreeExt<K, V> {
	/// Get the root node id.
	///
	/// Returns `None` if the tree is empty.
	fn root_id(&self) -> Link;

	/// Id of the node holding the smallest key.
	fn min_id(&self) -> Link;

	/// Id of the node holding the largest key.
	fn max_id(&self) -> Link;

	/// Get the node associated to the given `id`.
	///
	/// Panics if `id` is out of bounds.
	fn node(&self, id: usize) -> &Node<K, V>;

	/// Rank of a link: the node rank, or `-1` for the external sentinel.
	fn rank_of(&self, link: Link) -> i32;

	/// Size of a link: the subtree size, or `0` for the external sentinel.
	fn size_of(&self, link: Link) -> usize;

	/// Rank-difference pattern of the given node.
	fn pattern(&self, id: usize) -> Pattern;

	/// Find the node holding `key`.
	///
	/// Returns `Ok(id)` on an exact match.
	/// Otherwise returns `Err(parent)` where `parent` is the last real node visited,
	/// under which `key` would be inserted (`Err(None)` if the tree is empty).
	fn locate<Q: ?Sized>(&self, key: &Q) -> Result<usize, Link>
	where
		K: Borrow<Q>,
		Q: Ord;

	/// Side by which `id` hangs from its parent, with the parent id.
	///
	/// Returns `None` for the root.
	fn parent_side(&self, id: usize) -> Option<(usize, Side)>;

	/// Left-most node of the subtree rooted at `id`.
	fn first_in(&self, id: usize) -> usize;

	/// Right-most node of the subtree rooted at `id`.
	fn last_in(&self, id: usize) -> usize;

	/// In-order successor of `id`.
	fn successor(&self, id: usize) -> Link;

	/// In-order predecessor of `id`.
	///
	/// This is the right-most node of the left subtree if any,
	/// otherwise the nearest ancestor of which `id` is a right descendant.
	fn predecessor(&self, id: usize) -> Link;

	/// Validate the tree.
	///
	/// Panics if the tree is not a valid AVL tree.
	fn validate(&self)
	where
		K: Ord;

	/// Validate the subtree rooted at `id` and returns its rank and size.
	///
	/// Panics if the subtree is not a valid AVL tree.
	fn validate_node(&self, id: usize, parent: Link, min: Option<&K>, max: Option<&K>) -> (i32, usize)
	where
		K: Ord;
}

pub trait AvlTreeExtMut<K, V> {
	fn set_root_id(&mut self, id: Link);

	/// Get the node associated to the given `id` mutabily.
	///
	/// Panics if `id` is out of bounds.
	fn node_mut(&mut self, id: usize) -> &mut Node<K, V>;

	/// Allocate a free identifier for the given node.
	fn allocate_node(&mut self, node: Node<K, V>) -> usize;

	/// Release the given node identifier and return the node it used to identify.
	fn release_node(&mut self, id: usize) -> Node<K, V>;

	/// Put `new` in the slot `old` occupied under `parent`, or at the root if `parent` is `None`.
	///
	/// The parent link of `new` is updated as well.
	fn replace_child(&mut self, parent: Link, old: usize, new: Link);

	/// Add `delta` to the size of `from` and of all its ancestors.
	fn grow_path(&mut self, from: Link, delta: usize);

	/// Subtract `delta` from the size of `from` and of all its ancestors.
	fn shrink_path(&mut self, from: Link, delta: usize);

	/// Rotate the subtree rooted at `id` to the left.
	///
	/// The right child of `id` takes its place. Panics if `id` has no right child.
	fn rotate_left(&mut self, id: usize);

	/// Rotate the subtree rooted at `id` to the right.
	///
	/// The left child of `id` takes its place. Panics if `id` has no left child.
	fn rotate_right(&mut self, id: usize);

	/// Restore the rank invariant after a subtree under `from` grew,
	/// walking up from `from` toward the root.
	///
	/// Returns the number of rebalancing operations.
	fn rebalance_after_insert(&mut self, from: Link) -> usize;

	/// Restore the rank invariant after a subtree under `from` shrank,
	/// walking up from `from` toward the root.
	///
	/// Returns the number of rebalancing operations.
	fn rebalance_after_delete(&mut self, from: Link) -> usize;

	/// Attach a new leaf holding `item` under `parent`.
	///
	/// `parent` must be the result of a failed [`AvlTreeExt::locate`] for the item key.
	/// Returns the id of the new node and the number of rebalancing operations.
	fn insert_at(&mut self, parent: Link, item: Item<K, V>) -> (usize, usize)
	where
		K: Ord;

	/// Remove the item held by the node `id`.
	///
	/// Returns the removed item and the number of rebalancing operations.
	fn remove_at(&mut self, id: usize) -> (Item<K, V>, usize);
}

impl<K, V, C: Slab<Node<K, V>>> AvlTreeExt<K, V> for AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn root_id(&self) -> Link {
		self.root
	}

	#[inline]
	fn min_id(&self) -> Link {
		self.min
	}

	#[inline]
	fn max_id(&self) -> Link {
		self.max
	}

	#[inline]
	fn node(&self, id: usize) -> &Node<K, V> {
		C::into_ref(self.nodes.get(id).unwrap())
	}

	#[inline]
	fn rank_of(&self, link: Link) -> i32 {
		match link {
			Some(id) => self.node(id).rank(),
			None => EXTERNAL_RANK,
		}
	}

	#[inline]
	fn size_of(&self, link: Link) -> usize {
		match link {
			Some(id) => self.node(id).size(),
			None => 0,
		}
	}

	#[inline]
	fn pattern(&self, id: usize) -> Pattern {
		let node = self.node(id);
		Pattern::new(
			node.rank() - self.rank_of(node.left()),
			node.rank() - self.rank_of(node.right()),
		)
	}

	fn locate<Q: ?Sized>(&self, key: &Q) -> Result<usize, Link>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let mut parent = None;
		let mut current = self.root;

		while let Some(id) = current {
			let node = self.node(id);
			parent = Some(id);
			current = match key.cmp(node.key().borrow()) {
				Ordering::Equal => return Ok(id),
				Ordering::Less => node.left(),
				Ordering::Greater => node.right(),
			}
		}

		Err(parent)
	}

	#[inline]
	fn parent_side(&self, id: usize) -> Option<(usize, Side)> {
		self.node(id).parent().map(|parent_id| {
			let side = self
				.node(parent_id)
				.side_of(id)
				.expect("corrupted parent link");
			(parent_id, side)
		})
	}

	#[inline]
	fn first_in(&self, mut id: usize) -> usize {
		while let Some(left_id) = self.node(id).left() {
			id = left_id
		}

		id
	}

	#[inline]
	fn last_in(&self, mut id: usize) -> usize {
		while let Some(right_id) = self.node(id).right() {
			id = right_id
		}

		id
	}

	fn successor(&self, id: usize) -> Link {
		match self.node(id).right() {
			Some(right_id) => Some(self.first_in(right_id)),
			None => {
				let mut id = id;
				while let Some((parent_id, side)) = self.parent_side(id) {
					if side == Side::Left {
						return Some(parent_id);
					}

					id = parent_id
				}

				None
			}
		}
	}

	fn predecessor(&self, id: usize) -> Link {
		match self.node(id).left() {
			Some(left_id) => Some(self.last_in(left_id)),
			None => {
				let mut id = id;
				while let Some((parent_id, side)) = self.parent_side(id) {
					if side == Side::Right {
						return Some(parent_id);
					}

					id = parent_id
				}

				None
			}
		}
	}

	fn validate(&self)
	where
		K: Ord,
	{
		match self.root {
			Some(id) => {
				self.validate_node(id, None, None, None);

				if self.min != Some(self.first_in(id)) {
					panic!("cached minimum is not the left-most node")
				}

				if self.max != Some(self.last_in(id)) {
					panic!("cached maximum is not the right-most node")
				}
			}
			None => {
				if self.min.is_some() || self.max.is_some() {
					panic!("empty tree with cached extrema")
				}
			}
		}
	}

	fn validate_node(&self, id: usize, parent: Link, min: Option<&K>, max: Option<&K>) -> (i32, usize)
	where
		K: Ord,
	{
		let node = self.node(id);

		if node.parent() != parent {
			panic!("wrong parent")
		}

		if let Some(min) = min {
			if node.key() <= min {
				panic!("keys are not sorted")
			}
		}

		if let Some(max) = max {
			if node.key() >= max {
				panic!("keys are not sorted")
			}
		}

		let (left_rank, left_size) = match node.left() {
			Some(left_id) => self.validate_node(left_id, Some(id), min, Some(node.key())),
			None => (EXTERNAL_RANK, 0),
		};

		let (right_rank, right_size) = match node.right() {
			Some(right_id) => self.validate_node(right_id, Some(id), Some(node.key()), max),
			None => (EXTERNAL_RANK, 0),
		};

		if node.rank() != 1 + std::cmp::max(left_rank, right_rank) {
			panic!("wrong rank")
		}

		if (left_rank - right_rank).abs() > 1 {
			panic!("tree not balanced")
		}

		if node.size() != 1 + left_size + right_size {
			panic!("wrong size")
		}

		(node.rank(), node.size())
	}
}

impl<K, V, C: SlabMut<Node<K, V>>> AvlTreeExtMut<K, V> for AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn set_root_id(&mut self, id: Link) {
		self.root = id
	}

	#[inline]
	fn node_mut(&mut self, id: usize) -> &mut Node<K, V> {
		C::into_mut(self.nodes.get_mut(id).unwrap())
	}

	#[inline]
	fn allocate_node(&mut self, node: Node<K, V>) -> usize {
		self.nodes.insert(node)
	}

	#[inline]
	fn release_node(&mut self, id: usize) -> Node<K, V> {
		self.nodes.remove(id).unwrap()
	}

	#[inline]
	fn replace_child(&mut self, parent: Link, old: usize, new: Link) {
		match parent {
			Some(parent_id) => {
				let parent_node = self.node_mut(parent_id);
				let side = parent_node.side_of(old).expect("not a child of the given parent");
				parent_node.set_child(side, new)
			}
			None => self.root = new,
		}

		if let Some(new_id) = new {
			self.node_mut(new_id).set_parent(parent)
		}
	}

	#[inline]
	fn grow_path(&mut self, mut from: Link, delta: usize) {
		while let Some(id) = from {
			let node = self.node_mut(id);
			node.set_size(node.size() + delta);
			from = node.parent()
		}
	}

	#[inline]
	fn shrink_path(&mut self, mut from: Link, delta: usize) {
		while let Some(id) = from {
			let node = self.node_mut(id);
			node.set_size(node.size() - delta);
			from = node.parent()
		}
	}

	#[inline]
	fn rotate_left(&mut self, id: usize) {
		self.rotate(id, Side::Left)
	}

	#[inline]
	fn rotate_right(&mut self, id: usize) {
		self.rotate(id, Side::Right)
	}

	#[inline]
	fn rebalance_after_insert(&mut self, from: Link) -> usize {
		self.fix_after_growth(from)
	}

	#[inline]
	fn rebalance_after_delete(&mut self, from: Link) -> usize {
		self.fix_after_shrink(from)
	}

	fn insert_at(&mut self, parent: Link, item: Item<K, V>) -> (usize, usize)
	where
		K: Ord,
	{
		let is_new_min = match self.min {
			Some(min_id) => item.key() < self.node(min_id).key(),
			None => true,
		};

		let is_new_max = match self.max {
			Some(max_id) => item.key() > self.node(max_id).key(),
			None => true,
		};

		let side = parent.map(|parent_id| {
			if item.key() < self.node(parent_id).key() {
				Side::Left
			} else {
				Side::Right
			}
		});

		let id = self.allocate_node(Node::leaf(parent, item));

		match (parent, side) {
			(Some(parent_id), Some(side)) => {
				debug_assert!(self.node(parent_id).child(side).is_none());
				self.node_mut(parent_id).set_child(side, Some(id))
			}
			_ => self.root = Some(id),
		}

		if is_new_min {
			self.min = Some(id)
		}

		if is_new_max {
			self.max = Some(id)
		}

		self.grow_path(parent, 1);
		let cost = self.rebalance_after_insert(parent);
		(id, cost)
	}

	fn remove_at(&mut self, id: usize) -> (Item<K, V>, usize) {
		let new_min = if self.min == Some(id) {
			self.successor(id)
		} else {
			self.min
		};

		let mut new_max = if self.max == Some(id) {
			self.predecessor(id)
		} else {
			self.max
		};

		// An internal node keeps its slot: it receives the item of its in-order successor,
		// whose slot is removed instead. The successor has no left child.
		let target = match (self.node(id).left(), self.node(id).right()) {
			(Some(_), Some(right_id)) => {
				let successor_id = self.first_in(right_id);

				if new_max == Some(successor_id) {
					new_max = Some(id)
				}

				successor_id
			}
			_ => id,
		};

		let (parent, child) = {
			let node = self.node(target);
			(node.parent(), node.left().or(node.right()))
		};

		self.replace_child(parent, target, child);
		let mut item = self.release_node(target).into_item();
		if target != id {
			std::mem::swap(self.node_mut(id).item_mut(), &mut item);
		}

		self.min = new_min;
		self.max = new_max;

		self.shrink_path(parent, 1);
		let cost = self.rebalance_after_delete(parent);
		(item, cost)
	}
}
