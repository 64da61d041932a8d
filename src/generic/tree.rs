use crate::{
	error::Error,
	generic::node::{Item, Link, Node},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	fmt,
	iter::FromIterator,
	marker::PhantomData,
	ops::Index,
};

mod ext;
mod handle;
mod iter;
mod join;
mod rebalance;
mod rotate;

pub use ext::*;
pub use handle::*;
pub use iter::*;

/// A map based on an AVL tree.
///
/// Nodes are allocated in a slab of [`Node`]s and link to each other through their slab
/// identifiers, so that rotations and splices are plain identifier reassignments.
/// Every node stores its rank (height label) and the size of its subtree.
///
/// # Basic usage
///
/// ```
/// use avl_slab::{AvlTree, Error};
///
/// let mut tree = AvlTree::new();
///
/// // `insert` returns the number of rebalancing operations it performed.
/// assert_eq!(tree.insert(10, "ten"), Ok(0));
/// assert_eq!(tree.insert(20, "twenty"), Ok(1));
/// assert_eq!(tree.insert(10, "again"), Err(Error::DuplicateKey));
///
/// assert_eq!(tree.get(&20), Some(&"twenty"));
/// assert_eq!(tree.min(), Some(&"ten"));
/// assert_eq!(tree.max(), Some(&"twenty"));
/// assert_eq!(tree.size(), 2);
///
/// assert!(tree.delete(&10).is_ok());
/// assert_eq!(tree.delete(&10), Err(Error::NotFound));
/// assert_eq!(tree.keys_in_order(), [20]);
/// ```
///
/// # Split and join
///
/// ```
/// use avl_slab::AvlTree;
///
/// let mut tree: AvlTree<i64, String> = (1..=7).map(|k| (k, k.to_string())).collect();
/// let (mut left, right) = tree.split(&4).unwrap();
/// assert!(tree.is_empty());
/// assert_eq!(left.keys_in_order(), [1, 2, 3]);
/// assert_eq!(right.keys_in_order(), [5, 6, 7]);
///
/// // join returns `|rank(left) - rank(right)| + 1`.
/// assert_eq!(left.join(4, "4".to_string(), right), 1);
/// assert_eq!(left.keys_in_order(), [1, 2, 3, 4, 5, 6, 7]);
/// ```
///
/// ## Custom allocation
///
/// This data structure is built on top of a slab data structure,
/// but is agnostic of the actual slab implementation which is taken as parameter (`C`).
/// If the `std-slab` feature is enabled,
/// the [`slab::Slab`] implementation is used by default by reexporting
/// `AvlTree<K, V, slab::Slab<_>>` at the root of the crate.
///
/// ## Extended API
///
/// This crate provides the two traits [`AvlTreeExt`] and [`AvlTreeExtMut`] that can be
/// imported to expose low-level operations on [`AvlTree`] (node access, rotations,
/// rebalancing).
#[derive(Clone)]
pub struct AvlTree<K, V, C> {
	/// Allocated nodes.
	nodes: C,

	/// Root node id.
	root: Link,

	/// Id of the node holding the smallest key.
	min: Link,

	/// Id of the node holding the largest key.
	max: Link,

	k: PhantomData<K>,
	v: PhantomData<V>,
}

impl<K, V, C> AvlTree<K, V, C> {
	/// Create a new empty tree.
	#[inline]
	pub fn new() -> AvlTree<K, V, C>
	where
		C: Default,
	{
		AvlTree {
			nodes: Default::default(),
			root: None,
			min: None,
			max: None,
			k: PhantomData,
			v: PhantomData,
		}
	}

	/// Returns `true` if the tree contains no elements.
	///
	/// # Example
	///
	/// ```
	/// use avl_slab::AvlTree;
	///
	/// let mut a = AvlTree::new();
	/// assert!(a.is_empty());
	/// a.insert(1, "a").unwrap();
	/// assert!(!a.is_empty());
	/// ```
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}
}

impl<K, V, C: Slab<Node<K, V>>> AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
{
	/// Returns the number of elements in the tree.
	///
	/// This is the size of the root subtree, `0` if the tree is empty.
	#[inline]
	pub fn size(&self) -> usize {
		self.size_of(self.root)
	}

	/// Same as [`size`](Self::size).
	#[inline]
	pub fn len(&self) -> usize {
		self.size()
	}

	/// Rank of the root, `-1` if the tree is empty.
	#[inline]
	pub fn rank(&self) -> i32 {
		self.rank_of(self.root)
	}

	/// Returns the value corresponding to the key.
	///
	/// # Example
	///
	/// ```
	/// use avl_slab::AvlTree;
	///
	/// let mut tree = AvlTree::new();
	/// tree.insert(1, "a").unwrap();
	/// assert_eq!(tree.get(&1), Some(&"a"));
	/// assert_eq!(tree.get(&2), None);
	/// ```
	#[inline]
	pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.locate(key).ok().map(|id| self.node(id).value())
	}

	/// Returns the key-value pair corresponding to the supplied key.
	#[inline]
	pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.locate(key)
			.ok()
			.map(|id| self.node(id).item().as_pair())
	}

	/// Returns `true` if the tree contains a value for the specified key.
	#[inline]
	pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.locate(key).is_ok()
	}

	/// Value associated to the smallest key.
	#[inline]
	pub fn min(&self) -> Option<&V> {
		self.min.map(|id| self.node(id).value())
	}

	/// Value associated to the largest key.
	#[inline]
	pub fn max(&self) -> Option<&V> {
		self.max.map(|id| self.node(id).value())
	}

	/// Returns the first key-value pair in the tree.
	/// The key in this pair is the minimum key in the tree.
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		self.min.map(|id| self.node(id).item().as_pair())
	}

	/// Returns the last key-value pair in the tree.
	/// The key in this pair is the maximum key in the tree.
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		self.max.map(|id| self.node(id).item().as_pair())
	}

	/// Handle on the root node, `None` if the tree is empty.
	#[inline]
	pub fn root(&self) -> Option<NodeRef<K, V, C>> {
		self.root.map(|id| NodeRef::new(self, id))
	}

	/// Gets an iterator over the entries of the tree, sorted by key.
	#[inline]
	pub fn iter(&self) -> Iter<K, V, C> {
		Iter::new(self)
	}

	/// Gets an iterator over the keys of the tree, in sorted order.
	#[inline]
	pub fn keys(&self) -> Keys<K, V, C> {
		Keys { inner: self.iter() }
	}

	/// Gets an iterator over the values of the tree, in order by key.
	#[inline]
	pub fn values(&self) -> Values<K, V, C> {
		Values { inner: self.iter() }
	}

	/// Collects the keys in ascending order.
	#[inline]
	pub fn keys_in_order(&self) -> Vec<K>
	where
		K: Clone,
	{
		self.keys().cloned().collect()
	}

	/// Collects the values, ordered by their associated key.
	#[inline]
	pub fn values_in_order(&self) -> Vec<V>
	where
		V: Clone,
	{
		self.values().cloned().collect()
	}

	/// Write the tree in the DOT graph descrption language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		if let Some(id) = self.root {
			self.dot_write_node(f, id)?
		}
		write!(f, "}}")
	}

	/// Write the given node in the DOT graph descrption language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	fn dot_write_node<W: std::io::Write>(&self, f: &mut W, id: usize) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		let name = format!("n{}", id);
		let node = self.node(id);

		write!(f, "\t{} [label=\"", name)?;
		node.dot_write_label(f)?;
		writeln!(f, "|({})\"];", id)?;

		for child_id in node.children() {
			self.dot_write_node(f, child_id)?;
			writeln!(f, "\t{} -> n{}", name, child_id)?;
		}

		Ok(())
	}
}

impl<K, V, C: SlabMut<Node<K, V>>> AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the tree, removing all elements.
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.root = None;
		self.min = None;
		self.max = None;
		self.nodes.clear()
	}

	/// Returns a mutable reference to the value corresponding to the key.
	#[inline]
	pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		match self.locate(key) {
			Ok(id) => Some(self.node_mut(id).item_mut().value_mut()),
			Err(_) => None,
		}
	}

	/// Inserts a key-value pair.
	///
	/// Returns the number of rebalancing operations (promotions and rotations) performed to
	/// restore the balance of the tree, or [`Error::DuplicateKey`] if the key is already present,
	/// in which case the tree is left unchanged.
	///
	/// # Example
	///
	/// ```
	/// use avl_slab::{AvlTree, Error};
	///
	/// let mut tree = AvlTree::new();
	/// assert_eq!(tree.insert(10, "a"), Ok(0));
	/// assert_eq!(tree.insert(20, "b"), Ok(1));
	/// // promotion of 20, then single rotation at 10.
	/// assert_eq!(tree.insert(30, "c"), Ok(3));
	/// assert_eq!(tree.insert(30, "d"), Err(Error::DuplicateKey));
	/// assert_eq!(tree.root().map(|root| *root.key()), Some(20));
	/// ```
	pub fn insert(&mut self, key: K, value: V) -> Result<usize, Error>
	where
		K: Ord,
	{
		match self.locate(&key) {
			Ok(_) => Err(Error::DuplicateKey),
			Err(parent) => {
				let (_, cost) = self.insert_at(parent, Item::new(key, value));
				Ok(cost)
			}
		}
	}

	/// Removes the given key from the tree.
	///
	/// Returns the number of rebalancing operations (demotions and rotations) performed to
	/// restore the balance of the tree, or [`Error::NotFound`] if the key is absent,
	/// in which case the tree is left unchanged.
	///
	/// # Example
	///
	/// ```
	/// use avl_slab::{AvlTree, Error};
	///
	/// let mut tree = AvlTree::new();
	/// for key in [20, 10, 30, 5] {
	///     tree.insert(key, ()).unwrap();
	/// }
	///
	/// // the root drops to rank 1.
	/// assert_eq!(tree.delete(&10), Ok(1));
	/// assert_eq!(tree.delete(&10), Err(Error::NotFound));
	/// ```
	pub fn delete<Q: ?Sized>(&mut self, key: &Q) -> Result<usize, Error>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		match self.locate(key) {
			Ok(id) => {
				let (_, cost) = self.remove_at(id);
				Ok(cost)
			}
			Err(_) => Err(Error::NotFound),
		}
	}

	/// Removes a key from the tree, returning the value at the key if the key was previously in
	/// the tree.
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		match self.locate(key) {
			Ok(id) => {
				let (item, _) = self.remove_at(id);
				Some(item.into_value())
			}
			Err(_) => None,
		}
	}
}

impl<K, V, C: Default> Default for AvlTree<K, V, C> {
	#[inline]
	fn default() -> Self {
		AvlTree::new()
	}
}

impl<K: Ord, Q: ?Sized, V, C: Slab<Node<K, V>>> Index<&Q> for AvlTree<K, V, C>
where
	K: Borrow<Q>,
	Q: Ord,
	C: SimpleCollectionRef,
{
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is not present in the tree.
	#[inline]
	fn index(&self, key: &Q) -> &V {
		self.get(key).expect("no entry found for key")
	}
}

impl<K: fmt::Debug, V: fmt::Debug, C: Slab<Node<K, V>>> fmt::Debug for AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: PartialEq, V: PartialEq, C: Slab<Node<K, V>>> PartialEq for AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
{
	fn eq(&self, other: &Self) -> bool {
		self.size() == other.size() && self.iter().eq(other.iter())
	}
}

impl<K: Eq, V: Eq, C: Slab<Node<K, V>>> Eq for AvlTree<K, V, C> where C: SimpleCollectionRef {}

/// Builds a tree from key-value pairs.
///
/// When a key appears more than once, the first occurrence is kept.
impl<K: Ord, V, C: SlabMut<Node<K, V>> + Default> FromIterator<(K, V)> for AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<T>(iter: T) -> AvlTree<K, V, C>
	where
		T: IntoIterator<Item = (K, V)>,
	{
		let mut tree = AvlTree::new();
		tree.extend(iter);
		tree
	}
}

/// Inserts every pair whose key is not already present.
impl<K: Ord, V, C: SlabMut<Node<K, V>>> Extend<(K, V)> for AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			// Keys already present keep their value.
			let _ = self.insert(key, value);
		}
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>> IntoIterator for &'a AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = Iter<'a, K, V, C>;
	type Item = (&'a K, &'a V);

	#[inline]
	fn into_iter(self) -> Iter<'a, K, V, C> {
		self.iter()
	}
}

