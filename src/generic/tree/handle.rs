use crate::generic::{
	node::{Link, Node},
	AvlTree, AvlTreeExt,
};
use cc_traits::{SimpleCollectionRef, Slab};
use std::fmt;

/// Read-only handle on a node of an [`AvlTree`].
///
/// Obtained with [`AvlTree::root`] and navigated with [`left`](NodeRef::left),
/// [`right`](NodeRef::right) and [`parent`](NodeRef::parent).
/// External children are represented by `None`.
///
/// # Example
///
/// ```
/// use avl_slab::AvlTree;
///
/// let tree: AvlTree<i64, &str> = vec![(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
/// let root = tree.root().unwrap();
/// assert_eq!(*root.key(), 2);
/// assert_eq!(root.rank(), 1);
/// assert_eq!(root.size(), 3);
///
/// let left = root.left().unwrap();
/// assert_eq!(*left.value(), "a");
/// assert!(left.is_leaf());
/// assert_eq!(left.parent().map(|p| *p.key()), Some(2));
/// ```
pub struct NodeRef<'a, K, V, C> {
	tree: &'a AvlTree<K, V, C>,
	id: usize,
}

impl<'a, K, V, C> Clone for NodeRef<'a, K, V, C> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, K, V, C> Copy for NodeRef<'a, K, V, C> {}

impl<'a, K, V, C: Slab<Node<K, V>>> NodeRef<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub(crate) fn new(tree: &'a AvlTree<K, V, C>, id: usize) -> Self {
		NodeRef { tree, id }
	}

	#[inline]
	fn wrap(&self, link: Link) -> Option<NodeRef<'a, K, V, C>> {
		link.map(|id| NodeRef::new(self.tree, id))
	}

	#[inline]
	fn node(&self) -> &'a Node<K, V> {
		self.tree.node(self.id)
	}

	/// Slab identifier of the node.
	#[inline]
	pub fn id(&self) -> usize {
		self.id
	}

	#[inline]
	pub fn key(&self) -> &'a K {
		self.node().key()
	}

	#[inline]
	pub fn value(&self) -> &'a V {
		self.node().value()
	}

	/// Height label of the node. `0` for a leaf.
	#[inline]
	pub fn rank(&self) -> i32 {
		self.node().rank()
	}

	/// Number of nodes in the subtree rooted at this node.
	#[inline]
	pub fn size(&self) -> usize {
		self.node().size()
	}

	#[inline]
	pub fn left(&self) -> Option<NodeRef<'a, K, V, C>> {
		self.wrap(self.node().left())
	}

	#[inline]
	pub fn right(&self) -> Option<NodeRef<'a, K, V, C>> {
		self.wrap(self.node().right())
	}

	#[inline]
	pub fn parent(&self) -> Option<NodeRef<'a, K, V, C>> {
		self.wrap(self.node().parent())
	}

	#[inline]
	pub fn is_root(&self) -> bool {
		self.node().parent().is_none()
	}

	#[inline]
	pub fn is_leaf(&self) -> bool {
		self.node().is_leaf()
	}
}

impl<'a, K: fmt::Debug, V: fmt::Debug, C: Slab<Node<K, V>>> fmt::Debug for NodeRef<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "@{} {:?} (rank {}, size {})", self.id, self.node().item(), self.rank(), self.size())
	}
}
