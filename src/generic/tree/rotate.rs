use crate::generic::{
	node::{Node, Side},
	AvlTree, AvlTreeExt, AvlTreeExtMut,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, SlabMut};

impl<K, V, C: SlabMut<Node<K, V>>> AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Rotate the subtree rooted at `id` toward `direction`.
	///
	/// The child of `id` on the opposite side takes its place:
	/// ```text
	///        a                          b
	///       / \     rotate(a, Left)    / \
	///      x   b    ─────────────>    a   z
	///         / \                    / \
	///        y   z                  x   y
	/// ```
	/// Only the sizes of `a` and `b` are recomputed. Ranks are left untouched.
	pub(crate) fn rotate(&mut self, id: usize, direction: Side) {
		let up_side = direction.opposite();
		let up_id = self
			.node(id)
			.child(up_side)
			.expect("cannot rotate toward an external child");
		let inner = self.node(up_id).child(direction);
		let parent = self.node(id).parent();

		self.replace_child(parent, id, Some(up_id));

		self.node_mut(id).set_child(up_side, inner);
		if let Some(inner_id) = inner {
			self.node_mut(inner_id).set_parent(Some(id))
		}

		self.node_mut(up_id).set_child(direction, Some(id));
		self.node_mut(id).set_parent(Some(up_id));

		self.update_size(id);
		self.update_size(up_id);
	}

	/// Double rotation lifting the inner grandchild of `id` on side `heavy` two levels up.
	///
	/// Returns the id of the lifted node.
	pub(crate) fn double_rotate(&mut self, id: usize, heavy: Side) -> usize {
		let child_id = self
			.node(id)
			.child(heavy)
			.expect("cannot rotate toward an external child");
		let grandchild_id = self
			.node(child_id)
			.child(heavy.opposite())
			.expect("cannot rotate toward an external child");

		self.rotate(child_id, heavy);
		self.rotate(id, heavy.opposite());
		grandchild_id
	}

	#[inline]
	fn update_size(&mut self, id: usize) {
		let size = {
			let node = self.node(id);
			1 + self.size_of(node.left()) + self.size_of(node.right())
		};

		self.node_mut(id).set_size(size)
	}
}
