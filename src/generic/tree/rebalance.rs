//! Rank-difference driven rebalancing.
//!
//! After a structural change, the pattern `(rank - rank(left), rank - rank(right))` of each
//! ancestor is inspected on the way up to the root, and the matching fix is applied.
//! Every fix reports its cost in rebalancing operations: a promotion, a demotion and a single
//! rotation each count as one.
use crate::generic::{
	node::{Link, Node, Side},
	AvlTree, AvlTreeExt, AvlTreeExtMut,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, SlabMut};
use log::trace;

/// Cost of a single rotation followed by one rank update.
const SINGLE_ROTATION: usize = 2;

/// Cost of a double rotation followed by three rank updates.
const DOUBLE_ROTATION: usize = 5;

/// Cost of a single rotation followed by a demotion and a promotion,
/// or by a double demotion.
const SINGLE_ROTATION_AFTER_SHRINK: usize = 3;

/// Cost of a double rotation followed by four rank updates.
const DOUBLE_ROTATION_AFTER_SHRINK: usize = 6;

impl<K, V, C: SlabMut<Node<K, V>>> AvlTree<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Insertion fix-up, starting at `from`.
	///
	/// | pattern         | action                               | continue |
	/// |-----------------|--------------------------------------|----------|
	/// | (1,0) / (0,1)   | promote                              | yes      |
	/// | (2,0) / (0,2)   | single or double rotation            | see [`Self::fix_heavy_after_growth`] |
	/// | other           | stop                                 | no       |
	pub(crate) fn fix_after_growth(&mut self, mut from: Link) -> usize {
		let mut cost = 0;

		while let Some(id) = from {
			let pattern = self.pattern(id);
			match pattern.as_tuple() {
				(1, 0) | (0, 1) => {
					trace!("growth: promote @{} {}", id, pattern);
					self.node_mut(id).promote();
					cost += 1;
					from = self.node(id).parent()
				}
				(2, 0) => {
					let (fix_cost, next) = self.fix_heavy_after_growth(id, Side::Right);
					cost += fix_cost;
					from = next
				}
				(0, 2) => {
					let (fix_cost, next) = self.fix_heavy_after_growth(id, Side::Left);
					cost += fix_cost;
					from = next
				}
				_ => break,
			}
		}

		cost
	}

	/// Fix a node whose `heavy` child has the same rank as itself.
	///
	/// The heavy child is classified by its own rank differences on its outer side (`heavy`)
	/// and inner side (`heavy.opposite()`):
	///   - `(1, 2)`: leaning outward, single rotation and the rotated-down node is demoted;
	///   - `(2, 1)`: leaning inward, double rotation, the new subtree root is promoted and
	///     both former nodes demoted;
	///   - `(1, 1)`: even (only after a join), single rotation and the rotated-up child is
	///     promoted. The subtree grew by one, so the fix-up continues above it.
	///
	/// Returns the cost and the next node to inspect.
	fn fix_heavy_after_growth(&mut self, id: usize, heavy: Side) -> (usize, Link) {
		let child_id = self.node(id).child(heavy).expect("heavy side is external");
		let child_pattern = self.pattern(child_id);

		match (child_pattern.on(heavy), child_pattern.on(heavy.opposite())) {
			(1, 2) => {
				trace!("growth: single rotation @{} toward {}", id, heavy.opposite());
				self.rotate(id, heavy.opposite());
				self.node_mut(id).demote();
				(SINGLE_ROTATION, None)
			}
			(2, 1) => {
				trace!("growth: double rotation @{} toward {}", id, heavy.opposite());
				let top_id = self.double_rotate(id, heavy);
				self.node_mut(top_id).promote();
				self.node_mut(id).demote();
				self.node_mut(child_id).demote();
				(DOUBLE_ROTATION, None)
			}
			(1, 1) => {
				trace!("growth: single rotation @{} toward {} (even child)", id, heavy.opposite());
				self.rotate(id, heavy.opposite());
				self.node_mut(child_id).promote();
				(SINGLE_ROTATION, self.node(child_id).parent())
			}
			_ => (0, None),
		}
	}

	/// Deletion fix-up, starting at `from`.
	///
	/// | pattern         | action                               | continue |
	/// |-----------------|--------------------------------------|----------|
	/// | (2,2)           | demote                               | yes      |
	/// | (3,1) / (1,3)   | single or double rotation            | see [`Self::fix_heavy_after_shrink`] |
	/// | other           | stop                                 | no       |
	pub(crate) fn fix_after_shrink(&mut self, mut from: Link) -> usize {
		let mut cost = 0;

		while let Some(id) = from {
			let pattern = self.pattern(id);
			match pattern.as_tuple() {
				(2, 2) => {
					trace!("shrink: demote @{} {}", id, pattern);
					self.node_mut(id).demote();
					cost += 1;
					from = self.node(id).parent()
				}
				(3, 1) => {
					let (fix_cost, next) = self.fix_heavy_after_shrink(id, Side::Right);
					cost += fix_cost;
					from = next
				}
				(1, 3) => {
					let (fix_cost, next) = self.fix_heavy_after_shrink(id, Side::Left);
					cost += fix_cost;
					from = next
				}
				_ => break,
			}
		}

		cost
	}

	/// Fix a node whose `heavy` child is three ranks above its other child.
	///
	///   - `(1, 1)`: even child, single rotation, the node is demoted and the child promoted.
	///     The subtree keeps its rank: stop.
	///   - `(1, 2)`: outward lean, single rotation and the node is demoted twice.
	///   - `(2, 1)`: inward lean, double rotation, the new subtree root is promoted,
	///     the node demoted twice and the child once.
	///
	/// In the last two cases the subtree lost one rank and the fix-up continues above it.
	fn fix_heavy_after_shrink(&mut self, id: usize, heavy: Side) -> (usize, Link) {
		let child_id = self.node(id).child(heavy).expect("heavy side is external");
		let child_pattern = self.pattern(child_id);

		match (child_pattern.on(heavy), child_pattern.on(heavy.opposite())) {
			(1, 1) => {
				trace!("shrink: single rotation @{} toward {} (even child)", id, heavy.opposite());
				self.rotate(id, heavy.opposite());
				self.node_mut(id).demote();
				self.node_mut(child_id).promote();
				(SINGLE_ROTATION_AFTER_SHRINK, None)
			}
			(1, 2) => {
				trace!("shrink: single rotation @{} toward {}", id, heavy.opposite());
				self.rotate(id, heavy.opposite());
				let node = self.node_mut(id);
				node.demote();
				node.demote();
				(SINGLE_ROTATION_AFTER_SHRINK, self.node(child_id).parent())
			}
			(2, 1) => {
				trace!("shrink: double rotation @{} toward {}", id, heavy.opposite());
				let top_id = self.double_rotate(id, heavy);
				self.node_mut(top_id).promote();
				let node = self.node_mut(id);
				node.demote();
				node.demote();
				self.node_mut(child_id).demote();
				(DOUBLE_ROTATION_AFTER_SHRINK, self.node(top_id).parent())
			}
			_ => (0, None),
		}
	}
}
