//! This crate provides an AVL tree map whose nodes live in a slab and link to each other
//! through their slab identifiers.
//!
//! Every node stores its rank (height label) and the size of its subtree.
//! Balance is restored after each insertion and deletion by inspecting the rank differences
//! between nodes and their children, and every mutation reports how many rebalancing
//! operations (promotions, demotions and rotations) it performed.
//! Whole trees can be split around a key and joined back together.
//!
//! ```
//! use avl_slab::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [4, 2, 6, 1, 3, 5, 7] {
//!     tree.insert(key, key * 10).unwrap();
//! }
//!
//! assert_eq!(tree.rank(), 2);
//! assert_eq!(tree.get(&3), Some(&30));
//! assert_eq!(tree.keys_in_order(), [1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! The data structure is generic over the slab implementation through the
//! [`cc-traits`](https://crates.io/crates/cc-traits) collection traits.
//! The generic version lives in the [`generic`] module,
//! and the `std-slab` feature (enabled by default) instantiates it with [`slab::Slab`].
#[cfg(feature = "std-slab")]
use slab::Slab;

pub mod error;
pub mod generic;

pub use error::Error;
pub use generic::{
	node::{Item, Link, Pattern, Side},
	AvlTreeExt, AvlTreeExtMut, Iter, Keys, NodeRef, Values,
};

/// AVL tree map based on `Slab`.
#[cfg(feature = "std-slab")]
pub type AvlTree<K, V> = generic::AvlTree<K, V, Slab<generic::Node<K, V>>>;

/// AVL tree with integer keys and string values.
#[cfg(feature = "std-slab")]
pub type IntTree = AvlTree<i64, String>;
