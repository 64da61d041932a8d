use avl_slab::{AvlTree, AvlTreeExt, AvlTreeExtMut, Pattern};

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn insert_all(keys: &[i64]) -> (AvlTree<i64, ()>, Vec<usize>) {
	let mut tree = AvlTree::new();
	let costs = keys
		.iter()
		.map(|key| {
			let cost = tree.insert(*key, ()).unwrap();
			tree.validate();
			cost
		})
		.collect();

	(tree, costs)
}

fn root_key(tree: &AvlTree<i64, ()>) -> Option<i64> {
	tree.root().map(|root| *root.key())
}

#[test]
pub fn promotions_only() {
	init_logger();
	let (tree, costs) = insert_all(&[20, 10, 30, 5]);

	assert_eq!(costs, [0, 1, 0, 2]);
	assert_eq!(tree.rank(), 2);
	assert_eq!(root_key(&tree), Some(20));
}

#[test]
pub fn single_rotation_on_insert() {
	init_logger();
	let (tree, costs) = insert_all(&[10, 20, 30]);

	// promote 20, rotate at 10 and demote it.
	assert_eq!(costs, [0, 1, 3]);
	assert_eq!(root_key(&tree), Some(20));
	assert_eq!(tree.rank(), 1);
}

#[test]
pub fn double_rotation_on_insert() {
	init_logger();
	let (tree, costs) = insert_all(&[30, 10, 20]);

	// promote 10, double rotation at 30.
	assert_eq!(costs, [0, 1, 6]);
	assert_eq!(root_key(&tree), Some(20));
	assert_eq!(tree.keys_in_order(), [10, 20, 30]);
}

#[test]
pub fn deep_double_rotation_on_insert() {
	init_logger();
	let (mut tree, costs) = insert_all(&[30, 20, 10, 25]);
	assert_eq!(costs, [0, 1, 3, 2]);
	assert_eq!(tree.rank(), 2);

	assert_eq!(tree.insert(27, ()), Ok(6));
	tree.validate();
	assert_eq!(root_key(&tree), Some(20));

	let right = tree.root().unwrap().right().unwrap();
	assert_eq!(*right.key(), 27);
	assert_eq!(right.rank(), 1);
}

#[test]
pub fn demotion_on_delete() {
	init_logger();
	let (mut tree, _) = insert_all(&[20, 10, 30, 5]);

	assert_eq!(tree.delete(&10), Ok(1));
	tree.validate();
	assert_eq!(tree.rank(), 1);
	assert_eq!(tree.keys_in_order(), [5, 20, 30]);
}

#[test]
pub fn rotation_on_delete() {
	init_logger();
	let (mut tree, _) = insert_all(&[20, 10, 30, 5]);

	// the root takes the item of its successor 30, then leans left with pattern (1,3).
	assert_eq!(tree.delete(&20), Ok(3));
	tree.validate();
	assert_eq!(tree.keys_in_order(), [5, 10, 30]);
	assert_eq!(root_key(&tree), Some(10));

	assert_eq!(tree.delete(&10), Ok(0));
	tree.validate();
	assert_eq!(tree.keys_in_order(), [5, 30]);
}

#[test]
pub fn even_child_rotation_on_delete() {
	init_logger();
	let (mut tree, _) = insert_all(&[4, 2, 6, 1, 3, 5, 7]);
	assert_eq!(tree.rank(), 2);

	assert_eq!(tree.delete(&1), Ok(0));
	assert_eq!(tree.delete(&3), Ok(1));
	tree.validate();

	// pattern (3,1) at the root with an even right child.
	assert_eq!(tree.delete(&2), Ok(3));
	tree.validate();
	assert_eq!(root_key(&tree), Some(6));
	assert_eq!(tree.rank(), 2);
	assert_eq!(tree.keys_in_order(), [4, 5, 6, 7]);
}

#[test]
pub fn double_rotation_on_delete() {
	init_logger();
	let (mut tree, _) = insert_all(&[20, 10, 30, 25]);

	// pattern (3,1) at the root, the right child leans inward.
	assert_eq!(tree.delete(&10), Ok(6));
	tree.validate();
	assert_eq!(root_key(&tree), Some(25));
	assert_eq!(tree.rank(), 1);
	assert_eq!(tree.keys_in_order(), [20, 25, 30]);

	let (mut tree, _) = insert_all(&[20, 10, 30, 15]);

	// mirror case, pattern (1,3).
	assert_eq!(tree.delete(&30), Ok(6));
	tree.validate();
	assert_eq!(root_key(&tree), Some(15));
	assert_eq!(tree.rank(), 1);
	assert_eq!(tree.keys_in_order(), [10, 15, 20]);
}

#[test]
pub fn double_rotation_on_delete_continues() {
	init_logger();
	let (mut tree, _) = insert_all(&[50, 20, 80, 10, 30, 70, 90, 5, 25, 40, 75, 22]);
	assert_eq!(tree.rank(), 4);
	assert_eq!(root_key(&tree), Some(50));

	// 10 is demoted, 20 gets pattern (3,1) and its right child 30 leans inward:
	// double rotation lifting 25, after which the root is demoted.
	assert_eq!(tree.delete(&5), Ok(8));
	tree.validate();
	assert_eq!(root_key(&tree), Some(50));
	assert_eq!(tree.rank(), 3);

	let left = tree.root().unwrap().left().unwrap();
	assert_eq!(*left.key(), 25);
	assert_eq!(left.rank(), 2);
	assert_eq!(left.left().map(|n| *n.key()), Some(20));
	assert_eq!(left.right().map(|n| *n.key()), Some(30));
}

#[test]
pub fn patterns() {
	let (tree, _) = insert_all(&[20, 10, 30, 5]);
	let root_id = tree.root_id().unwrap();
	assert_eq!(tree.pattern(root_id), Pattern::new(1, 2));

	let left_id = tree.node(root_id).left().unwrap();
	assert_eq!(tree.pattern(left_id), Pattern::new(1, 2));
	assert_eq!(tree.pattern(left_id).to_string(), "(1,2)");
}

#[test]
pub fn manual_rotations() {
	let (mut tree, _) = insert_all(&[1, 2, 3]);
	let root_id = tree.root_id().unwrap();

	tree.rotate_right(root_id);
	assert_eq!(root_key(&tree), Some(1));
	assert_eq!(tree.root().unwrap().size(), 3);
	assert_eq!(tree.keys_in_order(), [1, 2, 3]);

	let new_root_id = tree.root_id().unwrap();
	tree.rotate_left(new_root_id);
	assert_eq!(root_key(&tree), Some(2));
	assert_eq!(tree.root().unwrap().size(), 3);

	// ranks were left untouched by the rotations.
	tree.validate();
}

#[test]
pub fn ascending_insertions() {
	init_logger();
	let mut tree = AvlTree::new();
	let mut total = 0;

	for key in 0..1024i64 {
		total += tree.insert(key, ()).unwrap();
	}

	tree.validate();

	// a perfect tree of 1023 nodes plus one leaf.
	assert_eq!(tree.rank(), 10);

	// amortized constant rebalancing.
	assert!(total <= 4 * 1024);
}
