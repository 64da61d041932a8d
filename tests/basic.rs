use avl_slab::{AvlTree, AvlTreeExt, Error};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

const SEED: u64 = 0x7e57_5eed;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn filled() -> AvlTree<usize, usize> {
	let mut tree = AvlTree::new();
	for (key, value) in &ITEMS {
		tree.insert(*key, *value).unwrap();
	}

	tree
}

#[test]
pub fn insert() {
	init_logger();
	let mut tree: AvlTree<usize, usize> = AvlTree::new();

	for (i, (key, value)) in ITEMS.iter().enumerate() {
		assert!(tree.insert(*key, *value).is_ok());
		tree.validate();
		assert_eq!(tree.size(), i + 1);
	}

	assert_eq!(tree.len(), 100);

	// rank stays within the AVL height bound.
	assert!(tree.rank() <= 9);

	for (key, value) in &ITEMS {
		assert_eq!(tree.get(key), Some(value));
	}
}

#[test]
pub fn insert_duplicate() {
	let mut tree = filled();

	for (key, _) in &ITEMS {
		assert_eq!(tree.insert(*key, 0), Err(Error::DuplicateKey));
	}

	tree.validate();
	assert_eq!(tree.len(), 100);
	for (key, value) in &ITEMS {
		assert_eq!(tree[key], *value);
	}
}

#[test]
pub fn delete() {
	init_logger();
	let mut tree = filled();

	let mut items = ITEMS;
	let mut rng = SmallRng::seed_from_u64(SEED);
	items.shuffle(&mut rng);

	for (i, (key, _)) in items.iter().enumerate() {
		assert!(tree.delete(key).is_ok());
		tree.validate();
		assert_eq!(tree.size(), 99 - i);
		assert!(!tree.contains_key(key));
	}

	assert!(tree.is_empty());
	assert_eq!(tree.rank(), -1);
	assert_eq!(tree.min(), None);
	assert_eq!(tree.max(), None);
}

#[test]
pub fn delete_missing() {
	let mut tree = filled();

	assert_eq!(tree.delete(&0), Err(Error::NotFound));
	assert_eq!(tree.delete(&10000), Err(Error::NotFound));
	tree.validate();
	assert_eq!(tree.len(), 100);

	let mut empty: AvlTree<usize, usize> = AvlTree::new();
	assert_eq!(empty.delete(&1), Err(Error::NotFound));
	assert!(empty.is_empty());
}

#[test]
pub fn remove() {
	let mut tree = filled();

	for (key, value) in &ITEMS {
		assert_eq!(tree.remove(key), Some(*value));
		assert_eq!(tree.remove(key), None);
	}

	tree.validate();
	assert!(tree.is_empty());
}

#[test]
pub fn min_max() {
	let mut tree: AvlTree<usize, usize> = AvlTree::new();
	let mut items = ITEMS;
	let mut rng = SmallRng::seed_from_u64(SEED);
	items.shuffle(&mut rng);

	for (key, value) in &items {
		tree.insert(*key, *value).unwrap();

		let (min_key, min_value) = tree.first_key_value().unwrap();
		assert_eq!(Some(min_key), tree.keys().next());
		assert_eq!(tree.min(), Some(min_value));

		let (max_key, max_value) = tree.last_key_value().unwrap();
		assert_eq!(Some(max_key), tree.keys().next_back());
		assert_eq!(tree.max(), Some(max_value));
	}

	items.shuffle(&mut rng);
	for (key, _) in &items {
		tree.delete(key).unwrap();
		tree.validate();

		assert_eq!(tree.first_key_value().map(|(k, _)| k), tree.keys().next());
		assert_eq!(tree.last_key_value().map(|(k, _)| k), tree.keys().next_back());
	}
}

#[test]
pub fn delete_then_insert() {
	let items = ITEMS;

	for k in 1..items.len() {
		let mut tree: AvlTree<usize, usize> = AvlTree::new();

		for (key, value) in &items[..k] {
			tree.insert(*key, *value).unwrap();
		}

		for (key, value) in &items[..k] {
			tree.delete(key).unwrap();
			tree.validate();
			tree.insert(*key, *value).unwrap();
			tree.validate();
		}

		assert_eq!(tree.len(), k);
	}
}

#[test]
pub fn get_mut() {
	let mut tree = filled();

	for (key, value) in &ITEMS {
		*tree.get_mut(key).unwrap() = 10000 - *value;
	}

	assert_eq!(tree.get_mut(&0), None);

	for (key, value) in &ITEMS {
		assert_eq!(tree.get(key), Some(&(10000 - *value)));
	}
}

#[test]
pub fn sorted_contents() {
	let tree = filled();

	let mut sorted = ITEMS.to_vec();
	sorted.sort();

	let keys: Vec<usize> = sorted.iter().map(|(k, _)| *k).collect();
	let values: Vec<usize> = sorted.iter().map(|(_, v)| *v).collect();
	assert_eq!(tree.keys_in_order(), keys);
	assert_eq!(tree.values_in_order(), values);
}

#[test]
pub fn from_iter_keeps_first() {
	let tree: AvlTree<i32, &str> = vec![(1, "a"), (2, "b"), (1, "c")].into_iter().collect();

	tree.validate();
	assert_eq!(tree.len(), 2);
	assert_eq!(tree.get(&1), Some(&"a"));
}

#[test]
pub fn clear() {
	let mut tree = filled();
	tree.clear();

	assert!(tree.is_empty());
	assert_eq!(tree.first_key_value(), None);
	tree.validate();

	tree.insert(1, 1).unwrap();
	tree.validate();
	assert_eq!(tree.len(), 1);
}

#[test]
pub fn equality() {
	let a = filled();

	let mut items = ITEMS;
	let mut rng = SmallRng::seed_from_u64(SEED);
	items.shuffle(&mut rng);
	let b: AvlTree<usize, usize> = items.iter().cloned().collect();

	assert_eq!(a, b);
	assert_eq!(format!("{:?}", a), format!("{:?}", b));
}

const ITEMS: [(usize, usize); 100] = [
	(4223, 5948),
	(8175, 4629),
	(1411, 7458),
	(9208, 4040),
	(1246, 2287),
	(6568, 7583),
	(5426, 491),
	(7850, 8789),
	(2034, 9388),
	(1408, 7331),
	(7346, 5820),
	(9712, 4253),
	(5430, 7253),
	(1662, 5278),
	(9322, 777),
	(9256, 8116),
	(7971, 8071),
	(648, 3082),
	(7510, 2207),
	(8394, 7839),
	(57, 8834),
	(7770, 5437),
	(6388, 6755),
	(9177, 9904),
	(6487, 5143),
	(2231, 688),
	(7389, 4472),
	(577, 1930),
	(9130, 3222),
	(2230, 8268),
	(1211, 2354),
	(9237, 3643),
	(2912, 8471),
	(8783, 4977),
	(4325, 9566),
	(9355, 528),
	(9814, 9342),
	(1641, 6027),
	(3009, 8304),
	(4199, 2688),
	(7011, 9579),
	(8391, 8562),
	(1097, 5448),
	(1224, 5844),
	(5309, 2846),
	(7493, 8845),
	(3682, 48),
	(9165, 2755),
	(9959, 7420),
	(8158, 2616),
	(3210, 7795),
	(4418, 7790),
	(5592, 4184),
	(4111, 885),
	(742, 952),
	(2486, 6088),
	(6797, 271),
	(8829, 3005),
	(6444, 5818),
	(6566, 8783),
	(913, 2886),
	(2325, 1260),
	(4382, 3045),
	(5451, 1473),
	(9376, 8133),
	(9036, 4924),
	(5202, 7364),
	(9190, 5619),
	(8190, 2892),
	(9493, 500),
	(3043, 8315),
	(9220, 6396),
	(6400, 5692),
	(2709, 8547),
	(1218, 7403),
	(581, 117),
	(2577, 9373),
	(9349, 3186),
	(9021, 4874),
	(4207, 1781),
	(5201, 5305),
	(7889, 1996),
	(6327, 6377),
	(8120, 2338),
	(8213, 9072),
	(865, 6524),
	(5858, 5331),
	(1904, 3594),
	(9950, 8859),
	(518, 6551),
	(2674, 7081),
	(9848, 618),
	(5120, 5595),
	(259, 9662),
	(3077, 863),
	(4519, 7217),
	(3931, 6743),
	(2575, 6810),
	(1553, 5964),
	(4493, 3677)
];
