use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key-value pair stored in a tree node.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Item<K, V> {
	key: K,
	value: V,
}

impl<K, V> Item<K, V> {
	#[inline]
	pub fn new(key: K, value: V) -> Item<K, V> {
		Item { key, value }
	}

	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	#[inline]
	pub fn as_pair(&self) -> (&K, &V) {
		(&self.key, &self.value)
	}

	#[inline]
	pub fn into_pair(self) -> (K, V) {
		(self.key, self.value)
	}

	#[inline]
	pub fn into_value(self) -> V {
		self.value
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Item<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?} => {:?}", self.key, self.value)
	}
}
