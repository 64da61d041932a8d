use std::fmt;

/// Child slot of a node.
///
/// Every left/right-symmetric operation of the tree is written once in terms of a
/// `Side` and its [`opposite`](Side::opposite).
///
/// ```text
///              ┌───┐
///              │ p │
///              └───┘
///          left/   \right
///        ┌───┐       ┌───┐
///        │ a │       │ b │
///        └───┘       └───┘
///   outer/   \inner
/// ```
/// Relative to its parent, the *outer* side of `a` is `Left` (away from `b`),
/// its *inner* side is `Right` (toward `b`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
	Left,
	Right,
}

impl Side {
	#[inline]
	pub fn opposite(self) -> Side {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Side::Left => write!(f, "left"),
			Side::Right => write!(f, "right"),
		}
	}
}

impl fmt::Debug for Side {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}
