use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for types usable as die face labels.
///
/// Satisfied by characters, integers and strings out of the box. Floats
/// do not qualify (no total order); wrap them in an ordered newtype to
/// use them as labels.
pub trait Face: Debug + Clone + PartialEq + Eq + PartialOrd + Ord + Hash {}

impl<T> Face for T where T: Debug + Clone + PartialEq + Eq + PartialOrd + Ord + Hash {}
