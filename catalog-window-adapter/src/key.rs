#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Identity of an observed row (usually the row's key from the window renderer).
#[cfg(feature = "std")]
pub trait GateKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> GateKey for T {}

/// Identity of an observed row (usually the row's key from the window renderer).
#[cfg(not(feature = "std"))]
pub trait GateKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> GateKey for T {}
