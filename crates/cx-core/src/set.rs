//! Identity-keyed set and map aliases.
//!
//! With the `fx-hash` feature the hasher is `rustc_hash::FxBuildHasher`,
//! which is noticeably faster on the small integer keys used here.  The
//! default is the standard SipHash `RandomState`.

#[cfg(feature = "fx-hash")]
pub type IdHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fx-hash"))]
pub type IdHasher = std::collections::hash_map::RandomState;

/// Set of identity keys.
pub type IdSet<T> = std::collections::HashSet<T, IdHasher>;

/// Map keyed by identity.
pub type IdMap<K, V> = std::collections::HashMap<K, V, IdHasher>;

/// Empty [`IdSet`] regardless of the selected hasher.
#[inline]
pub fn id_set<T>() -> IdSet<T> {
    IdSet::with_hasher(IdHasher::default())
}

/// Empty [`IdMap`] regardless of the selected hasher.
#[inline]
pub fn id_map<K, V>() -> IdMap<K, V> {
    IdMap::with_hasher(IdHasher::default())
}
