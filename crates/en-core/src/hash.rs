//! Fx hash map and set aliases.
//!
//! Settings layers are keyed by short strings and listings dedup by path;
//! neither sees untrusted input.
//!
//! ```
//! use en_core::FxHashMap;
//!
//! let mut map: FxHashMap<String, i32> = FxHashMap::default();
//! map.insert("root".to_owned(), 1);
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;
