#[macro_use]
mod index;

pub use nohash_hasher;

pub fn fx_hashmap_with_capacity<K, V>(capacity: usize) -> rustc_hash::FxHashMap<K, V> {
    let hasher = rustc_hash::FxBuildHasher;
    rustc_hash::FxHashMap::with_capacity_and_hasher(capacity, hasher)
}

pub fn no_hashmap_with_capacity<K, V>(capacity: usize) -> nohash_hasher::IntMap<K, V> {
    let hasher = nohash_hasher::BuildNoHashHasher::default();
    nohash_hasher::IntMap::with_capacity_and_hasher(capacity, hasher)
}
