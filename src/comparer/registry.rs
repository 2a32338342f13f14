//! Process-wide cache of shared strategy instances.
//!
//! Instances are keyed by a marker type. A lookup takes a read lock; a miss
//! builds the candidate *outside* the lock, then installs it with a short
//! write lock if no other thread got there first. The first installed
//! instance wins and every caller observes it. No user code runs while a
//! lock is held, including tracing subscribers, which only see the install
//! after the write lock is released.

use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

type Slot = Arc<dyn Any + Send + Sync>;

static SHARED: OnceLock<RwLock<FxHashMap<TypeId, Slot>>> = OnceLock::new();

/// Returns the instance registered under `K`, creating it with `initializer`
/// on first use.
pub(crate) fn shared<K, V, F>(initializer: F) -> V
where
    K: 'static,
    V: Clone + Send + Sync + 'static,
    F: FnOnce() -> V,
{
    let key = TypeId::of::<K>();
    let table = SHARED.get_or_init(|| RwLock::new(FxHashMap::default()));

    if let Some(value) = table
        .read()
        .get(&key)
        .and_then(|slot| slot.downcast_ref::<V>())
    {
        return value.clone();
    }

    let candidate = initializer();
    let slot: Slot = Arc::new(candidate.clone());
    let installed = Arc::clone(
        table
            .write()
            .entry(key)
            .or_insert_with(|| Arc::clone(&slot)),
    );

    if Arc::ptr_eq(&installed, &slot) {
        tracing::debug!(key = type_name::<K>(), "installed shared instance");
    }
    installed.downcast_ref::<V>().cloned().unwrap_or(candidate)
}
