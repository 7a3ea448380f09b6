use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// A single-slot memoization cell.
///
/// Holds at most one `(key, value)` pair. [`Memo::get_or_compute`] returns the stored value
/// when the key is equal to the stored key and recomputes (replacing the slot) otherwise.
///
/// # Invariants
///
/// 1. At most one value is retained, tied to the latest key.
/// 2. A hit returns a clone of the stored `Rc`, i.e. the same allocation.
/// 3. `version` increments by exactly 1 per computation.
pub struct Memo<K, V> {
    slot: RefCell<Option<(K, Rc<V>)>>,
    version: Cell<u64>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { slot: RefCell::new(None), version: Cell::new(0) }
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.slot.borrow().is_some())
            .field("version", &self.version.get())
            .finish()
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, or runs `compute` and caches its result.
    ///
    /// `compute` runs without any borrow of the slot held, so it may freely read other memos.
    pub fn get_or_compute(&self, key: &K, compute: impl FnOnce() -> V) -> Rc<V>
    where
        K: Clone,
    {
        if let Some((cached_key, value)) = self.slot.borrow().as_ref()
            && cached_key == key
        {
            return Rc::clone(value);
        }

        let value = Rc::new(compute());
        self.version.set(self.version.get() + 1);
        *self.slot.borrow_mut() = Some((key.clone(), Rc::clone(&value)));
        value
    }

    #[cfg(test)]
    fn peek(&self) -> Option<Rc<V>> {
        self.slot.borrow().as_ref().map(|(_, v)| Rc::clone(v))
    }

    /// Number of computations performed so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    #[cfg(test)]
    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
