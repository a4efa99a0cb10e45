//! Reuse pools for scanner and formatter sessions.
//!
//! A [`Pool`] hands out [`Pooled`] guards. The guard owns its item
//! exclusively until it is dropped, at which point the item is reset and put
//! back on the free list. Two callers can therefore never hold the same
//! instance, and nothing bound during one call is visible to the next.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Items that can be returned to a [`Pool`].
pub trait Reset {
    /// Drop per-call state while keeping allocations for reuse.
    fn reset(&mut self);
}

/// Counters describing pool activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Items constructed because the free list was empty
    pub created: usize,
    /// Acquisitions served from the free list
    pub reused: usize,
    /// Items reset and returned
    pub released: usize,
    /// Items currently idle on the free list
    pub idle: usize,
}

/// Thread-safe free list of reusable items.
pub struct Pool<T> {
    free: Mutex<Vec<T>>,
    make: fn() -> T,
    created: AtomicUsize,
    reused: AtomicUsize,
    released: AtomicUsize,
}

impl<T: Reset> Pool<T> {
    /// Create an empty pool. Usable in `static` items.
    pub const fn new(make: fn() -> T) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            make,
            created: AtomicUsize::new(0),
            reused: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    /// Take an idle item, or construct one if none is idle.
    pub fn acquire(&self) -> Pooled<'_, T> {
        let idle = self
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();

        let item = match idle {
            Some(item) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                item
            }
            None => {
                self.created.fetch_add(1, Ordering::Relaxed);
                (self.make)()
            }
        };

        Pooled {
            pool: self,
            item: Some(item),
        }
    }

    fn release(&self, mut item: T) {
        item.reset();
        self.released.fetch_add(1, Ordering::Relaxed);
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            idle: self
                .free
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
        }
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("created", &self.created.load(Ordering::Relaxed))
            .field("reused", &self.reused.load(Ordering::Relaxed))
            .field("released", &self.released.load(Ordering::Relaxed))
            .finish()
    }
}

/// Exclusive handle to a pooled item; releases it on drop.
pub struct Pooled<'p, T: Reset> {
    pool: &'p Pool<T>,
    item: Option<T>,
}

impl<T: Reset> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Only `Drop` takes the item out.
        match &self.item {
            Some(item) => item,
            None => unreachable!("pooled item used after release"),
        }
    }
}

impl<T: Reset> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.item {
            Some(item) => item,
            None => unreachable!("pooled item used after release"),
        }
    }
}

impl<T: Reset> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.release(item);
        }
    }
}

impl<T: Reset + fmt::Debug> fmt::Debug for Pooled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.item).finish()
    }
}
