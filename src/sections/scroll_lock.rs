// SPDX-License-Identifier: MPL-2.0
//! Reference-counted page scroll suppression.
//!
//! The mobile navigation drawer and the gallery lightbox both need the page
//! behind them to stop scrolling while they are open. Each holds a
//! [`ScrollLock`] for exactly as long as it is open; the page scrolls only
//! while the count is zero. Dropping the guard releases the hold, so a
//! closing overlay can never leave the page stuck.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of active scroll holds.
#[derive(Debug, Clone, Default)]
pub struct ScrollLockCounter {
    holds: Arc<AtomicUsize>,
}

impl ScrollLockCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a hold on the page scroll, released when the guard drops.
    pub fn acquire(&self) -> ScrollLock {
        self.holds.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            holds: Arc::clone(&self.holds),
        }
    }

    /// Whether the page may scroll right now.
    pub fn is_unlocked(&self) -> bool {
        self.holds.load(Ordering::SeqCst) == 0
    }
}

/// RAII guard for one scroll hold.
#[derive(Debug)]
pub struct ScrollLock {
    holds: Arc<AtomicUsize>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.holds.fetch_sub(1, Ordering::SeqCst);
    }
}
