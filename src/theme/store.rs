// SPDX-License-Identifier: MPL-2.0
//! Process-wide store for the active theme bundle.
//!
//! Every visual component reads its presentation tokens through [`active`]
//! instead of carrying theme data in its own props, so a single
//! [`apply_global`] call switches the whole page. The store has one writer
//! (`apply_global`) and many readers; a write replaces the entire bundle in
//! one lock acquisition, so readers never observe a partially updated token
//! set. There is no reset: a default theme is in place from process start
//! and tokens persist until the next apply or process end.

use super::{lookup, Theme, ThemeId};
use std::sync::RwLock;

static ACTIVE: RwLock<&'static Theme> = RwLock::new(&super::italian::THEME);

/// Resolves the bundle for `id` and makes it the process-wide active theme.
///
/// Idempotent: applying the already-active theme produces no observable
/// change. Applying a different theme overwrites all tokens atomically from
/// the reader's perspective.
pub fn apply_global(id: ThemeId) {
    let theme = lookup(id);
    match ACTIVE.write() {
        Ok(mut guard) => *guard = theme,
        Err(poisoned) => *poisoned.into_inner() = theme,
    }
}

/// The currently applied token bundle.
pub fn active() -> &'static Theme {
    match ACTIVE.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

// The store is process-global; tests that write to it serialize on this
// lock, including tests outside this module that boot the application.
#[cfg(test)]
pub(crate) fn write_lock() -> &'static std::sync::Mutex<()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_lock() -> &'static std::sync::Mutex<()> {
        write_lock()
    }

    #[test]
    fn apply_makes_the_bundle_active() {
        let _guard = store_lock().lock().expect("failed to lock mutex");
        apply_global(ThemeId::Cafe);
        assert_eq!(active().id, ThemeId::Cafe);
        apply_global(ThemeId::Italian);
        assert_eq!(active().id, ThemeId::Italian);
    }

    #[test]
    fn apply_is_idempotent() {
        let _guard = store_lock().lock().expect("failed to lock mutex");
        apply_global(ThemeId::Vegan);
        let first = *active();
        apply_global(ThemeId::Vegan);
        let second = *active();
        assert_eq!(first, second);
        apply_global(ThemeId::Italian);
    }

    #[test]
    fn apply_overwrites_every_token() {
        let _guard = store_lock().lock().expect("failed to lock mutex");
        apply_global(ThemeId::Asian);
        let asian = *active();
        apply_global(ThemeId::Cafe);
        let cafe = *active();
        assert_ne!(asian.colors.primary, cafe.colors.primary);
        assert_ne!(asian.fonts.heading, cafe.fonts.heading);
        assert_ne!(asian.border_radius, cafe.border_radius);
        apply_global(ThemeId::Italian);
    }
}
