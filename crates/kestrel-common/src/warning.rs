//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Every warning is also recorded on the emitting thread so callers (tests,
//! the CLI) can inspect what the engine rejected.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

thread_local! {
    /// Warnings emitted on this thread since the last `take_warnings`.
    static RECORDED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Warn about a rejected value or unsupported feature.
///
/// The message is always recorded for [`take_warnings`], but only printed
/// to stderr the first time a given `[component] message` pair is seen.
///
/// # Example
/// ```ignore
/// warn_once("CSS", "rejected 'margin: 1px 2px 3px 4px 5px'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    RECORDED.with(|recorded| recorded.borrow_mut().push(key.clone()));

    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Kestrel {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before processing a new stylesheet)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
    RECORDED.with(|recorded| recorded.borrow_mut().clear());
}

/// Drain the warnings emitted on the current thread.
///
/// Deduplication does not apply here: a warning printed once but raised
/// three times is returned three times.
#[must_use]
pub fn take_warnings() -> Vec<String> {
    RECORDED.with(|recorded| std::mem::take(&mut *recorded.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_even_when_deduplicated() {
        let _ = take_warnings();
        warn_once("Test", "same message");
        warn_once("Test", "same message");
        let warnings = take_warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "[Test] same message");
        assert!(take_warnings().is_empty());
    }
}
