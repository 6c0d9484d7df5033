//! Per-session key/value bags.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::Calculation;

/// Session key under which the last calculation is stored.
pub const LAST_CALCULATION_KEY: &str = "lastCalculation";

/// A value stored in a session bag.
///
/// A small tagged record: the earlier design encoded the calculation as
/// a comma-joined string, which corrupted any field containing a comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValue {
    /// Free-form text.
    Text(String),

    /// A stored calculation result.
    Calculation(Calculation),
}

/// One visitor's key/value state.
///
/// Cloning a bag clones a handle, not the contents: every handle for a
/// session id shares the same map, so a write through one handle is
/// visible through all of them. Individual operations take the bag lock
/// for their full duration, which is what makes `take_calculation` a
/// true read-once.
#[derive(Debug, Clone, Default)]
pub struct SessionBag {
    inner: Arc<Mutex<HashMap<String, SessionValue>>>,
}

impl SessionBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, returning the previous value for the key if any.
    pub fn insert(&self, key: impl Into<String>, value: SessionValue) -> Option<SessionValue> {
        self.lock().insert(key.into(), value)
    }

    /// Read a value without removing it.
    pub fn get(&self, key: &str) -> Option<SessionValue> {
        self.lock().get(key).cloned()
    }

    /// Remove a value, returning it if it was present.
    pub fn remove(&self, key: &str) -> Option<SessionValue> {
        self.lock().remove(key)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Store the last calculation.
    pub fn store_calculation(&self, calculation: Calculation) {
        self.insert(LAST_CALCULATION_KEY, SessionValue::Calculation(calculation));
    }

    /// Remove and return the last calculation, if one is stored.
    ///
    /// Removal and return happen under one lock acquisition: of two
    /// racing readers, exactly one sees the value.
    pub fn take_calculation(&self) -> Option<Calculation> {
        match self.lock().remove(LAST_CALCULATION_KEY) {
            Some(SessionValue::Calculation(calculation)) => Some(calculation),
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SessionValue>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let bag = SessionBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert_eq!(bag.get("anything"), None);
    }

    #[test]
    fn insert_get_remove() {
        let bag = SessionBag::new();

        assert_eq!(bag.insert("k", SessionValue::Text("v1".into())), None);
        assert_eq!(bag.get("k"), Some(SessionValue::Text("v1".into())));

        let previous = bag.insert("k", SessionValue::Text("v2".into()));
        assert_eq!(previous, Some(SessionValue::Text("v1".into())));

        assert_eq!(bag.remove("k"), Some(SessionValue::Text("v2".into())));
        assert_eq!(bag.remove("k"), None);
    }

    #[test]
    fn clones_share_contents() {
        let bag = SessionBag::new();
        let handle = bag.clone();

        handle.insert("seen", SessionValue::Text("yes".into()));

        assert_eq!(bag.get("seen"), Some(SessionValue::Text("yes".into())));
    }

    #[test]
    fn calculation_round_trips_structurally() {
        let bag = SessionBag::new();
        // Commas in fields were fatal to the old string encoding; the
        // tagged value carries them untouched.
        let calc = Calculation::departure("LST", "STRATFORD, LONDON");

        bag.store_calculation(calc.clone());

        assert_eq!(bag.take_calculation(), Some(calc));
    }

    #[test]
    fn take_calculation_is_read_once() {
        let bag = SessionBag::new();
        bag.store_calculation(Calculation::sum(3, 4).unwrap());

        assert!(bag.take_calculation().is_some());
        assert!(bag.take_calculation().is_none());
    }

    #[test]
    fn take_calculation_ignores_other_values() {
        let bag = SessionBag::new();
        bag.insert(LAST_CALCULATION_KEY, SessionValue::Text("stale".into()));

        // A non-calculation value under the key is consumed but not
        // returned, leaving the session in the no-result state.
        assert_eq!(bag.take_calculation(), None);
        assert_eq!(bag.get(LAST_CALCULATION_KEY), None);
    }
}
