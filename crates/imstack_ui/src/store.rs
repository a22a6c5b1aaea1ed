//! Retained widget state

use std::collections::HashMap;

use crate::error::{Result, UiError};
use crate::id::WidgetId;
use crate::state::{StateKind, StateRecord, WidgetState};

/// Mapping from widget identity to its retained record.
///
/// Records are created lazily on first access and live as long as the store;
/// there is no eviction. The store is owned by the runtime and handed to
/// every build call, so tests can create isolated stores.
#[derive(Debug, Default)]
pub struct StateStore {
    entries: HashMap<WidgetId, StateRecord>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record under `key`, creating it with `make_default` if absent.
    ///
    /// The first creator wins: later calls never invoke their factory. An
    /// existing record of a different kind means two widget kinds share an
    /// identity, which is reported as [`UiError::TypeMismatch`].
    pub fn get_or_create<T, F>(&mut self, key: &WidgetId, make_default: F) -> Result<&mut T>
    where
        T: WidgetState,
        F: FnOnce() -> T,
    {
        let record = self.entries.entry(key.clone()).or_insert_with(|| {
            log::debug!("StateStore: creating {:?} state for '{}'", T::KIND, key);
            make_default().into_record()
        });

        let found = record.kind();
        T::from_record_mut(record).ok_or_else(|| UiError::TypeMismatch {
            key: key.clone(),
            expected: T::KIND,
            found,
        })
    }

    /// Read a record without creating it
    pub fn get<T: WidgetState>(&self, key: &WidgetId) -> Result<Option<&T>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(record) => T::from_record(record).map(Some).ok_or_else(|| UiError::TypeMismatch {
                key: key.clone(),
                expected: T::KIND,
                found: record.kind(),
            }),
        }
    }

    /// Dispose of a record
    pub fn remove(&mut self, key: &WidgetId) -> Option<StateRecord> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &WidgetId) -> bool {
        self.entries.contains_key(key)
    }

    pub fn kind_of(&self, key: &WidgetId) -> Option<StateKind> {
        self.entries.get(key).map(StateRecord::kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Role;
    use crate::state::{CounterState, TimerState};

    #[test]
    fn test_first_factory_wins() {
        let mut store = StateStore::new();
        let key = WidgetId::new("Lives", Role::Counter);

        store
            .get_or_create(&key, || CounterState::new(3, 1))
            .map(|c| c.value += 1)
            .unwrap();

        let mut factory_called = false;
        let state = store
            .get_or_create(&key, || {
                factory_called = true;
                CounterState::new(99, 1)
            })
            .unwrap();
        assert_eq!(state.value, 4);
        assert!(!factory_called);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_repeated_access_returns_same_record() {
        let mut store = StateStore::new();
        let key = WidgetId::new("Clock", Role::Timer);
        for i in 0..5 {
            let timer = store.get_or_create(&key, || TimerState::new(0.0)).unwrap();
            assert_eq!(timer.elapsed_time, i as f64);
            timer.elapsed_time += 1.0;
        }
    }

    #[test]
    fn test_kind_mismatch_is_reported() {
        let mut store = StateStore::new();
        let key = WidgetId::fixed("shared");
        store.get_or_create(&key, || CounterState::new(0, 1)).unwrap();

        let err = store
            .get_or_create(&key, || TimerState::new(0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            UiError::TypeMismatch {
                expected: StateKind::Timer,
                found: StateKind::Counter,
                ..
            }
        ));
        // The original record is untouched
        assert_eq!(store.kind_of(&key), Some(StateKind::Counter));
    }

    #[test]
    fn test_get_does_not_create() {
        let mut store = StateStore::new();
        let key = WidgetId::new("x", Role::Counter);
        assert!(store.get::<CounterState>(&key).unwrap().is_none());
        assert!(store.is_empty());

        store.get_or_create(&key, || CounterState::new(2, 1)).unwrap();
        assert_eq!(store.get::<CounterState>(&key).unwrap().map(|c| c.value), Some(2));
        assert!(store.get::<TimerState>(&key).is_err());
    }

    #[test]
    fn test_remove() {
        let mut store = StateStore::new();
        let key = WidgetId::new("x", Role::Counter);
        store.get_or_create(&key, || CounterState::new(2, 1)).unwrap();
        assert!(store.remove(&key).is_some());
        assert!(!store.contains(&key));
        assert!(store.remove(&key).is_none());
    }
}
