//! The session's authoritative collection of user records.
//!
//! Insertion order is display order. Every successful mutation is pushed to the
//! registered observers synchronously, after the collection has been updated;
//! a failed mutation notifies nobody.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use roster_types::{Age, SubscriptionId, UserId, UserName, UserRecord};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no user with id {0}")]
    NotFound(UserId),
}

/// What changed in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    Added(UserId),
    Edited(UserId),
    Removed(UserId),
}

type Observer = Box<dyn FnMut(&RegistryEvent, &[UserRecord])>;

pub struct RegistryStore {
    records: Vec<UserRecord>,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegistryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryStore")
            .field("records", &self.records)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl RegistryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Register an observer called after every successful mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&RegistryEvent, &[UserRecord]) + 'static,
    {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Append a new record with a fresh id.
    pub fn add(&mut self, name: UserName, age: Age) -> UserRecord {
        let id = UserId::new(self.next_id);
        self.next_id += 1;

        let record = UserRecord::new(id, name, age);
        self.records.push(record.clone());
        debug!(%id, name = %record.name, age = %record.age, "User added");
        self.notify(RegistryEvent::Added(id));
        record
    }

    /// Replace name and age of `id` in place. Id and position are preserved.
    pub fn edit(&mut self, id: UserId, name: UserName, age: Age) -> Result<(), RegistryError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            warn!(%id, "Edit requested for unknown user");
            return Err(RegistryError::NotFound(id));
        };
        record.name = name;
        record.age = age;
        debug!(%id, name = %record.name, age = %record.age, "User edited");
        self.notify(RegistryEvent::Edited(id));
        Ok(())
    }

    pub fn remove(&mut self, id: UserId) -> Result<UserRecord, RegistryError> {
        let Some(index) = self.position(id) else {
            warn!(%id, "Remove requested for unknown user");
            return Err(RegistryError::NotFound(id));
        };
        let removed = self.records.remove(index);
        debug!(%id, "User removed");
        self.notify(RegistryEvent::Removed(id));
        Ok(removed)
    }

    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn position(&self, id: UserId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn notify(&mut self, event: RegistryEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event, &self.records);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::*;

    fn name(raw: &str) -> UserName {
        UserName::new(raw).unwrap()
    }

    fn age(years: f64) -> Age {
        Age::new(years).unwrap()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = RegistryStore::new();
        store.add(name("Ann"), age(30.0));
        store.add(name("Bob"), age(25.0));

        let names: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn add_grows_by_one_with_unique_ids() {
        let mut store = RegistryStore::new();
        let mut seen = HashSet::new();
        for i in 1..=5 {
            let before = store.len();
            let record = store.add(name("User"), age(f64::from(i)));
            assert_eq!(store.len(), before + 1);
            assert!(seen.insert(record.id), "duplicate id {}", record.id);
        }
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = RegistryStore::new();
        let first = store.add(name("Ann"), age(30.0));
        store.remove(first.id).unwrap();
        let second = store.add(name("Bob"), age(25.0));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn edit_preserves_position_and_id() {
        let mut store = RegistryStore::new();
        store.add(name("Ann"), age(30.0));
        let bob = store.add(name("Bob"), age(25.0));
        store.add(name("Cy"), age(40.0));

        store.edit(bob.id, name("Robert"), age(26.0)).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.position(bob.id), Some(1));
        let edited = store.get(bob.id).unwrap();
        assert_eq!(edited.name.as_str(), "Robert");
        assert_eq!(edited.age, age(26.0));
    }

    #[test]
    fn edit_unknown_id_is_not_found() {
        let mut store = RegistryStore::new();
        store.add(name("Ann"), age(30.0));
        let missing = UserId::new(99);
        assert_eq!(
            store.edit(missing, name("X"), age(1.0)),
            Err(RegistryError::NotFound(missing))
        );
        assert_eq!(store.records()[0].name.as_str(), "Ann");
    }

    #[test]
    fn remove_returns_record_and_unknown_is_not_found() {
        let mut store = RegistryStore::new();
        let ann = store.add(name("Ann"), age(30.0));
        assert_eq!(store.remove(ann.id).unwrap(), ann);
        assert!(store.is_empty());
        assert_eq!(store.remove(ann.id), Err(RegistryError::NotFound(ann.id)));
    }

    #[test]
    fn observers_see_updated_collection() {
        let mut store = RegistryStore::new();
        let seen: Rc<RefCell<Vec<(RegistryEvent, usize)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |event, records| sink.borrow_mut().push((*event, records.len())));

        let ann = store.add(name("Ann"), age(30.0));
        store.edit(ann.id, name("Ann"), age(31.0)).unwrap();
        store.remove(ann.id).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                (RegistryEvent::Added(ann.id), 1),
                (RegistryEvent::Edited(ann.id), 1),
                (RegistryEvent::Removed(ann.id), 0),
            ]
        );
    }

    #[test]
    fn failed_mutations_do_not_notify() {
        let mut store = RegistryStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        let missing = UserId::new(7);
        let _ = store.edit(missing, name("X"), age(1.0));
        let _ = store.remove(missing);

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = RegistryStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.add(name("Ann"), age(30.0));
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add(name("Bob"), age(25.0));

        assert_eq!(*count.borrow(), 1);
    }
}
