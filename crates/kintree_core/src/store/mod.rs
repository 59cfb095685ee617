//! In-memory person store, the single durable entity of the core.
//!
//! # Responsibility
//! - Own the ordered person collection (ground truth for every rebuild).
//! - Expose an explicit mutation API and an explicit change-notification
//!   channel instead of ambient reactive state.
//!
//! # Invariants
//! - Insertion order is preserved; hierarchy and layout both depend on it.
//! - Every mutation fully completes before its notification is sent, so a
//!   subscriber never observes a half-applied change.
//! - Lookups are last-write-wins: with duplicate ids the later entry shadows
//!   the earlier one. Known-lenient behavior, preserved deliberately.

use crate::model::person::{Gender, Person, PersonId, Position};
use log::info;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Change notification emitted after each completed store mutation.
///
/// Single-threaded event flow: subscribers drain their receiver after
/// invoking a mutation; no cross-thread delivery is intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// One person was appended.
    Added(PersonId),
    /// The whole collection was emptied.
    Cleared,
    /// The whole collection was atomically replaced (snapshot load).
    Replaced,
    /// A manual position was committed for one person.
    PositionSet(PersonId),
}

/// Ordered in-memory collection of person records.
#[derive(Default)]
pub struct PersonStore {
    people: Vec<Person>,
    subscribers: Vec<Sender<StoreChange>>,
}

impl PersonStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to change notifications.
    ///
    /// Returns the receiving end of a channel; one `StoreChange` arrives per
    /// completed mutation. Disconnected receivers are tolerated (their send
    /// errors are ignored), so dropping the receiver is a valid unsubscribe.
    pub fn subscribe(&mut self) -> Receiver<StoreChange> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Returns the full ordered collection.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the number of stored persons.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Looks up one person by id, last write wins on duplicates.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.iter().rev().find(|person| person.id == id)
    }

    /// Persons eligible as a selectable father in the add-person form.
    pub fn eligible_fathers(&self) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| person.gender == Gender::Male)
            .collect()
    }

    /// Persons eligible as a selectable mother in the add-person form.
    pub fn eligible_mothers(&self) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| person.gender == Gender::Female)
            .collect()
    }

    /// Appends one person.
    ///
    /// Duplicate ids are not rejected; the new entry shadows earlier ones in
    /// subsequent lookups.
    pub fn add(&mut self, person: Person) {
        let id = person.id.clone();
        self.people.push(person);
        info!("event=store_add module=store status=ok id={id}");
        self.notify(StoreChange::Added(id));
    }

    /// Removes every person.
    pub fn clear(&mut self) {
        let removed = self.people.len();
        self.people.clear();
        info!("event=store_clear module=store status=ok removed={removed}");
        self.notify(StoreChange::Cleared);
    }

    /// Atomically replaces the whole collection (snapshot load path).
    pub fn replace_all(&mut self, people: Vec<Person>) {
        let count = people.len();
        self.people = people;
        info!("event=store_replace module=store status=ok count={count}");
        self.notify(StoreChange::Replaced);
    }

    /// Commits a manual position for one person.
    ///
    /// Targets the shadowing (latest) entry when ids are duplicated. Returns
    /// `false` when the id is unknown, leaving the store untouched.
    pub fn set_position(&mut self, id: &str, position: Position) -> bool {
        let Some(person) = self.people.iter_mut().rev().find(|p| p.id == id) else {
            return false;
        };
        person.position = Some(position);
        info!(
            "event=store_set_position module=store status=ok id={id} x={} y={}",
            position.x, position.y
        );
        self.notify(StoreChange::PositionSet(id.to_string()));
        true
    }

    fn notify(&mut self, change: StoreChange) {
        // Dropped receivers are pruned lazily on send failure.
        self.subscribers
            .retain(|tx| tx.send(change.clone()).is_ok());
    }
}
