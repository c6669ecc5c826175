//! In-memory person records, guarded by a single lock.
//!
//! Records are indexed by id for identity operations. A separate id vector
//! keeps insertion order for listing and for first-match name search.

use crate::seed;
use parking_lot::Mutex;
use person_store_types::{Person, PersonPatch};
use serde_json::Map;
use std::collections::HashMap;

/// Failure kinds surfaced to callers. The display text is the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid input parameter")]
    InvalidArgument,
    #[error("Person not found")]
    NotFound,
    #[error("Person already exists")]
    AlreadyExists,
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Default)]
struct Records {
    by_id: HashMap<String, Person>,
    order: Vec<String>,
}

pub struct RecordStore {
    records: Mutex<Records>,
}

impl RecordStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Records::default()),
        }
    }

    /// Store pre-filled with the five seed people.
    pub fn seeded() -> Self {
        Self::from_people(seed::seed_people())
    }

    /// Builds a store from `people` in order. Later duplicates of an id are dropped.
    pub fn from_people(people: Vec<Person>) -> Self {
        let mut records = Records::default();
        for person in people {
            if records.by_id.contains_key(&person.id) {
                log::warn!("Skipping duplicate id while loading store: {}", person.id);
                continue;
            }
            records.order.push(person.id.clone());
            records.by_id.insert(person.id.clone(), person);
        }
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn list(&self) -> Vec<Person> {
        let records = self.records.lock();
        records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.records.lock().order.len()
    }

    pub fn find_by_id(&self, id: &str) -> StoreResult<Person> {
        self.records
            .lock()
            .by_id
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// First person, in insertion order, whose first name contains `query`
    /// ignoring case.
    pub fn search_by_first_name(&self, query: &str) -> StoreResult<Person> {
        if query.is_empty() {
            return Err(StoreError::InvalidArgument);
        }
        let needle = query.to_lowercase();
        let records = self.records.lock();
        records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id))
            .find(|p| p.first_name.to_lowercase().contains(&needle))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub fn insert(&self, id: &str, fields: PersonPatch) -> StoreResult<()> {
        validate(&fields)?;
        let mut records = self.records.lock();
        if records.by_id.contains_key(id) {
            return Err(StoreError::AlreadyExists);
        }
        let mut person = Person {
            id: id.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            graduation_year: None,
            address: None,
            city: None,
            zip: None,
            country: None,
            avatar: None,
            extra: Map::new(),
        };
        merge(&mut person, fields);
        records.order.push(person.id.clone());
        records.by_id.insert(person.id.clone(), person);
        Ok(())
    }

    /// Merges `fields` into the stored person. The payload itself must carry
    /// both names, whichever fields it actually changes.
    pub fn update(&self, id: &str, fields: PersonPatch) -> StoreResult<()> {
        validate(&fields)?;
        let mut records = self.records.lock();
        let person = records.by_id.get_mut(id).ok_or(StoreError::NotFound)?;
        merge(person, fields);
        Ok(())
    }

    /// Removes the person and returns its id.
    pub fn delete(&self, id: &str) -> StoreResult<String> {
        let mut records = self.records.lock();
        let removed = records.by_id.remove(id).ok_or(StoreError::NotFound)?;
        if let Some(pos) = records.order.iter().position(|x| x == id) {
            records.order.remove(pos);
        }
        Ok(removed.id)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(fields: &PersonPatch) -> StoreResult<()> {
    if fields.has_required_names() {
        Ok(())
    } else {
        Err(StoreError::InvalidArgument)
    }
}

// `id` is never touched here.
fn merge(person: &mut Person, fields: PersonPatch) {
    if let Some(v) = fields.first_name {
        person.first_name = v;
    }
    if let Some(v) = fields.last_name {
        person.last_name = v;
    }
    if let Some(v) = fields.graduation_year {
        person.graduation_year = v;
    }
    if let Some(v) = fields.address {
        person.address = v;
    }
    if let Some(v) = fields.city {
        person.city = v;
    }
    if let Some(v) = fields.zip {
        person.zip = v;
    }
    if let Some(v) = fields.country {
        person.country = v;
    }
    if let Some(v) = fields.avatar {
        person.avatar = v;
    }
    person.extra.extend(fields.extra);
}
