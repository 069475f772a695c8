//! In-memory item storage for the live items service.
//!
//! The store owns all item state: a map from identifier to item record plus a
//! monotonically increasing identifier counter. Identifiers are only ever
//! produced by [`ItemStore::insert`]; they are never reused after deletion
//! because the counter is never decremented.
//!
//! The store performs no field validation. Constraints such as `price > 0`
//! are enforced by the `domain` layer before any write reaches the store.
//!
//! All state lives behind a single `RwLock`, keeping each operation atomic
//! under the multithreaded tokio runtime. Operations are synchronous and
//! never suspend.

use std::collections::BTreeMap;
use std::sync::RwLock;

use log::debug;

pub mod error;
pub mod items;

use error::Error;
use items::{Model, NewModel, PartialModel};

/// A type alias that represents an item's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = u64;

struct StoreState {
    items: BTreeMap<Id, Model>,
    counter: Id,
}

/// Process-wide item storage. Constructed once at startup and shared behind
/// an `Arc` through the application state.
pub struct ItemStore {
    state: RwLock<StoreState>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                items: BTreeMap::new(),
                counter: 0,
            }),
        }
    }

    /// Look up a single item by id - O(log n)
    pub fn get(&self, id: Id) -> Result<Model, Error> {
        let state = self.state.read().expect("item store lock poisoned");
        state.items.get(&id).cloned().ok_or_else(Error::record_not_found)
    }

    /// Return all current items in insertion order. Identifiers are monotonic,
    /// so ascending key order is insertion order.
    pub fn list(&self) -> Vec<Model> {
        let state = self.state.read().expect("item store lock poisoned");
        state.items.values().cloned().collect()
    }

    /// Insert a new item, assigning the next identifier. The counter advances
    /// exactly once per insert and is never reset, so every assigned id is
    /// strictly greater than all previously assigned ids.
    pub fn insert(&self, new_item: NewModel) -> Model {
        let mut state = self.state.write().expect("item store lock poisoned");
        state.counter += 1;
        let item = Model {
            id: state.counter,
            name: new_item.name,
            price: new_item.price,
            is_active: new_item.is_active,
        };
        state.items.insert(item.id, item.clone());
        item
    }

    /// Overwrite all fields of an existing item, preserving its identifier.
    pub fn replace(&self, id: Id, new_item: NewModel) -> Result<Model, Error> {
        let mut state = self.state.write().expect("item store lock poisoned");
        let item = state.items.get_mut(&id).ok_or_else(Error::record_not_found)?;
        item.name = new_item.name;
        item.price = new_item.price;
        item.is_active = new_item.is_active;
        Ok(item.clone())
    }

    /// Overwrite only the fields present in `partial`; absent fields retain
    /// their current value.
    pub fn merge(&self, id: Id, partial: PartialModel) -> Result<Model, Error> {
        let mut state = self.state.write().expect("item store lock poisoned");
        let item = state.items.get_mut(&id).ok_or_else(Error::record_not_found)?;
        if let Some(name) = partial.name {
            item.name = name;
        }
        if let Some(price) = partial.price {
            item.price = price;
        }
        if let Some(is_active) = partial.is_active {
            item.is_active = is_active;
        }
        Ok(item.clone())
    }

    /// Delete an item, returning the removed record so callers can reference
    /// it in notifications.
    pub fn remove(&self, id: Id) -> Result<Model, Error> {
        let mut state = self.state.write().expect("item store lock poisoned");
        state.items.remove(&id).ok_or_else(Error::record_not_found)
    }

    /// Drop all items. The counter is left untouched so identifiers stay
    /// unique for the lifetime of the process.
    pub fn clear(&self) {
        let mut state = self.state.write().expect("item store lock poisoned");
        state.items.clear();
    }

    pub fn len(&self) -> usize {
        let state = self.state.read().expect("item store lock poisoned");
        state.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-populate a fresh store with the startup data set: items 1..=3 named
/// `Item {id}` priced at `id * 10.0`, all active. Goes through `insert` so
/// the counter invariant holds for subsequent creates.
pub fn seed(store: &ItemStore) {
    for i in 1..=3u64 {
        let item = store.insert(NewModel {
            name: format!("Item {i}"),
            price: i as f64 * 10.0,
            is_active: true,
        });
        debug!("Seeded item {} ({})", item.id, item.name);
    }
}
