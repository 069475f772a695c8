//! Item CRUD operations.
//!
//! Each operation wraps the corresponding store operation with existence
//! checks and field validation, and publishes exactly one domain event per
//! successful mutation. The event is published after the store mutation has
//! been applied and before the operation returns to its caller.

use events::{DomainEvent, EventPublisher};
use log::debug;
use store::items::{Model, NewModel, PartialModel};
use store::{Id, ItemStore};

use crate::error::Error;

/// Return all current items. No failure mode.
pub fn find_all(store: &ItemStore) -> Vec<Model> {
    store.list()
}

pub fn find_by_id(store: &ItemStore, id: Id) -> Result<Model, Error> {
    Ok(store.get(id)?)
}

/// Create a new item. The store assigns the identifier.
pub async fn create(
    store: &ItemStore,
    publisher: &EventPublisher,
    new_item: NewModel,
) -> Result<Model, Error> {
    validate_price(new_item.price)?;

    let item = store.insert(new_item);
    debug!("Created item {}", item.id);

    publisher
        .publish(DomainEvent::ItemCreated {
            id: item.id,
            name: item.name.clone(),
        })
        .await;

    Ok(item)
}

/// Fully replace an existing item, preserving its identifier.
/// A missing id fails before validation so that clients referencing an
/// unknown item always see not-found.
pub async fn update(
    store: &ItemStore,
    publisher: &EventPublisher,
    id: Id,
    new_item: NewModel,
) -> Result<Model, Error> {
    store.get(id)?;
    validate_price(new_item.price)?;

    let item = store.replace(id, new_item)?;
    debug!("Updated item {}", item.id);

    publisher
        .publish(DomainEvent::ItemUpdated {
            id: item.id,
            name: item.name.clone(),
        })
        .await;

    Ok(item)
}

/// Apply only the supplied fields to an existing item.
pub async fn patch(
    store: &ItemStore,
    publisher: &EventPublisher,
    id: Id,
    partial: PartialModel,
) -> Result<Model, Error> {
    store.get(id)?;
    if let Some(price) = partial.price {
        validate_price(price)?;
    }

    let item = store.merge(id, partial)?;
    debug!("Patched item {}", item.id);

    publisher
        .publish(DomainEvent::ItemPatched {
            id: item.id,
            name: item.name.clone(),
        })
        .await;

    Ok(item)
}

/// Delete an existing item, returning the removed record.
pub async fn delete(
    store: &ItemStore,
    publisher: &EventPublisher,
    id: Id,
) -> Result<Model, Error> {
    let item = store.remove(id)?;
    debug!("Deleted item {}", item.id);

    publisher
        .publish(DomainEvent::ItemDeleted {
            id: item.id,
            name: item.name.clone(),
        })
        .await;

    Ok(item)
}

fn validate_price(price: f64) -> Result<(), Error> {
    if price > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid())
    }
}
