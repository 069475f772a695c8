use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Id;

/// An item record as stored and returned to clients.
///
/// The `id` is assigned by the [`ItemStore`](crate::ItemStore) on insert and
/// is immutable afterwards: full and partial updates preserve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = items::Model)]
pub struct Model {
    pub id: Id,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
}

/// The full writable field set of an item, used for insert and replace.
/// Identifier assignment stays with the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewModel {
    pub name: String,
    pub price: f64,
    pub is_active: bool,
}

/// A partial field set for merge operations. Fields left as `None` retain
/// their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialModel {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}
