use domain::items::{NewModel, PartialModel};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_is_active() -> bool {
    true
}

/// Body of a create request. `is_active` defaults to true when omitted.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateParams {
    pub(crate) name: String,
    pub(crate) price: f64,
    #[serde(default = "default_is_active")]
    pub(crate) is_active: bool,
}

impl From<CreateParams> for NewModel {
    fn from(params: CreateParams) -> Self {
        NewModel {
            name: params.name,
            price: params.price,
            is_active: params.is_active,
        }
    }
}

/// Body of a full-update request. Same shape as a create request; the item
/// identifier comes from the path and is never part of the body.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateParams {
    pub(crate) name: String,
    pub(crate) price: f64,
    #[serde(default = "default_is_active")]
    pub(crate) is_active: bool,
}

impl From<UpdateParams> for NewModel {
    fn from(params: UpdateParams) -> Self {
        NewModel {
            name: params.name,
            price: params.price,
            is_active: params.is_active,
        }
    }
}

/// Body of a partial-update request. Only fields present in the body are
/// applied; the rest retain their current value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct PatchParams {
    pub(crate) name: Option<String>,
    pub(crate) price: Option<f64>,
    pub(crate) is_active: Option<bool>,
}

impl From<PatchParams> for PartialModel {
    fn from(params: PatchParams) -> Self {
        PartialModel {
            name: params.name,
            price: params.price,
            is_active: params.is_active,
        }
    }
}
