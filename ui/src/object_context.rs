//! The capabilities an object view hands down to its actions.

use api::ApiError;
use api::ObjectSummary;
use dioxus::prelude::*;

use crate::favorite::FavoriteStatus;

/// The displayed object, plus the ways an action may affect the view around it.
///
/// Actions never change `object` themselves. They ask the view to
/// re-fetch it through `update_object`, or hand a failure to
/// `set_object_error`, which shows it next to the object.
#[derive(Clone, PartialEq)]
pub struct ObjectContext {
    pub object: ObjectSummary,
    pub update_object: Callback<()>,
    pub set_object_error: Callback<ApiError>,
}

impl ObjectContext {
    pub fn favorite_status(&self) -> FavoriteStatus {
        FavoriteStatus::from(self.object.favorite)
    }
}
