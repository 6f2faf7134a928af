//! The favorite marker of an object and the request flow that flips it.

use api::ApiError;
use api::FavoriteApi;
use api::ObjectId;
use dioxus_logger::tracing;

use crate::components::icon::Icon;

/// Whether the displayed object is currently a favorite of the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum FavoriteStatus {
    Favorited,
    NotFavorited,
}

impl From<bool> for FavoriteStatus {
    fn from(favorite: bool) -> Self {
        if favorite {
            Self::Favorited
        } else {
            Self::NotFavorited
        }
    }
}

impl FavoriteStatus {
    /// Label of the action offered in this state. It names what a click does.
    pub fn label(self) -> &'static str {
        match self {
            Self::Favorited => "Unfavorite",
            Self::NotFavorited => "Favorite",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Favorited => Icon::StarSolid,
            Self::NotFavorited => Icon::StarRegular,
        }
    }

    /// Sends the request that flips this state: remove when favorited, add otherwise.
    pub async fn request<A: FavoriteApi>(self, api: &A, id: &ObjectId) -> Result<(), ApiError> {
        match self {
            Self::Favorited => api.remove_object_favorite(id).await,
            Self::NotFavorited => api.add_object_favorite(id).await,
        }
    }
}

/// Flips the favorite marker of `object_id` and reports the outcome.
///
/// Exactly one of the continuations runs: `on_success` once the server
/// accepted the change, `on_error` with the failure otherwise. Nothing is
/// retried and the error does not travel any further.
pub async fn toggle_favorite<A, S, E>(
    api: &A,
    status: FavoriteStatus,
    object_id: &ObjectId,
    on_success: S,
    on_error: E,
) where
    A: FavoriteApi,
    S: FnOnce(),
    E: FnOnce(ApiError),
{
    match status.request(api, object_id).await {
        Ok(()) => {
            tracing::info!("{} {object_id}: done", status.label());
            on_success();
        }
        Err(error) => {
            tracing::warn!("{} {object_id} failed: {error}", status.label());
            on_error(error);
        }
    }
}
