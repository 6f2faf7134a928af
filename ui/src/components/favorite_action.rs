use api::FavoriteApi;
use dioxus::prelude::*;

use crate::components::object_action::ObjectAction;
use crate::favorite::toggle_favorite;
use crate::object_context::ObjectContext;

/// Marks or unmarks the displayed object as a favorite of the current user.
///
/// Label and icon are derived from `context.object.favorite` on every
/// render. A click spawns the request through `api` and returns at once.
/// The outcome lands in `context`: a refresh on success, the error
/// otherwise. Clicks are not deduplicated, every one of them sends its own
/// request.
#[component]
pub fn FavoriteAction<A: FavoriteApi + Clone + PartialEq + 'static>(
    context: ObjectContext,
    api: A,
) -> Element {
    let status = context.favorite_status();
    let object_id = context.object.id.clone();
    let ObjectContext {
        update_object,
        set_object_error,
        ..
    } = context;

    rsx! {
        ObjectAction {
            label: status.label(),
            icon: status.icon(),
            action: move |_| {
                let api = api.clone();
                let object_id = object_id.clone();
                spawn(async move {
                    toggle_favorite(
                        &api,
                        status,
                        &object_id,
                        move || update_object.call(()),
                        move |error| set_object_error.call(error),
                    )
                    .await;
                });
            },
        }
    }
}
