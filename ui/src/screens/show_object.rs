// src/screens/show_object.rs
use api::ApiError;
use api::MwdbClient;
use api::ObjectId;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::components::favorite_action::FavoriteAction;
use crate::components::pico::Card;
use crate::object_context::ObjectContext;

/// Renders the details of one object, along with its actions.
#[component]
fn ObjectView(context: ObjectContext, client: MwdbClient) -> Element {
    let object = &context.object;
    let upload_time = object.upload_time.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let favorite = if object.favorite { "yes" } else { "no" };

    rsx! {
        Card {
            header {
                nav {
                    ul {
                        li { h3 { style: "margin: 0;", "{object.object_type.title()}" } }
                    }
                    ul {
                        class: "object-actions",
                        FavoriteAction { context: context.clone(), api: client }
                    }
                }
            }
            table {
                tbody {
                    tr {
                        th { "Identifier" }
                        td { code { "{object.id}" } }
                    }
                    if let Some(file_name) = &object.file_name {
                        tr {
                            th { "File name" }
                            td { "{file_name}" }
                        }
                    }
                    tr {
                        th { "Upload time" }
                        td { "{upload_time}" }
                    }
                    tr {
                        th { "Favorite" }
                        td { "{favorite}" }
                    }
                }
            }
            if !object.tags.is_empty() {
                div {
                    class: "object-tags",
                    for tag in object.tags.iter() {
                        mark { key: "{tag.tag}", "{tag.tag}" }
                    }
                }
            }
        }
    }
}

/// The failure of the last object action, with the callbacks that set and clear it.
#[derive(Clone, Copy)]
struct ObjectFeedback {
    error: Signal<Option<ApiError>>,
    update_object: Callback<()>,
    set_object_error: Callback<ApiError>,
}

/// Tracks action failures for an object view that re-reads its object through `reload`.
fn use_object_feedback(mut reload: impl FnMut() + 'static) -> ObjectFeedback {
    let mut error = use_signal(|| None::<ApiError>);

    let update_object = use_callback(move |()| {
        // whatever failed before is stale once the object is re-read
        error.set(None);
        reload();
    });
    let set_object_error = use_callback(move |e: ApiError| {
        tracing::warn!("object action failed: {e}");
        error.set(Some(e));
    });

    ObjectFeedback {
        error,
        update_object,
        set_object_error,
    }
}

#[component]
fn ObjectErrorBanner(error: Signal<Option<ApiError>>) -> Element {
    let message = error.read().as_ref().map(|e| e.to_string());

    rsx! {
        if let Some(message) = message {
            article {
                class: "object-error",
                role: "alert",
                "{message}"
            }
        }
    }
}

/// Loads an object and provides the context its actions work through.
#[component]
pub fn ShowObject(object_id: ObjectId, client: MwdbClient) -> Element {
    let mut object_resource = use_resource({
        let client = client.clone();
        let object_id = object_id.clone();
        move || {
            let client = client.clone();
            let object_id = object_id.clone();
            async move { client.get_object(&object_id).await }
        }
    });

    let feedback = use_object_feedback(move || object_resource.restart());

    rsx! {
        ObjectErrorBanner { error: feedback.error }
        match &*object_resource.read() {
            None => rsx! {
                Card {
                    h3 { "View Object" }
                    p { "Loading object {object_id}..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load object: {e}" }
                    button { onclick: move |_| object_resource.restart(), "Retry" }
                }
            },
            Some(Ok(object)) => {
                let context = ObjectContext {
                    object: object.clone(),
                    update_object: feedback.update_object,
                    set_object_error: feedback.set_object_error,
                };
                rsx! {
                    ObjectView { context, client: client.clone() }
                }
            }
        }
    }
}
