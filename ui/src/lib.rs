// The client-side Dioxus application logic.

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod components;
pub mod favorite;
pub mod object_context;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use api::MwdbClient;
use api::ObjectId;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Card;
use components::pico::Container;
use screens::show_object::ShowObject;

pub use components::favorite_action::FavoriteAction;
pub use components::icon::Icon;
pub use components::object_action::ObjectAction;
pub use favorite::FavoriteStatus;
pub use object_context::ObjectContext;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6/css/all.min.css";

/// Log level for the launchers.
///
/// Taken from `MWDB_LOG_LEVEL` (`error`, `warn`, `info`, `debug` or `trace`),
/// looked up at runtime first and at build time second. Defaults to INFO.
pub fn log_level() -> Level {
    std::env::var("MWDB_LOG_LEVEL")
        .ok()
        .or_else(|| option_env!("MWDB_LOG_LEVEL").map(str::to_owned))
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO)
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header nav {
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .object-lookup {
        display: flex;
        gap: 0.5rem;
        align-items: center;
        margin: 0;
    }
    .object-lookup input { margin: 0; min-width: 28rem; }
    .object-lookup button { margin: 0; }

    /* --- ACTION BAR --- */
    .object-actions .object-action a {
        display: inline-flex;
        gap: 0.4rem;
        align-items: center;
        text-decoration: none;
    }

    .object-error {
        color: var(--pico-del-color);
        border-left: 4px solid var(--pico-del-color);
    }

    .object-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        document::Stylesheet { href: FONT_AWESOME_CSS }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

/// Builds the API client from the user's prefs, then hands over to the app proper.
#[component]
fn AppBody() -> Element {
    let client = use_hook(|| {
        let user_prefs = UserPrefs::default();
        dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);
        MwdbClient::new(user_prefs.client_prefs().clone()).map_err(|e| e.to_string())
    });

    match client {
        Ok(client) => rsx! {
            LoadedApp { client }
        },
        Err(e) => rsx! {
            Container {
                Card {
                    h3 { "Configuration error" }
                    p { "{e}" }
                }
            }
        },
    }
}

/// This component holds the main app logic and only runs once the client exists.
#[component]
fn LoadedApp(client: MwdbClient) -> Element {
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<ObjectId>);

    let mut open_object = move || {
        let hash = query.read().trim().to_string();
        if !hash.is_empty() {
            selected.set(Some(ObjectId::from(hash)));
        }
    };

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li { strong { "mwdb" } }
                        }
                        ul {
                            li {
                                div {
                                    class: "object-lookup",
                                    input {
                                        r#type: "search",
                                        placeholder: "Object hash",
                                        value: "{query}",
                                        oninput: move |evt| query.set(evt.value()),
                                        onkeydown: move |evt| {
                                            if evt.key() == Key::Enter {
                                                open_object();
                                            }
                                        },
                                    }
                                    Button {
                                        button_type: ButtonType::Secondary,
                                        on_click: move |_| open_object(),
                                        "Open"
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match selected() {
                        Some(object_id) => {
                            let key = object_id.to_string();
                            rsx! {
                                ShowObject {
                                    key: "{key}",
                                    object_id,
                                    client: client.clone(),
                                }
                            }
                        }
                        None => rsx! {
                            Card {
                                h3 { "No object selected" }
                                p { "Enter the hash of a file, config or blob to view it." }
                            }
                        },
                    }
                }
            }
        }
    }
}
