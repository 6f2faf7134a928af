use dioxus::prelude::*;

use crate::components::icon::Icon;
use crate::components::icon::IconView;

#[derive(Props, Clone, PartialEq)]
pub struct ObjectActionProps {
    pub label: &'static str,
    pub icon: Icon,
    pub action: EventHandler<()>,
}

/// One entry of an object's action bar: an icon and a label that run `action` when clicked.
///
/// Must be placed inside a `ul`.
#[component]
pub fn ObjectAction(props: ObjectActionProps) -> Element {
    rsx! {
        li {
            class: "object-action",
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    // keep the browser from following the "#" link
                    evt.prevent_default();
                    props.action.call(());
                },
                IconView { icon: props.icon }
                span { class: "object-action-label", "{props.label}" }
            }
        }
    }
}
