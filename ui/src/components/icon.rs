use dioxus::prelude::*;

/// Font Awesome icons used by the object actions.
/// The stylesheet is linked by `App`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Filled star.
    StarSolid,
    /// Outline star.
    StarRegular,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::StarSolid => "fa-solid fa-star",
            Icon::StarRegular => "fa-regular fa-star",
        }
    }
}

#[component]
pub fn IconView(icon: Icon) -> Element {
    rsx! {
        i {
            class: icon.class(),
            "aria-hidden": "true",
        }
    }
}
