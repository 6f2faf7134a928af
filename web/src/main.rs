use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // the browser has no environment, the level comes from the build
    dioxus_logger::init(ui::log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
