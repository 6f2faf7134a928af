use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(ui::log_level()).expect("failed to init logger");

    let window = WindowBuilder::new().with_title("MWDB");
    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
