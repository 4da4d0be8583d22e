mod app;
mod components;
mod diagnostics;
mod gate;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
