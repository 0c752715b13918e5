mod app;
mod browser;
mod components;
mod config;
mod error;
mod history;
mod refresh;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
