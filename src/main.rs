#![allow(warnings)]
//! Todo List Frontend Entry Point

mod models;
mod tasks;
mod storage;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App completion_enabled=true /> });
}
