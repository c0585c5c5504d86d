//! Entry point for the WASM application

use leptos::*;
use talenthub_frontend::{init_logging, App};

pub fn main() {
    init_logging();
    mount_to_body(|| view! { <App/> })
}
