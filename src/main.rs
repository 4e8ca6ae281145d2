#![allow(warnings)]
//! Task Timer Frontend Entry Point

mod config;
mod timer;
mod tasks;
mod widget;
mod ticker;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    log::info!("[APP] mounting task timer");
    mount_to_body(App);
}
