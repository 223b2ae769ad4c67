#![allow(warnings)]
//! HR Dashboard Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // A second init only happens under hot reload; the first logger stays
    let _ = console_logger::init(config::log_level());
    log::info!("starting HR dashboard");
    mount_to_body(App);
}
