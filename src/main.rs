#![allow(warnings)]
//! UMKM Admin Frontend Entry Point

mod models;
mod config;
mod commands;
mod auth;
mod toast;
mod navigation;
mod store;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}
