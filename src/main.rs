#![allow(dead_code)]
//! Kanban Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod dates;
mod editor;
mod error;
mod models;
mod repository;
#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
