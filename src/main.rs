#![allow(warnings)]
//! Task List Frontend Entry Point

mod models;
mod progress;
mod task_list;
mod celebration;
mod controller;
mod context;
mod components;
mod app;
mod logger;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);
    log::info!(target: "app", "Mounting task list");
    mount_to_body(App);
}
