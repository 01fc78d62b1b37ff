mod app;
mod auth;
mod dom;
mod error;
mod leaderboard;
mod nav;
mod pages;
mod plants;
mod stats;
mod storage;
mod types;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    app::start();
}
