#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod carousel;
mod chart;
mod config;
mod content;
mod error;
mod logging;
mod motion;
mod parallax;
mod particles;
mod state;
mod theme;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();

    let config = browser::runtime_config();
    if let Err(error) = frontend::run() {
        logging::log_event(
            &config,
            logging::LogLevel::Warn,
            "page.mount_failed",
            serde_json::json!({ "error": error.to_string() }),
        );
    }
}
