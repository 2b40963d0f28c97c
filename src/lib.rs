//! A feedback button for the Gebäudebrüter map pages.
//!
//! The button is a fixed anchor in the corner of the page opening the mail client with a
//! pre-filled recipient and subject. Load the wasm module and call [`run`] from the host page:
//!
//! ```js
//! import init, { run } from "./gb_feedback.js";
//!
//! await init();
//! run({ hoverEffectEnabled: true });
//! ```
#![deny(unused_crate_dependencies)]

mod config;
mod consts;
pub mod dom;
mod error;
mod injector;
mod launcher;
mod logger;
mod mailto;
mod style;

use wasm_bindgen::prelude::*;

pub use config::{Colors, Config, Corner, Position};
pub use error::Error;
pub use injector::{ensure_feedback_button, initialize_once, Outcome};
pub use launcher::FeedbackLauncher;
pub use mailto::{MailtoUri, ParseMailtoError};
pub use style::Style;

/// Inserts the feedback button into the global document.
///
/// `config` is a plain object with the fields of [`Config`]; `undefined` selects the default
/// button. Errors are written to the console and never thrown.
#[wasm_bindgen]
pub fn run(config: JsValue) {
    let config = match Config::from_js(config) {
        Ok(config) => config,
        Err(err) => {
            // SAFETY: Called from a single threaded context. No race conditions can occur.
            unsafe {
                logger::init(Config::default().log_level);
            }

            log::error!("gb_feedback init error: {}", err);
            return;
        }
    };

    run_with_config(config);
}

pub fn run_with_config(config: Config) -> Outcome {
    // SAFETY: Called from a single threaded context. No race conditions can occur.
    unsafe {
        logger::init(config.log_level);
    }

    let document = match dom::web::Document::global() {
        Ok(document) => document,
        Err(err) => {
            log::error!("gb_feedback init error: {}", err);
            return Outcome::Failed;
        }
    };

    ensure_feedback_button(&document, &config)
}
