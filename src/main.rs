//! Standalone cabinet viewer.
//!
//! Usage: `vitrina [options.toml]`. Without an argument the built-in
//! defaults are used.

use std::path::Path;

use vitrina::{options::Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let result = Viewer::builder()
        .with_title("Vitrina")
        .with_options(options)
        .build()
        .run();

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
