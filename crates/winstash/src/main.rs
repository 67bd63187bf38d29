use winstash_core::{events, init_logging};

mod app;
mod commands;
mod prompt;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Extract verbose flag before initializing logging
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    if let Err(e) = commands::run_command(&matches) {
        events::log_app_error(e.as_ref());
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
