use clap::Parser;
use log::error;
use shared::{
    config::ViewerConfig,
    env,
    graphics::{log_error, start_graphics},
    logger,
};

/// 🌀 Mandelbrot viewer
///
/// Pan with the arrow keys, quit with Escape.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    env::init();
    logger::init();

    if let Err(e) = start_graphics(ViewerConfig::default()) {
        log_error("start_graphics", e);
        error!("Unable to open the viewer, exiting");
        std::process::exit(1);
    }
}
