use std::io::Write;

use chrono::Local;
use colored::Colorize;
use env_logger::{Builder, Env};
use log::Level;

/// Installs the global logger. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => "ERROR".red().bold(),
                Level::Warn => "WARN ".yellow(),
                Level::Info => "INFO ".green(),
                Level::Debug => "DEBUG".blue(),
                Level::Trace => "TRACE".dimmed(),
            };
            writeln!(
                buf,
                "{} {} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
                level,
                record.target(),
                record.args()
            )
        })
        .init();
}
