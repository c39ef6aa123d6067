// Linkshelf platform integration for macOS
// Config: ~/Library/Application Support/Linkshelf
// URL opener: open

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Linkshelf on macOS.
/// `~/Library/Application Support/Linkshelf`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Linkshelf")
}

/// Opens a URL in the default browser via `open`.
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}
