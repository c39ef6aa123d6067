// Linkshelf platform integration for Linux
// Config: ~/.config/linkshelf
// URL opener: xdg-open

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Returns the configuration directory for Linkshelf on Linux.
/// Uses `$XDG_CONFIG_HOME/linkshelf` if set, otherwise `~/.config/linkshelf`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkshelf")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkshelf")
    }
}

/// Opens a URL in the desktop's default handler via `xdg-open`.
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
