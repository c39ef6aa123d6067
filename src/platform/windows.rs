// Linkshelf platform integration for Windows
// Config: %APPDATA%/Linkshelf
// URL opener: cmd /c start

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Returns the configuration directory for Linkshelf on Windows.
/// `%APPDATA%/Linkshelf`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Linkshelf")
}

/// Opens a URL in the default browser via `cmd /c start`.
pub fn open_url(url: &str) -> io::Result<()> {
    Command::new("cmd")
        .args(["/c", "start", "", url])
        .spawn()
        .map(|_| ())
}
