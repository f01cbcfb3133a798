//! Turns a configured database target into a connection URL.

use std::path::Path;

/// Normalises a DSN (`sqlite:`, `postgres://`, `mysql://`) or a bare SQLite file path
/// into a connection URL.
///
/// For a bare path the parent directory is created, and the URL opens the file in
/// read-write-create mode.
pub fn to_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_owned();
    }
    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(path_or_url).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
