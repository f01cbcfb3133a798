use std::{env, fs, path::PathBuf};
use util::{config, db_url};

mod runner;

#[tokio::main]
async fn main() {
    let url = db_url::to_url(&config::database_url());
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&url);
        }
        Some("fresh") => {
            remove_db_file(&url);
            create_db_dir(&url);
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(&url);
            runner::run_all_migrations(&url).await;
        }
    }
}

/// Resolves the on-disk file behind a `sqlite://` URL, ignoring in-memory databases.
fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

fn remove_db_file(url: &str) {
    let Some(db_path) = sqlite_file_path(url) else {
        println!("Not a SQLite file database, nothing to delete: {url}");
        return;
    };
    if db_path.exists() {
        match fs::remove_file(&db_path) {
            Ok(()) => println!("Deleted DB: {}", db_path.display()),
            Err(err) => println!("Failed to delete DB {}: {err}", db_path.display()),
        }
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(url: &str) {
    if let Some(parent) = sqlite_file_path(url).as_deref().and_then(|p| p.parent()) {
        fs::create_dir_all(parent).ok();
    }
}
