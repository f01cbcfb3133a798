use colored::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration in order, printing one status line per migration.
///
/// Exits the process with status 1 on the first failure.
pub async fn run_all_migrations(url: &str) {
    let db = match sea_orm::Database::connect(url).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "DB connection failed:".red(), err);
            std::process::exit(1);
        }
    };

    println!("Running migrations...");
    if apply_pending(&db).await.is_err() {
        std::process::exit(1);
    }
}

/// Applies pending migrations one step at a time through the migrator, so each applied
/// migration is recorded in `seaql_migrations` and the api sees the same history.
///
/// Returns how many migrations were applied.
pub async fn apply_pending(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
        return Ok(0);
    }

    for migration in &pending {
        let name_str = format!("Applying {}", migration.name().bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
        print!("{}{} ", name_str, dots);
        io::stdout().flush().ok();

        let start = Instant::now();
        match Migrator::up(db, Some(1)).await {
            Ok(()) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
            Err(err) => {
                println!("{} {}", "failed".red(), err);
                return Err(err);
            }
        }
    }

    Ok(pending.len())
}
