use sea_orm::Database;
use sea_orm_migration::prelude::*;

const USAGE: &str = "Usage: cargo run -p migration -- [up|down|fresh|status]";

/// `DATABASE_URL` wins; otherwise the app's `EXPENSE_TRACKER_SERVER__DATABASE`
/// setting (`memory` or a SQLite path) is turned into a connection string.
fn database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }
    let database = std::env::var("EXPENSE_TRACKER_SERVER__DATABASE")
        .unwrap_or_else(|_| "./expenses.db".to_string());
    match database.trim() {
        "memory" | ":memory:" => "sqlite::memory:".to_string(),
        path => format!("sqlite:{path}?mode=rwc"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let db = Database::connect(&database_url()).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, None).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        "status" => migration::Migrator::status(&db).await?,
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
