use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap: create the scenario table on first run.
    let check_scenario_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='a001_scenario';
    "#;
    let scenario_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_scenario_table.to_string(),
        ))
        .await?;

    if scenario_table_exists.is_empty() {
        tracing::info!("Creating a001_scenario table");
        let create_scenario_table_sql = r#"
            CREATE TABLE a001_scenario (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                description TEXT,
                scenario_type TEXT NOT NULL DEFAULT 'what_if',
                parameters TEXT NOT NULL DEFAULT '{}',
                revenue_impact REAL NOT NULL DEFAULT 0,
                cost_impact REAL NOT NULL DEFAULT 0,
                margin_impact REAL NOT NULL DEFAULT 0,
                probability REAL NOT NULL DEFAULT 0,
                status TEXT NOT NULL DEFAULT 'draft',
                created_by TEXT NOT NULL DEFAULT 'system',
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                is_deleted INTEGER NOT NULL DEFAULT 0
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_scenario_table_sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
