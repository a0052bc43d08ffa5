use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> rusqlite::Result<()>,
}

/// Ordered schema history. Each entry runs once and is recorded in `log`.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260302_0001_create_trades",
        description: "Created trades table",
        apply: create_trades_table,
    },
    Migration {
        version: "20260419_0002_add_trade_emotions",
        description: "Added emotions column to trades",
        apply: add_emotions_column,
    },
    Migration {
        version: "20260611_0003_add_trade_notes",
        description: "Added notes column to trades",
        apply: add_notes_column,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn create_trades_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS trades (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            date         TEXT NOT NULL,
            symbol       TEXT NOT NULL,
            side         TEXT NOT NULL CHECK(side IN ('long','short')),
            quantity     REAL NOT NULL CHECK(quantity > 0),
            entry_price  REAL NOT NULL CHECK(entry_price > 0),
            exit_price   REAL,
            entry_time   TEXT NOT NULL DEFAULT '',
            exit_time    TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trades_date ON trades(date);
        CREATE INDEX IF NOT EXISTS idx_trades_symbol ON trades(symbol);
        "#,
    )
}

fn add_emotions_column(conn: &Connection) -> rusqlite::Result<()> {
    if table_has_column(conn, "trades", "emotions")? {
        return Ok(());
    }
    conn.execute_batch("ALTER TABLE trades ADD COLUMN emotions TEXT NOT NULL DEFAULT '';")
}

fn add_notes_column(conn: &Connection) -> rusqlite::Result<()> {
    if table_has_column(conn, "trades", "notes")? {
        return Ok(());
    }
    conn.execute_batch("ALTER TABLE trades ADD COLUMN notes TEXT NOT NULL DEFAULT '';")
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, returning the versions
/// applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        (m.apply)(&tx).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        ttlog(&tx, "migration_applied", m.version, m.description)?;
        tx.commit()?;

        applied.push(m.version);
    }

    Ok(applied)
}
