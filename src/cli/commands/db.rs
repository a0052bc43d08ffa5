use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::maintenance::normalize_times;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
        normalize,
    } = cmd
    {
        // Opening already applies pending migrations.
        let mut pool = DbPool::open(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let newly = run_pending_migrations(&pool.conn)?;
            if newly.is_empty() {
                println!("Schema is up to date.");
            }
            for v in applied_versions(&pool.conn)? {
                println!("  • {}", v);
            }
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) NORMALIZE
        //
        if *normalize {
            println!("{}▶ Normalizing stored times…{}", CYAN, RESET);
            let report = normalize_times(&pool.conn)?;
            println!(
                "{}✔ {} rewritten, {} cleared.{}\n",
                GREEN, report.rewritten, report.cleared, RESET
            );
        }

        //
        // 5) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
