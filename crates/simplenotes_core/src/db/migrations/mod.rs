//! Ordered schema steps for the notes database.
//!
//! Step `n` in [`SCHEMA_STEPS`] upgrades the schema from version `n` to
//! `n + 1`, and `PRAGMA user_version` records how many steps have run.
//! Steps are append-only; editing a shipped step would fork existing files.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

const SCHEMA_STEPS: &[&str] = &[include_str!("0001_kv_store.sql")];

/// Schema version a fully migrated database reports.
pub fn target_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Brings `conn` up to [`target_version`].
///
/// Pending steps run inside one transaction, so a failing step leaves the
/// file at its previous version.
///
/// # Errors
/// - `DbError::SchemaTooNew` when the file is ahead of this build.
/// - `DbError::Sqlite` when a step fails.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let target = target_version();

    if found > target {
        return Err(DbError::SchemaTooNew {
            found,
            supported: target,
        });
    }
    if found == target {
        debug!("event=db_migrate module=db status=skip version={found}");
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (index, step) in SCHEMA_STEPS.iter().enumerate().skip(found as usize) {
        let version = index as u32 + 1;
        tx.execute_batch(step)?;
        tx.pragma_update(None, "user_version", version)?;
        debug!("event=db_migrate module=db status=step version={version}");
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={found} to_version={target}");
    Ok(())
}
