//! SQLite persistence of the analysis results
//!
//! The output store is created fresh on each run and written exactly once:
//! one `package` table, one row per analyzed package, sorted by descending
//! downloads-to-stars ratio. There is no update path.

use crate::Result;
use crate::facts::PackageAnalysis;
use camino::Utf8Path;
use ohno::IntoAppError;
use rusqlite::{Connection, params};
use std::fs;

const LOG_TARGET: &str = "     store";

/// Sort records by descending ratio, keep the top `count`, and write them to
/// a fresh database.
///
/// Any pre-existing file at `path` is deleted first. The sort is stable, so
/// records with equal ratios keep their input (descending-downloads) order.
pub fn write_analysis(path: &Utf8Path, mut records: Vec<PackageAnalysis>, count: usize) -> Result<()> {
    records.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    records.truncate(count);

    if path.exists() {
        fs::remove_file(path).into_app_err_with(|| format!("removing previous output file '{path}'"))?;
    }

    let mut conn = Connection::open(path).into_app_err_with(|| format!("creating output database '{path}'"))?;

    let _ = conn
        .execute(
            "CREATE TABLE package (
                name TEXT NOT NULL,
                downloads INTEGER NOT NULL,
                stars INTEGER NOT NULL,
                dl_to_s_ratio REAL NOT NULL
            )",
            [],
        )
        .into_app_err("creating package table")?;

    let tx = conn.transaction().into_app_err("starting insert transaction")?;
    {
        let mut stmt = tx
            .prepare("INSERT INTO package (name, downloads, stars, dl_to_s_ratio) VALUES (?1, ?2, ?3, ?4)")
            .into_app_err("preparing insert statement")?;

        for record in &records {
            let _ = stmt
                .execute(params![record.name, record.downloads, record.stars, record.ratio])
                .into_app_err_with(|| format!("inserting row for package '{}'", record.name))?;
        }
    }
    tx.commit().into_app_err("committing insert transaction")?;

    log::info!(target: LOG_TARGET, "Wrote {} row(s) to '{path}'", records.len());
    Ok(())
}
