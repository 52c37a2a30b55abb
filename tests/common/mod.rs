//! Shared helpers for the integration tests: an in-memory SQLite database
//! reached through sqlx's `Any` driver, plus the parent/child schema the
//! lifecycle tests insert into.

use std::sync::Once;

use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlseed::prelude::*;

static DRIVERS: Once = Once::new();

/// Opens a fresh in-memory database with the test schema.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test.
pub async fn test_pool() -> AnyPool {
	init_tracing();
	DRIVERS.call_once(install_default_drivers);
	let pool = AnyPoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.expect("failed to open in-memory database");
	for ddl in [
		"CREATE TABLE parent (id INTEGER PRIMARY KEY, name TEXT)",
		"CREATE TABLE child (id INTEGER PRIMARY KEY, name TEXT, parent_id INTEGER REFERENCES parent(id))",
		"CREATE TABLE markers (phase TEXT)",
	] {
		sqlx::query(ddl).execute(&pool).await.expect("schema setup failed");
	}
	pool
}

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
}

/// Rows in a table.
pub async fn count(pool: &AnyPool, table: &str) -> i64 {
	let sql = format!("SELECT count(*) FROM {table}");
	let row: (i64,) = sqlx::query_as(&sql)
		.fetch_one(pool)
		.await
		.expect("count query failed");
	row.0
}

/// `(id, name)` pairs of a table, ordered by id.
pub async fn id_name_rows(pool: &AnyPool, table: &str) -> Vec<(i64, String)> {
	let sql = format!("SELECT id, name FROM {table} ORDER BY id");
	sqlx::query_as(&sql)
		.fetch_all(pool)
		.await
		.expect("select query failed")
}

/// Recorded set-up / tear-down marker phases, in insertion order.
pub async fn marker_phases(pool: &AnyPool) -> Vec<String> {
	let rows: Vec<(String,)> = sqlx::query_as("SELECT phase FROM markers")
		.fetch_all(pool)
		.await
		.expect("marker query failed");
	rows.into_iter().map(|(phase,)| phase).collect()
}

/// The suite-scope dataset of the scenario tests: parent/child rows with id 2.
pub fn suite_dataset() -> Dataset {
	Dataset::new()
		.with_table(Table::new("parent").with_row(Row::new(vec![
			Column::id("id", "2"),
			Column::new("name", "class-parent"),
		])))
		.with_table(Table::new("child").with_row(Row::new(vec![
			Column::id("id", "2"),
			Column::new("name", "class-child"),
			Column::new("parent_id", "2"),
		])))
}

/// The unit-scope override of the scenario tests: parent/child rows with id 1.
pub fn unit_dataset() -> Dataset {
	Dataset::new()
		.with_table(Table::new("parent").with_row(Row::new(vec![
			Column::id("id", "1"),
			Column::new("name", "method-parent"),
		])))
		.with_table(Table::new("child").with_row(Row::new(vec![
			Column::id("id", "1"),
			Column::new("name", "method-child"),
			Column::new("parent_id", "1"),
		])))
}

/// Config whose set-up / tear-down queries leave observable markers.
pub fn marker_config() -> SeedConfig {
	SeedConfig::new()
		.with_set_up_queries(vec![
			"INSERT INTO markers (phase) VALUES ('setup')".to_string(),
		])
		.with_tear_down_queries(vec![
			"INSERT INTO markers (phase) VALUES ('teardown')".to_string(),
		])
}
