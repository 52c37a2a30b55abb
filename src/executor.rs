//! Statement execution against the caller-owned connection pool.
//!
//! The engine reads no result sets: every statement is fire-and-forget DML
//! executed through [`sqlx::AnyPool`]. A failed statement is fatal to the
//! current lifecycle phase; there are no retries.

use sqlx::AnyPool;
use tracing::debug;

use crate::error::{SeedError, SeedResult};
use crate::statement::Statement;

/// Executes one parameterized statement, returning the affected row count.
///
/// Parameters are bound positionally as text or SQL NULL; coercion to the
/// column's actual type happens in the driver. Driver failures are wrapped
/// as [`SeedError::Statement`] carrying the offending SQL.
pub async fn execute(pool: &AnyPool, statement: &Statement) -> SeedResult<u64> {
	debug!(sql = %statement.sql, "executing statement");
	let mut query = sqlx::query(&statement.sql);
	for param in &statement.params {
		query = query.bind(param.as_deref());
	}
	let result = query
		.execute(pool)
		.await
		.map_err(|source| SeedError::Statement {
			sql: statement.sql.clone(),
			source,
		})?;
	Ok(result.rows_affected())
}

/// Executes statements in order, stopping at the first failure.
pub async fn execute_all(pool: &AnyPool, statements: &[Statement]) -> SeedResult<()> {
	for statement in statements {
		execute(pool, statement).await?;
	}
	Ok(())
}

/// Executes raw query strings (set-up / tear-down hooks) in order.
pub async fn execute_raw(pool: &AnyPool, queries: &[String]) -> SeedResult<()> {
	for sql in queries {
		debug!(%sql, "executing raw query");
		sqlx::query(sql)
			.execute(pool)
			.await
			.map_err(|source| SeedError::Statement {
				sql: sql.clone(),
				source,
			})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use sqlx::any::{AnyPoolOptions, install_default_drivers};
	use std::sync::Once;

	static DRIVERS: Once = Once::new();

	async fn test_pool() -> AnyPool {
		DRIVERS.call_once(install_default_drivers);
		let pool = AnyPoolOptions::new()
			.max_connections(1)
			.connect("sqlite::memory:")
			.await
			.expect("failed to open in-memory database");
		sqlx::query("CREATE TABLE sample (id INTEGER PRIMARY KEY, name TEXT)")
			.execute(&pool)
			.await
			.unwrap();
		pool
	}

	#[tokio::test]
	async fn executes_a_parameterized_statement() {
		let pool = test_pool().await;
		let statement = Statement::new(
			"INSERT INTO sample (id, name) VALUES (?, ?)",
			vec![Some("1".to_string()), Some("alice".to_string())],
		);

		let affected = execute(&pool, &statement).await.unwrap();
		assert_eq!(affected, 1);
		pool.close().await;
	}

	#[tokio::test]
	async fn binds_none_as_sql_null() {
		let pool = test_pool().await;
		let statement = Statement::new(
			"INSERT INTO sample (id, name) VALUES (?, ?)",
			vec![Some("1".to_string()), None],
		);
		execute(&pool, &statement).await.unwrap();

		let row: (i64,) = sqlx::query_as("SELECT count(*) FROM sample WHERE name IS NULL")
			.fetch_one(&pool)
			.await
			.unwrap();
		assert_eq!(row.0, 1);
		pool.close().await;
	}

	#[tokio::test]
	async fn a_driver_failure_carries_the_offending_sql() {
		let pool = test_pool().await;
		let statement = Statement::new("INSERT INTO missing_table (id) VALUES (?)", vec![
			Some("1".to_string()),
		]);

		let error = execute(&pool, &statement).await.unwrap_err();
		match error {
			SeedError::Statement { sql, .. } => {
				assert_eq!(sql, "INSERT INTO missing_table (id) VALUES (?)");
			}
			other => panic!("expected Statement error, got {other:?}"),
		}
		pool.close().await;
	}

	#[tokio::test]
	async fn execute_all_stops_at_the_first_failure() {
		let pool = test_pool().await;
		let statements = vec![
			Statement::new("INSERT INTO sample (id, name) VALUES (?, ?)", vec![
				Some("1".to_string()),
				Some("kept".to_string()),
			]),
			Statement::new("INSERT INTO missing_table (id) VALUES (?)", vec![Some(
				"2".to_string(),
			)]),
			Statement::new("INSERT INTO sample (id, name) VALUES (?, ?)", vec![
				Some("3".to_string()),
				Some("never-reached".to_string()),
			]),
		];

		assert!(execute_all(&pool, &statements).await.is_err());

		let row: (i64,) = sqlx::query_as("SELECT count(*) FROM sample")
			.fetch_one(&pool)
			.await
			.unwrap();
		assert_eq!(row.0, 1);
		pool.close().await;
	}
}
