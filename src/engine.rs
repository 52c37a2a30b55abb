//! Lifecycle orchestration around each test unit.
//!
//! One [`SeedEngine`] is constructed per test suite and driven by the host
//! test-runner through four hooks: [`SeedEngine::on_suite_start`],
//! [`SeedEngine::on_unit_start`], [`SeedEngine::on_unit_end`], and
//! [`SeedEngine::on_suite_end`]. Per unit the engine runs the set-up
//! queries, cleans leftover state when configured to, inserts the effective
//! dataset, and, once the test body has run, removes the data again and
//! runs the tear-down queries. No statement is issued outside this window.

use sqlx::AnyPool;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::SeedConfig;
use crate::dataset::Dataset;
use crate::dataset::csv::CsvDataSet;
use crate::error::SeedResult;
use crate::executor;
use crate::scope::resolve_dataset;
use crate::statement::{Statement, delete_statements, insert_statements};

/// Declarative fixture lifecycle engine.
///
/// The engine is handed an open [`AnyPool`] and an immutable [`SeedConfig`]
/// at construction; it never opens or closes the pool itself. Test units
/// are assumed to run sequentially against one engine instance; concurrent
/// units each need their own engine and pool.
///
/// # Example
///
/// ```ignore
/// use sqlseed::prelude::*;
///
/// let engine = SeedEngine::new(pool, SeedConfig::new())
/// 	.with_suite_dataset(Dataset::new().with_table(
/// 		Table::new("parent").with_row(Row::new(vec![
/// 			Column::id("id", "2"),
/// 			Column::new("name", "class-parent"),
/// 		])),
/// 	));
///
/// engine.on_suite_start().await;
/// engine.on_unit_start(None).await?;
/// // ... the test body runs under the host runner's control ...
/// engine.on_unit_end().await?;
/// engine.on_suite_end().await?;
/// ```
pub struct SeedEngine {
	pool: AnyPool,
	config: SeedConfig,
	suite_dataset: Option<Dataset>,
	/// Dataset of the unit currently between start and end hooks. Survives
	/// a failed insert phase so a later hook can still clean up.
	pending: Mutex<Option<Dataset>>,
}

impl SeedEngine {
	/// Creates an engine bound to the caller-owned pool.
	pub fn new(pool: AnyPool, config: SeedConfig) -> Self {
		Self {
			pool,
			config,
			suite_dataset: None,
			pending: Mutex::new(None),
		}
	}

	/// Attaches a suite-scope dataset, effective for every unit that does
	/// not declare its own.
	pub fn with_suite_dataset(mut self, dataset: Dataset) -> Self {
		self.suite_dataset = Some(dataset);
		self
	}

	/// Attaches a suite-scope CSV dataset, normalized eagerly so malformed
	/// shorthand surfaces at construction rather than mid-suite.
	pub fn with_suite_csv_dataset(self, dataset: &CsvDataSet) -> SeedResult<Self> {
		Ok(self.with_suite_dataset(dataset.normalize()?))
	}

	/// The engine configuration.
	pub fn config(&self) -> &SeedConfig {
		&self.config
	}

	/// Suite begin hook. Resets stale unit state; issues no statements.
	pub async fn on_suite_start(&self) {
		debug!("suite start");
		*self.pending.lock().await = None;
	}

	/// Unit begin hook: set-up queries, pre-test cleanup, inserts.
	///
	/// `unit_dataset` is the unit-scope declaration, if any; it overrides
	/// the suite-scope dataset in its entirety. Any failure is surfaced as
	/// [`crate::SeedError::Setup`] and the test body must not run. Partial
	/// inserts are not rolled back by the engine; a later hook's cleanup or
	/// the caller's transaction handling covers them.
	pub async fn on_unit_start(&self, unit_dataset: Option<&Dataset>) -> SeedResult<()> {
		self.unit_setup(unit_dataset)
			.await
			.map_err(|error| error.into_setup())
	}

	/// Unit end hook: cleanup per the configured strategy, then tear-down
	/// queries.
	///
	/// Runs regardless of the test body's outcome. Failures are surfaced as
	/// [`crate::SeedError::Teardown`]: reported, never swallowed, but the
	/// test's own result is already decided. Without a matching
	/// [`SeedEngine::on_unit_start`] this hook does nothing.
	pub async fn on_unit_end(&self) -> SeedResult<()> {
		let Some(dataset) = self.pending.lock().await.take() else {
			debug!("unit end without pending unit state, nothing to clean");
			return Ok(());
		};
		self.unit_cleanup(&dataset)
			.await
			.map_err(|error| error.into_teardown())
	}

	/// Suite end hook: safety net for a unit whose end hook never ran.
	///
	/// When unit state is still pending (the host runner skipped
	/// [`SeedEngine::on_unit_end`]), its cleanup and tear-down queries run
	/// now; otherwise no statement is issued.
	pub async fn on_suite_end(&self) -> SeedResult<()> {
		let Some(dataset) = self.pending.lock().await.take() else {
			debug!("suite end, no pending unit state");
			return Ok(());
		};
		warn!("suite end with pending unit state, running skipped cleanup");
		self.unit_cleanup(&dataset)
			.await
			.map_err(|error| error.into_teardown())
	}

	async fn unit_setup(&self, unit_dataset: Option<&Dataset>) -> SeedResult<()> {
		info!("preparing test data before unit execution");
		let effective = resolve_dataset(self.suite_dataset.as_ref(), unit_dataset);

		// One lock for the whole setup; also serializes misuse from
		// concurrent hook calls on a single instance.
		let mut pending = self.pending.lock().await;

		// Build every statement up front: configuration errors must surface
		// before anything executes.
		let inserts = insert_statements(&effective);
		let mut pre_clean: Vec<Statement> = Vec::new();
		if self.config.cleanup_phase.cleans_before() {
			if let Some(previous) = pending.take() {
				// A previous unit's teardown was skipped; its rows go first.
				pre_clean.extend(delete_statements(&previous, self.config.cleanup_strategy)?);
			}
			pre_clean.extend(delete_statements(&effective, self.config.cleanup_strategy)?);
		}

		if !self.config.set_up_queries.is_empty() {
			debug!("running set-up queries");
			executor::execute_raw(&self.pool, &self.config.set_up_queries).await?;
		}
		executor::execute_all(&self.pool, &pre_clean).await?;

		// Track the unit before inserting so cleanup still covers a
		// partially inserted dataset.
		*pending = Some(effective);
		executor::execute_all(&self.pool, &inserts).await?;
		info!(statements = inserts.len(), "test data inserted");
		Ok(())
	}

	async fn unit_cleanup(&self, dataset: &Dataset) -> SeedResult<()> {
		info!("cleaning test data after unit execution");
		if self.config.cleanup_phase.cleans_after() {
			let deletes = delete_statements(dataset, self.config.cleanup_strategy)?;
			executor::execute_all(&self.pool, &deletes).await?;
		}
		if !self.config.tear_down_queries.is_empty() {
			debug!("running tear-down queries");
			executor::execute_raw(&self.pool, &self.config.tear_down_queries).await?;
		}
		Ok(())
	}
}
