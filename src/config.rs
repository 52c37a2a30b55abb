//! Lifecycle configuration: when cleanup runs and how rows are selected.

/// The phase of a test unit at which the cleanup task executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPhase {
	/// Clean leftover state just before this unit's inserts.
	BeforeTest,
	/// Clean this unit's state after the test body has run.
	AfterTest,
	/// Clean both before and after each test unit.
	#[default]
	BeforeAndAfterTest,
}

impl CleanupPhase {
	/// Whether the cleanup task runs before the unit's inserts.
	pub(crate) fn cleans_before(self) -> bool {
		matches!(self, Self::BeforeTest | Self::BeforeAndAfterTest)
	}

	/// Whether the cleanup task runs after the test body.
	pub(crate) fn cleans_after(self) -> bool {
		matches!(self, Self::AfterTest | Self::BeforeAndAfterTest)
	}
}

/// How the cleanup task selects rows to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupStrategy {
	/// Delete exactly the rows the engine inserted, matched by identity columns.
	#[default]
	UsedRows,
	/// Delete every row of every table referenced by the effective dataset.
	DeleteAll,
}

/// Engine configuration, fixed once the engine is constructed.
///
/// # Example
///
/// ```
/// use sqlseed::config::{CleanupPhase, CleanupStrategy, SeedConfig};
///
/// let config = SeedConfig::new()
/// 	.with_cleanup_phase(CleanupPhase::BeforeTest)
/// 	.with_cleanup_strategy(CleanupStrategy::DeleteAll)
/// 	.with_set_up_queries(vec!["PRAGMA foreign_keys = OFF".to_string()])
/// 	.with_tear_down_queries(vec!["PRAGMA foreign_keys = ON".to_string()]);
/// assert_eq!(config.cleanup_phase, CleanupPhase::BeforeTest);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
	/// When the cleanup task executes relative to the test body.
	pub cleanup_phase: CleanupPhase,
	/// How the cleanup task selects rows.
	pub cleanup_strategy: CleanupStrategy,
	/// Raw queries run at the start of each unit, before any row statement.
	pub set_up_queries: Vec<String>,
	/// Raw queries run at the end of each unit, after cleanup.
	pub tear_down_queries: Vec<String>,
}

impl SeedConfig {
	/// Creates the default configuration: clean before and after each unit,
	/// deleting only the rows the engine inserted.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the cleanup phase.
	pub fn with_cleanup_phase(mut self, phase: CleanupPhase) -> Self {
		self.cleanup_phase = phase;
		self
	}

	/// Sets the cleanup strategy.
	pub fn with_cleanup_strategy(mut self, strategy: CleanupStrategy) -> Self {
		self.cleanup_strategy = strategy;
		self
	}

	/// Sets the queries run before each unit's inserts.
	pub fn with_set_up_queries(mut self, queries: Vec<String>) -> Self {
		self.set_up_queries = queries;
		self
	}

	/// Sets the queries run after each unit's cleanup.
	pub fn with_tear_down_queries(mut self, queries: Vec<String>) -> Self {
		self.tear_down_queries = queries;
		self
	}
}
