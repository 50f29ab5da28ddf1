//! Types for the Salesforce Tooling API.
//!
//! Every response struct is a pure deserialization target: field names are
//! the remote schema's, mapped with serde renames, and nothing is validated
//! or transformed after decoding.

use serde::{Deserialize, Serialize};

// ============================================================================
// Describe Types
// ============================================================================

/// Result of the describeGlobal operation.
///
/// Lists every Tooling SObject accessible to the user along with its
/// capability flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeGlobalResult {
    /// Character encoding (e.g., "UTF-8").
    pub encoding: String,

    /// Maximum batch size for composite operations.
    #[serde(rename = "maxBatchSize")]
    pub max_batch_size: u32,

    /// List of SObject descriptions.
    pub sobjects: Vec<DescribeGlobalSObject>,
}

/// Per-object entry from describeGlobal.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeGlobalSObject {
    pub name: String,

    pub label: String,

    #[serde(rename = "labelPlural")]
    pub label_plural: String,

    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,

    #[serde(default)]
    pub activateable: bool,

    #[serde(default)]
    pub createable: bool,

    #[serde(default)]
    pub custom: bool,

    #[serde(rename = "customSetting", default)]
    pub custom_setting: bool,

    #[serde(default)]
    pub deletable: bool,

    #[serde(rename = "deprecatedAndHidden", default)]
    pub deprecated_and_hidden: bool,

    #[serde(rename = "feedEnabled", default)]
    pub feed_enabled: bool,

    #[serde(default)]
    pub layoutable: bool,

    #[serde(default)]
    pub mergeable: bool,

    #[serde(default)]
    pub queryable: bool,

    #[serde(default)]
    pub replicateable: bool,

    #[serde(default)]
    pub retrieveable: bool,

    #[serde(default)]
    pub searchable: bool,

    #[serde(default)]
    pub triggerable: bool,

    #[serde(default)]
    pub undeletable: bool,

    #[serde(default)]
    pub updateable: bool,
}

// ============================================================================
// Execute Anonymous Types
// ============================================================================

/// Result of executing anonymous Apex.
///
/// A compile or runtime failure is a normal, fully-populated result, not an
/// error: callers inspect `compiled` and `success`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExecuteAnonymousResult {
    /// Whether the code compiled successfully.
    #[serde(default)]
    pub compiled: bool,

    /// Whether the execution was successful.
    #[serde(default)]
    pub success: bool,

    /// Compilation error detail (if any).
    #[serde(rename = "compileProblem")]
    pub compile_problem: Option<String>,

    /// Exception message from a runtime failure.
    #[serde(rename = "exceptionMessage")]
    pub exception_message: Option<String>,

    /// Exception stack trace from a runtime failure.
    #[serde(rename = "exceptionStackTrace")]
    pub exception_stack_trace: Option<String>,

    /// The line number of the error.
    pub line: Option<i32>,

    /// The column number of the error.
    pub column: Option<i32>,
}

// ============================================================================
// Test Execution Types
// ============================================================================

/// Result of a synchronous test run: aggregate counts, per-class coverage,
/// and per-method outcomes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunTestsResult {
    /// Id of the ApexLog produced by the run.
    #[serde(rename = "apexLogId")]
    pub apex_log_id: Option<String>,

    /// Per-class-or-trigger coverage records.
    #[serde(rename = "codeCoverage", default)]
    pub code_coverage: Vec<CodeCoverageResult>,

    /// Coverage warnings for the run.
    #[serde(rename = "codeCoverageWarnings", default)]
    pub code_coverage_warnings: Vec<CodeCoverageWarning>,

    /// Per-method failure records, in execution order.
    #[serde(default)]
    pub failures: Vec<RunTestFailure>,

    #[serde(rename = "numFailures", default)]
    pub num_failures: i32,

    #[serde(rename = "numTestsRun", default)]
    pub num_tests_run: i32,

    /// Per-method success records, in execution order.
    #[serde(default)]
    pub successes: Vec<RunTestSuccess>,

    /// Total execution time in seconds.
    #[serde(rename = "totalTime", default)]
    pub total_time: f64,
}

/// Code coverage for a single class or trigger.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeCoverageResult {
    pub id: String,

    pub name: String,

    pub namespace: Option<String>,

    /// "Class" or "Trigger".
    #[serde(rename = "type")]
    pub coverage_type: Option<String>,

    /// Total number of executable locations.
    #[serde(rename = "numLocations", default)]
    pub num_locations: i32,

    #[serde(rename = "numLocationsNotCovered", default)]
    pub num_locations_not_covered: i32,

    /// Locations of DML statements.
    #[serde(rename = "dmlInfo", default)]
    pub dml_info: Vec<CodeLocation>,

    /// Locations of method bodies.
    #[serde(rename = "methodInfo", default)]
    pub method_info: Vec<CodeLocation>,

    /// Locations of SOQL statements.
    #[serde(rename = "soqlInfo", default)]
    pub soql_info: Vec<CodeLocation>,

    /// Locations of SOSL statements.
    #[serde(rename = "soslInfo", default)]
    pub sosl_info: Vec<CodeLocation>,

    /// Locations that were not exercised by the run.
    #[serde(rename = "locationsNotCovered", default)]
    pub locations_not_covered: Vec<CodeLocation>,
}

/// Coverage warning raised by a test run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeCoverageWarning {
    pub id: Option<String>,
    pub message: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
}

/// A single source position with execution accounting.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeLocation {
    pub line: i32,

    pub column: i32,

    #[serde(rename = "numExecutions", default)]
    pub num_executions: i32,

    /// Cumulative time spent at this location, in seconds.
    #[serde(default)]
    pub time: f64,
}

/// A failed test method.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunTestFailure {
    pub id: String,

    pub message: String,

    #[serde(rename = "methodName")]
    pub method_name: String,

    pub name: String,

    pub namespace: Option<String>,

    #[serde(rename = "seeAllData")]
    pub see_all_data: Option<bool>,

    #[serde(rename = "stackTrace")]
    pub stack_trace: Option<String>,

    /// Execution time in seconds.
    #[serde(default)]
    pub time: f64,

    #[serde(rename = "type")]
    pub failure_type: Option<String>,
}

/// A passing test method.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunTestSuccess {
    pub id: String,

    #[serde(rename = "methodName")]
    pub method_name: String,

    pub name: String,

    pub namespace: Option<String>,

    #[serde(rename = "seeAllData")]
    pub see_all_data: Option<bool>,

    /// Execution time in seconds.
    #[serde(default)]
    pub time: f64,
}

/// Request body for runTestsAsynchronous.
///
/// Every field is optional; `None` fields are omitted from the payload
/// entirely so the server applies its own defaults. ID lists are sent
/// comma-joined, and an empty list is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunTestsAsyncRequest {
    /// Comma-joined ApexClass Ids.
    #[serde(rename = "classids", skip_serializing_if = "Option::is_none")]
    pub class_ids: Option<String>,

    /// Comma-joined TestSuite Ids.
    #[serde(rename = "suiteids", skip_serializing_if = "Option::is_none")]
    pub suite_ids: Option<String>,

    /// Abort the run after this many failures.
    #[serde(rename = "maxFailedTests", skip_serializing_if = "Option::is_none")]
    pub max_failed_tests: Option<i32>,

    #[serde(rename = "testLevel", skip_serializing_if = "Option::is_none")]
    pub test_level: Option<TestLevel>,
}

impl RunTestsAsyncRequest {
    /// Build a request targeting the given ApexClass Ids.
    pub fn for_classes<S: AsRef<str>>(ids: &[S]) -> Self {
        Self {
            class_ids: join_ids(ids),
            ..Self::default()
        }
    }

    /// Build a request targeting the given TestSuite Ids.
    pub fn for_suites<S: AsRef<str>>(ids: &[S]) -> Self {
        Self {
            suite_ids: join_ids(ids),
            ..Self::default()
        }
    }

    /// Abort the run after `max` failures.
    pub fn with_max_failed_tests(mut self, max: i32) -> Self {
        self.max_failed_tests = Some(max);
        self
    }

    /// Set the test level selector.
    pub fn with_test_level(mut self, level: TestLevel) -> Self {
        self.test_level = Some(level);
        self
    }
}

/// Comma-join Ids; an empty list maps to an absent field.
fn join_ids<S: AsRef<str>>(ids: &[S]) -> Option<String> {
    if ids.is_empty() {
        None
    } else {
        Some(
            ids.iter()
                .map(|id| id.as_ref())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Test level selector for asynchronous test runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestLevel {
    RunSpecifiedTests,
    RunLocalTests,
    RunAllTestsInOrg,
}

impl std::fmt::Display for TestLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestLevel::RunSpecifiedTests => write!(f, "RunSpecifiedTests"),
            TestLevel::RunLocalTests => write!(f, "RunLocalTests"),
            TestLevel::RunAllTestsInOrg => write!(f, "RunAllTestsInOrg"),
        }
    }
}

// ============================================================================
// Search Types
// ============================================================================

/// Result of a SOSL search query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult<T> {
    /// The search results.
    #[serde(rename = "searchRecords")]
    pub search_records: Vec<T>,
}
