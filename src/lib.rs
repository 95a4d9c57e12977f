//! Core crate exports for listbench.
//!
//! The modules exposed here separate the container contract, the fixed
//! benchmark constants, the timing harness, and the report formatter.

pub mod config;
pub mod measurement;
pub mod report;
pub mod runner;
pub mod sequence;
pub mod types;

pub use config::{BenchConfig, ConfigError, OPERATION_COUNT};
pub use measurement::{MeasurementRecord, OperationGroup};
pub use report::{Verdict, format_report, format_table, verdict, write_report, write_table};
pub use runner::{BenchError, BenchmarkRunner, RECORDS_PER_RUN, run_all};
pub use sequence::{ContiguousSequence, LinkedSequence, SequenceContainer, SequenceError};
pub use types::{Element, Nanos};
