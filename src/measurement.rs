use std::fmt;
use std::time::Duration;

use crate::types::Nanos;

/// Broad operation family a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationGroup {
    Add,
    Get,
    Remove,
    Iterate,
    Contains,
    Clear,
}

impl OperationGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationGroup::Add => "add",
            OperationGroup::Get => "get",
            OperationGroup::Remove => "remove",
            OperationGroup::Iterate => "iterate",
            OperationGroup::Contains => "contains",
            OperationGroup::Clear => "clear",
        }
    }
}

impl fmt::Display for OperationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of benchmark output: the same workload timed on container A
/// (contiguous) and container B (linked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementRecord {
    pub group: OperationGroup,
    pub label: &'static str,
    pub iteration_count: usize,
    pub duration_a_ns: Nanos,
    pub duration_b_ns: Nanos,
}

impl MeasurementRecord {
    pub fn new(
        group: OperationGroup,
        label: &'static str,
        iteration_count: usize,
        duration_a: Duration,
        duration_b: Duration,
    ) -> Self {
        Self {
            group,
            label,
            iteration_count,
            duration_a_ns: to_nanos(duration_a),
            duration_b_ns: to_nanos(duration_b),
        }
    }
}

/// Converts to whole nanoseconds, saturating at `u64::MAX` (~584 years).
pub fn to_nanos(duration: Duration) -> Nanos {
    Nanos::try_from(duration.as_nanos()).unwrap_or(Nanos::MAX)
}
