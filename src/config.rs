use thiserror::Error;

use crate::types::Element;

/// Scale of most scenarios.
pub const OPERATION_COUNT: usize = 10_000;

/// Errors raised when a configuration would violate a scenario precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("operation count {count} leaves no iterations for {scenario} (divisor {divisor})")]
    EmptyScenario {
        scenario: &'static str,
        count: usize,
        divisor: usize,
    },
    #[error("probe value {0} does not fit the element type")]
    ProbeOverflow(usize),
}

/// Fixed constants driving the scenario catalog.
///
/// Only the defaults are used by the binary; the builder exists so tests can
/// shrink the workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Elemental operations timed by the full-size scenarios.
    pub operation_count: usize,
    /// Elements present before the add-to-middle scenario starts.
    pub middle_prefill: usize,
    /// Scale-down applied to `operation_count` for add-to-middle.
    pub add_middle_divisor: usize,
    /// Scale-down applied to `operation_count` for remove-from-middle.
    pub remove_middle_divisor: usize,
    /// Distance past the last element of the value probed by `contains` that
    /// is never present.
    pub absent_probe_offset: usize,
    /// Width of the banner rules in the rendered table.
    pub rule_width: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            operation_count: OPERATION_COUNT,
            middle_prefill: 1_000,
            add_middle_divisor: 10,
            remove_middle_divisor: 20,
            absent_probe_offset: 1_000,
            rule_width: 120,
        }
    }
}

impl BenchConfig {
    pub fn with_operation_count(mut self, operation_count: usize) -> Self {
        self.operation_count = operation_count;
        self
    }

    pub fn add_middle_count(&self) -> usize {
        self.operation_count / self.add_middle_divisor.max(1)
    }

    pub fn remove_middle_prefill(&self) -> usize {
        self.operation_count / 2
    }

    pub fn remove_middle_count(&self) -> usize {
        self.operation_count / self.remove_middle_divisor.max(1)
    }

    /// First, middle, last and one absent value of a container filled with
    /// `operation_count` sequential integers.
    pub fn contains_probes(&self) -> [Element; 4] {
        let count = self.operation_count;
        [
            0,
            to_element(count / 2),
            to_element(count.saturating_sub(1)),
            to_element(count.saturating_add(self.absent_probe_offset)),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operation_count == 0 {
            return Err(ConfigError::Zero {
                field: "operation_count",
            });
        }
        if self.add_middle_divisor == 0 {
            return Err(ConfigError::Zero {
                field: "add_middle_divisor",
            });
        }
        if self.remove_middle_divisor == 0 {
            return Err(ConfigError::Zero {
                field: "remove_middle_divisor",
            });
        }
        if self.add_middle_count() == 0 {
            return Err(ConfigError::EmptyScenario {
                scenario: "add to middle",
                count: self.operation_count,
                divisor: self.add_middle_divisor,
            });
        }
        if self.remove_middle_count() == 0 {
            return Err(ConfigError::EmptyScenario {
                scenario: "remove from middle",
                count: self.operation_count,
                divisor: self.remove_middle_divisor,
            });
        }

        let largest = self
            .operation_count
            .checked_add(self.absent_probe_offset)
            .ok_or(ConfigError::ProbeOverflow(usize::MAX))?;
        if Element::try_from(largest).is_err() {
            return Err(ConfigError::ProbeOverflow(largest));
        }
        Ok(())
    }
}

pub(crate) fn to_element(value: usize) -> Element {
    Element::try_from(value).unwrap_or(Element::MAX)
}
