//! Scenario catalog and timing loops.
//!
//! Every scenario first puts both containers into its own starting state,
//! times container A, then times container B over an identical workload and
//! yields one [`MeasurementRecord`]. Nothing carries over between scenarios
//! except the containers' allocations.

use std::hint::black_box;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{BenchConfig, ConfigError, to_element};
use crate::measurement::{MeasurementRecord, OperationGroup};
use crate::report::format_report;
use crate::sequence::{ContiguousSequence, LinkedSequence, SequenceContainer, SequenceError};
use crate::types::Element;

/// Rows produced by one full pass over the catalog.
pub const RECORDS_PER_RUN: usize = 11;

/// Errors surfaced while running the catalog.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid benchmark configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("scenario `{scenario}` failed on {container}: {source}")]
    Scenario {
        scenario: &'static str,
        container: &'static str,
        #[source]
        source: SequenceError,
    },
}

/// Times the scenario catalog against two containers.
pub struct BenchmarkRunner<A: SequenceContainer, B: SequenceContainer> {
    config: BenchConfig,
    a: A,
    b: B,
}

impl<A: SequenceContainer, B: SequenceContainer> BenchmarkRunner<A, B> {
    pub fn new(config: BenchConfig, a: A, b: B) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config, a, b })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn container_a(&self) -> &A {
        &self.a
    }

    pub fn container_b(&self) -> &B {
        &self.b
    }

    pub fn containers_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.a, &mut self.b)
    }

    /// Runs every scenario in catalog order into a fresh record list.
    pub fn run_all(&mut self) -> Result<Vec<MeasurementRecord>, BenchError> {
        info!(
            operation_count = self.config.operation_count,
            a = A::NAME,
            b = B::NAME,
            "running list benchmark"
        );

        let mut records = Vec::with_capacity(RECORDS_PER_RUN);
        records.push(self.add_to_end()?);
        records.push(self.add_to_start()?);
        records.push(self.add_to_middle()?);
        records.push(self.get()?);
        records.push(self.remove_from_end()?);
        records.push(self.remove_from_start()?);
        records.push(self.remove_from_middle()?);
        records.extend(self.iterate()?);
        records.push(self.contains()?);
        records.push(self.clear()?);

        info!(records = records.len(), "benchmark complete");
        Ok(records)
    }

    /// Clears both containers and appends `0..count` to each.
    pub fn fill(&mut self, count: usize) {
        self.a.clear();
        self.b.clear();
        for value in 0..to_element(count) {
            self.a.append(value);
            self.b.append(value);
        }
    }

    pub fn add_to_end(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "add to end";
        let count = self.config.operation_count;

        self.a.clear();
        self.b.clear();
        let a = append_values(&mut self.a, count);
        let b = append_values(&mut self.b, count);

        Ok(finish(OperationGroup::Add, LABEL, count, a, b))
    }

    pub fn add_to_start(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "add to start";
        let count = self.config.operation_count;

        self.a.clear();
        self.b.clear();
        let a = prepend_values(&mut self.a, count).map_err(scenario_error::<A>(LABEL))?;
        let b = prepend_values(&mut self.b, count).map_err(scenario_error::<B>(LABEL))?;

        Ok(finish(OperationGroup::Add, LABEL, count, a, b))
    }

    pub fn add_to_middle(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "add to middle";
        let prefill = self.config.middle_prefill;
        let count = self.config.add_middle_count();

        self.fill(prefill);
        let a = insert_middle(&mut self.a, count).map_err(scenario_error::<A>(LABEL))?;
        self.fill(prefill);
        let b = insert_middle(&mut self.b, count).map_err(scenario_error::<B>(LABEL))?;

        Ok(finish(OperationGroup::Add, LABEL, count, a, b))
    }

    pub fn get(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "get by index";
        let count = self.config.operation_count;

        self.fill(count);
        let a = read_indexed(&self.a, count).map_err(scenario_error::<A>(LABEL))?;
        let b = read_indexed(&self.b, count).map_err(scenario_error::<B>(LABEL))?;

        Ok(finish(OperationGroup::Get, LABEL, count, a, b))
    }

    pub fn remove_from_end(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "remove from end";
        let count = self.config.operation_count;

        self.fill(count);
        let a = remove_descending(&mut self.a, count).map_err(scenario_error::<A>(LABEL))?;
        self.fill(count);
        let b = remove_descending(&mut self.b, count).map_err(scenario_error::<B>(LABEL))?;

        Ok(finish(OperationGroup::Remove, LABEL, count, a, b))
    }

    pub fn remove_from_start(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "remove from start";
        let count = self.config.operation_count;

        self.fill(count);
        let a = remove_front(&mut self.a, count).map_err(scenario_error::<A>(LABEL))?;
        self.fill(count);
        let b = remove_front(&mut self.b, count).map_err(scenario_error::<B>(LABEL))?;

        Ok(finish(OperationGroup::Remove, LABEL, count, a, b))
    }

    pub fn remove_from_middle(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "remove from middle";
        let prefill = self.config.remove_middle_prefill();
        let count = self.config.remove_middle_count();

        self.fill(prefill);
        let a = remove_middle(&mut self.a, count).map_err(scenario_error::<A>(LABEL))?;
        self.fill(prefill);
        let b = remove_middle(&mut self.b, count).map_err(scenario_error::<B>(LABEL))?;

        Ok(finish(OperationGroup::Remove, LABEL, count, a, b))
    }

    /// Indexed reads on both containers, then a cursor walk over B. Both rows
    /// share A's indexed timing as their baseline.
    pub fn iterate(&mut self) -> Result<[MeasurementRecord; 2], BenchError> {
        const INDEXED: &str = "for-loop";
        const CURSOR: &str = "iterator";
        let count = self.config.operation_count;

        self.fill(count);
        let a = read_indexed(&self.a, self.a.len()).map_err(scenario_error::<A>(INDEXED))?;
        let b_indexed =
            read_indexed(&self.b, self.b.len()).map_err(scenario_error::<B>(INDEXED))?;
        let b_cursor = traverse(&self.b);

        Ok([
            finish(OperationGroup::Iterate, INDEXED, count, a, b_indexed),
            finish(OperationGroup::Iterate, CURSOR, count, a, b_cursor),
        ])
    }

    pub fn contains(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "various positions";
        let count = self.config.operation_count;
        let probes = self.config.contains_probes();

        self.fill(count);
        let a = probe_all(&self.a, &probes);
        let b = probe_all(&self.b, &probes);

        Ok(finish(OperationGroup::Contains, LABEL, probes.len(), a, b))
    }

    pub fn clear(&mut self) -> Result<MeasurementRecord, BenchError> {
        const LABEL: &str = "all elements";
        let count = self.config.operation_count;

        self.fill(count);
        let a = clear_all(&mut self.a);
        self.fill(count);
        let b = clear_all(&mut self.b);

        Ok(finish(OperationGroup::Clear, LABEL, count, a, b))
    }
}

/// Runs the catalog on `Vec` versus `LinkedList` and renders the report.
pub fn run_all(config: &BenchConfig) -> Result<String, BenchError> {
    let mut runner =
        BenchmarkRunner::new(config.clone(), ContiguousSequence::new(), LinkedSequence::new())?;
    let records = runner.run_all()?;

    Ok(format_report(
        &records,
        ContiguousSequence::NAME,
        LinkedSequence::NAME,
        config.operation_count,
        config.rule_width,
    ))
}

fn finish(
    group: OperationGroup,
    label: &'static str,
    iterations: usize,
    a: Duration,
    b: Duration,
) -> MeasurementRecord {
    let record = MeasurementRecord::new(group, label, iterations, a, b);
    debug!(
        group = %record.group,
        label,
        iterations,
        a_ns = record.duration_a_ns,
        b_ns = record.duration_b_ns,
        "scenario complete"
    );
    record
}

fn scenario_error<S: SequenceContainer>(
    scenario: &'static str,
) -> impl FnOnce(SequenceError) -> BenchError {
    move |source| BenchError::Scenario {
        scenario,
        container: S::NAME,
        source,
    }
}

fn append_values<S: SequenceContainer>(seq: &mut S, count: usize) -> Duration {
    let limit = to_element(count);
    let start = Instant::now();
    for value in 0..limit {
        seq.append(value);
    }
    start.elapsed()
}

fn prepend_values<S: SequenceContainer>(
    seq: &mut S,
    count: usize,
) -> Result<Duration, SequenceError> {
    let limit = to_element(count);
    let start = Instant::now();
    for value in 0..limit {
        seq.insert_at(0, value)?;
    }
    Ok(start.elapsed())
}

fn insert_middle<S: SequenceContainer>(
    seq: &mut S,
    count: usize,
) -> Result<Duration, SequenceError> {
    let limit = to_element(count);
    let start = Instant::now();
    for value in 0..limit {
        let middle = seq.len() / 2;
        seq.insert_at(middle, value)?;
    }
    Ok(start.elapsed())
}

fn read_indexed<S: SequenceContainer>(seq: &S, count: usize) -> Result<Duration, SequenceError> {
    let start = Instant::now();
    for index in 0..count {
        black_box(seq.get_at(index)?);
    }
    Ok(start.elapsed())
}

fn remove_descending<S: SequenceContainer>(
    seq: &mut S,
    count: usize,
) -> Result<Duration, SequenceError> {
    let start = Instant::now();
    for index in (0..count).rev() {
        black_box(seq.remove_at(index)?);
    }
    Ok(start.elapsed())
}

fn remove_front<S: SequenceContainer>(
    seq: &mut S,
    count: usize,
) -> Result<Duration, SequenceError> {
    let start = Instant::now();
    for _ in 0..count {
        black_box(seq.remove_at(0)?);
    }
    Ok(start.elapsed())
}

fn remove_middle<S: SequenceContainer>(
    seq: &mut S,
    count: usize,
) -> Result<Duration, SequenceError> {
    let start = Instant::now();
    for _ in 0..count {
        if !seq.is_empty() {
            let middle = seq.len() / 2;
            black_box(seq.remove_at(middle)?);
        }
    }
    Ok(start.elapsed())
}

fn traverse<S: SequenceContainer>(seq: &S) -> Duration {
    let start = Instant::now();
    for value in seq.iter() {
        black_box(value);
    }
    start.elapsed()
}

fn probe_all<S: SequenceContainer>(seq: &S, probes: &[Element]) -> Duration {
    let start = Instant::now();
    for &probe in probes {
        black_box(seq.contains(probe));
    }
    start.elapsed()
}

fn clear_all<S: SequenceContainer>(seq: &mut S) -> Duration {
    let start = Instant::now();
    seq.clear();
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_runner() -> BenchmarkRunner<ContiguousSequence, LinkedSequence> {
        BenchmarkRunner::new(
            BenchConfig::default().with_operation_count(200),
            ContiguousSequence::new(),
            LinkedSequence::new(),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result = BenchmarkRunner::new(
            BenchConfig::default().with_operation_count(5),
            ContiguousSequence::new(),
            LinkedSequence::new(),
        );
        assert!(matches!(result, Err(BenchError::Config(_))));
    }

    #[test]
    fn fill_replaces_previous_contents() {
        let mut runner = small_runner();
        runner.fill(10);
        runner.fill(3);
        assert_eq!(runner.container_a().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(runner.container_b().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn add_to_middle_grows_from_prefill() {
        let mut runner = small_runner();
        let record = runner.add_to_middle().unwrap();
        assert_eq!(record.iteration_count, 20);
        assert_eq!(runner.container_a().len(), 1_000);
        assert_eq!(runner.container_b().len(), 1_000 + 20);
    }

    #[test]
    fn remove_scenarios_drain_b_completely() {
        let mut runner = small_runner();
        runner.remove_from_end().unwrap();
        assert!(runner.container_b().is_empty());
        runner.remove_from_start().unwrap();
        assert!(runner.container_b().is_empty());
    }

    #[test]
    fn scenario_errors_name_the_container() {
        let err = scenario_error::<LinkedSequence>("get by index")(SequenceError::Empty);
        assert_eq!(
            err.to_string(),
            "scenario `get by index` failed on LinkedList: container is empty"
        );
    }
}
