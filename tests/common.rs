use listbench::{
    BenchConfig, BenchmarkRunner, ContiguousSequence, Element, LinkedSequence, SequenceContainer,
};

#[allow(dead_code)]
pub type ReferenceRunner = BenchmarkRunner<ContiguousSequence, LinkedSequence>;

/// Runner over the two shipped containers with the reference constants.
#[allow(dead_code)]
pub fn reference_runner() -> ReferenceRunner {
    runner_with(BenchConfig::default())
}

#[allow(dead_code)]
pub fn runner_with(config: BenchConfig) -> ReferenceRunner {
    BenchmarkRunner::new(config, ContiguousSequence::new(), LinkedSequence::new())
        .expect("valid benchmark config")
}

/// Container holding `0..count`.
#[allow(dead_code)]
pub fn filled<S: SequenceContainer + Default>(count: Element) -> S {
    let mut seq = S::default();
    for value in 0..count {
        seq.append(value);
    }
    seq
}

#[allow(dead_code)]
pub fn contents<S: SequenceContainer>(seq: &S) -> Vec<Element> {
    seq.iter().copied().collect()
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Contiguous,
    Linked,
}

#[allow(dead_code)]
pub fn all_kinds() -> [ContainerKind; 2] {
    [ContainerKind::Contiguous, ContainerKind::Linked]
}

/// Contract check instantiated once per container type.
#[allow(dead_code)]
pub trait ContainerCheck {
    fn run<S: SequenceContainer + Default>(&self);
}

#[allow(dead_code)]
impl ContainerKind {
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::Contiguous => ContiguousSequence::NAME,
            ContainerKind::Linked => LinkedSequence::NAME,
        }
    }

    pub fn check(self, check: &impl ContainerCheck) {
        match self {
            ContainerKind::Contiguous => check.run::<ContiguousSequence>(),
            ContainerKind::Linked => check.run::<LinkedSequence>(),
        }
    }
}
