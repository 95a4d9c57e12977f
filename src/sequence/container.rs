use thiserror::Error;

use crate::types::Element;

/// Errors surfaced by container implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("container is empty")]
    Empty,
}

/// List-like contract shared by every container the runner can time.
///
/// Indexed operations report out-of-range positions instead of panicking so a
/// scenario that starts from the wrong state fails with a readable error.
pub trait SequenceContainer {
    /// Short display name used in report headers and verdicts.
    const NAME: &'static str;

    type Iter<'a>: Iterator<Item = &'a Element>
    where
        Self: 'a;

    fn append(&mut self, value: Element);

    /// Inserts `value` so that it ends up at `index`; `index == len` appends.
    fn insert_at(&mut self, index: usize, value: Element) -> Result<(), SequenceError>;

    fn get_at(&self, index: usize) -> Result<Element, SequenceError>;

    fn remove_at(&mut self, index: usize) -> Result<Element, SequenceError>;

    fn remove_first(&mut self) -> Result<Element, SequenceError>;

    fn remove_last(&mut self) -> Result<Element, SequenceError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn contains(&self, value: Element) -> bool;

    /// Sequential cursor traversal from front to back.
    fn iter(&self) -> Self::Iter<'_>;
}
