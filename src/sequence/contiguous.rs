use crate::types::Element;

use super::container::{SequenceContainer, SequenceError};

/// Growable array backed by a single contiguous `Vec` allocation.
#[derive(Debug, Default, Clone)]
pub struct ContiguousSequence {
    values: Vec<Element>,
}

impl ContiguousSequence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceContainer for ContiguousSequence {
    const NAME: &'static str = "Vec";

    type Iter<'a> = std::slice::Iter<'a, Element>;

    fn append(&mut self, value: Element) {
        self.values.push(value);
    }

    fn insert_at(&mut self, index: usize, value: Element) -> Result<(), SequenceError> {
        let len = self.values.len();
        if index > len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }
        self.values.insert(index, value);
        Ok(())
    }

    fn get_at(&self, index: usize) -> Result<Element, SequenceError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SequenceError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    fn remove_at(&mut self, index: usize) -> Result<Element, SequenceError> {
        let len = self.values.len();
        if index >= len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }
        Ok(self.values.remove(index))
    }

    fn remove_first(&mut self) -> Result<Element, SequenceError> {
        if self.values.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(self.values.remove(0))
    }

    fn remove_last(&mut self) -> Result<Element, SequenceError> {
        self.values.pop().ok_or(SequenceError::Empty)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    fn contains(&self, value: Element) -> bool {
        self.values.contains(&value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.values.iter()
    }
}
