use std::collections::LinkedList;

use crate::types::Element;

use super::container::{SequenceContainer, SequenceError};

/// Doubly linked list of individually allocated nodes.
///
/// Positional operations walk from whichever end is closer to `index`, then
/// splice in constant time. The two ends are reached without walking.
#[derive(Debug, Default, Clone)]
pub struct LinkedSequence {
    nodes: LinkedList<Element>,
}

impl LinkedSequence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceContainer for LinkedSequence {
    const NAME: &'static str = "LinkedList";

    type Iter<'a> = std::collections::linked_list::Iter<'a, Element>;

    fn append(&mut self, value: Element) {
        self.nodes.push_back(value);
    }

    fn insert_at(&mut self, index: usize, value: Element) -> Result<(), SequenceError> {
        let len = self.nodes.len();
        if index > len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }

        if index == 0 {
            self.nodes.push_front(value);
        } else if index == len {
            self.nodes.push_back(value);
        } else {
            let mut tail = self.nodes.split_off(index);
            tail.push_front(value);
            self.nodes.append(&mut tail);
        }
        Ok(())
    }

    fn get_at(&self, index: usize) -> Result<Element, SequenceError> {
        let len = self.nodes.len();
        if index >= len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }

        let found = if index < len / 2 {
            self.nodes.iter().nth(index)
        } else {
            self.nodes.iter().rev().nth(len - 1 - index)
        };
        found
            .copied()
            .ok_or(SequenceError::IndexOutOfBounds { index, len })
    }

    fn remove_at(&mut self, index: usize) -> Result<Element, SequenceError> {
        let len = self.nodes.len();
        if index >= len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }

        if index == 0 {
            return self.remove_first();
        }
        if index == len - 1 {
            return self.remove_last();
        }

        let mut tail = self.nodes.split_off(index);
        let removed = tail.pop_front();
        self.nodes.append(&mut tail);
        removed.ok_or(SequenceError::IndexOutOfBounds { index, len })
    }

    fn remove_first(&mut self) -> Result<Element, SequenceError> {
        self.nodes.pop_front().ok_or(SequenceError::Empty)
    }

    fn remove_last(&mut self) -> Result<Element, SequenceError> {
        self.nodes.pop_back().ok_or(SequenceError::Empty)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn contains(&self, value: Element) -> bool {
        self.nodes.contains(&value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: Element) -> LinkedSequence {
        let mut seq = LinkedSequence::new();
        for value in 0..count {
            seq.append(value);
        }
        seq
    }

    #[test]
    fn get_at_reads_from_both_halves() {
        let seq = filled(7);
        let values: Vec<Element> = (0..7).map(|idx| seq.get_at(idx).unwrap()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn insert_at_middle_splices_in_place() {
        let mut seq = filled(4);
        seq.insert_at(2, 42).unwrap();
        seq.insert_at(0, -1).unwrap();
        let end = seq.len();
        seq.insert_at(end, 99).unwrap();

        let values: Vec<Element> = seq.iter().copied().collect();
        assert_eq!(values, vec![-1, 0, 1, 42, 2, 3, 99]);
    }

    #[test]
    fn remove_at_middle_keeps_neighbours_linked() {
        let mut seq = filled(6);
        assert_eq!(seq.remove_at(3), Ok(3));
        assert_eq!(seq.remove_at(0), Ok(0));
        let last = seq.len() - 1;
        assert_eq!(seq.remove_at(last), Ok(5));

        let values: Vec<Element> = seq.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 4]);
        assert_eq!(seq.get_at(2), Ok(4));
    }

    #[test]
    fn empty_list_rejects_removal() {
        let mut seq = LinkedSequence::new();
        assert_eq!(seq.remove_first(), Err(SequenceError::Empty));
        assert_eq!(seq.remove_last(), Err(SequenceError::Empty));
        assert_eq!(
            seq.remove_at(0),
            Err(SequenceError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }
}
