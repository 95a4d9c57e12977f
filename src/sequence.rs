pub mod container;
pub mod contiguous;
pub mod linked;

pub use container::{SequenceContainer, SequenceError};
pub use contiguous::ContiguousSequence;
pub use linked::LinkedSequence;
