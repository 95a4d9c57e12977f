/// Value stored in every benchmarked container. The fill routine writes
/// sequential integers starting at zero.
pub type Element = i32;

/// Elapsed wall-clock time in nanoseconds.
pub type Nanos = u64;
