/// Sizing for the input path.
///
/// Both values are starting capacities, not limits: the queue, event pool and
/// point cache grow past them when a burst of input demands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Events preallocated in the pool and reserved in each buffer.
    pub event_capacity: usize,

    /// Pointers the point cache can track before growing.
    pub point_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            event_capacity: 32,
            point_capacity: 10,
        }
    }
}
