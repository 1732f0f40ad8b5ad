//! Queue configuration

/// Configuration applied to every queue an engine creates
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Number of node slots to reserve up front in each queue's arena
    pub initial_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
        }
    }
}

impl QueueConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of node slots reserved at queue creation
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
