use invalloc::util::AllocConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the batch runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvallocConfig {
    /// Configuration of the allocator itself
    #[serde(default)]
    pub alloc_config: AllocConfig,
    /// Number of threads used to allocate orders in parallel. If undefined, rayon's default is used
    #[serde(default)]
    pub n_threads: Option<usize>,
}
