pub mod batch;
pub mod compute;
pub mod memory;
pub mod stress;

pub use batch::{BatchItem, BatchResult};
pub use compute::{ComputeRequest, StressParams};
pub use memory::MemoryUsage;
pub use stress::StressLevel;
