pub mod memory_collector;
pub mod workload;

pub use memory_collector::MemoryCollector;
pub use workload::{cpu_burn, timed_burn, Waveform};
