use crate::models::MemoryUsage;
use std::sync::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};

/// 采集当前进程的内存使用情况
pub struct MemoryCollector {
    system: Mutex<System>,
}

impl MemoryCollector {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new_all()),
        }
    }

    /// 刷新并返回当前进程的内存快照
    pub fn snapshot(&self) -> Option<MemoryUsage> {
        let mut sys = self.system.lock().ok()?;

        let pid = Pid::from_u32(std::process::id());
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        let process = sys.process(pid)?;
        let total_memory = sys.total_memory();

        Some(MemoryUsage {
            memory_bytes: process.memory(),
            virtual_memory_bytes: process.virtual_memory(),
            memory_percent: if total_memory > 0 {
                (process.memory() as f32 / total_memory as f32) * 100.0
            } else {
                0.0
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_sees_own_process() {
        let collector = MemoryCollector::new();
        let usage = collector.snapshot().expect("current process should be visible");
        assert!(usage.memory_bytes > 0);
        assert!(usage.memory_percent >= 0.0);
    }
}
