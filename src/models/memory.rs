use serde::Serialize;

/// 当前进程的内存快照
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// 常驻内存 (字节)
    pub memory_bytes: u64,

    /// 虚拟内存 (字节)
    pub virtual_memory_bytes: u64,

    /// 内存使用率 (百分比，0-100)
    pub memory_percent: f32,
}

impl MemoryUsage {
    /// 创建一个空的快照
    pub fn empty() -> Self {
        Self::default()
    }
}
