/// 压力等级，映射到固定的合成负载迭代次数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    /// 解析查询参数；无法识别的取值回退到 Medium
    pub fn parse(level: &str) -> Self {
        match level {
            "low" => StressLevel::Low,
            "high" => StressLevel::High,
            _ => StressLevel::Medium,
        }
    }

    pub fn iterations(self) -> u64 {
        match self {
            StressLevel::Low => 100_000,
            StressLevel::Medium => 1_000_000,
            StressLevel::High => 5_000_000,
        }
    }
}
