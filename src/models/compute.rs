use serde::Deserialize;

/// /compute 请求体
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRequest {
    /// 迭代次数，不设上限
    #[serde(default = "default_iterations")]
    pub iterations: u64,
}

impl Default for ComputeRequest {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> u64 {
    1_000_000
}

/// /stress 查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct StressParams {
    pub level: Option<String>,
}
