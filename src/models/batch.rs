use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 批量处理的单个条目
#[derive(Debug, Clone, Deserialize)]
pub struct BatchItem {
    /// 条目标识（字符串或数字，缺省时回退为位置下标）
    pub id: Option<Value>,
    /// 待处理数值
    pub value: Option<f64>,
}

/// 单个条目的处理结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub id: Value,
    pub processed: bool,
    /// 翻倍后的数值；输入缺失时为 NaN，JSON 序列化为 null
    pub value: f64,
    pub instance_id: String,
}

impl BatchItem {
    /// 数值翻倍；id 缺省时使用位置下标
    pub fn process(self, index: usize, instance_id: &str) -> BatchResult {
        BatchResult {
            id: self.id.unwrap_or_else(|| Value::from(index)),
            processed: true,
            value: self.value.unwrap_or(f64::NAN) * 2.0,
            instance_id: instance_id.to_string(),
        }
    }
}
