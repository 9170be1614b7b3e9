use chrono::{SecondsFormat, Utc};
use rand::{rng, Rng};
use std::time::Instant;
use sysinfo::System;

const TOKEN_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 9;

/// 进程级实例标识
///
/// 启动时生成一次，进程生命周期内只读。每个响应都原样携带
/// instance id 和 hostname，外部扩缩容测试据此确认请求分布。
pub struct Instance {
    /// 实例 ID（随机、不透明）
    pub id: String,
    /// 主机名（启动时解析一次）
    pub hostname: String,
    /// 监听端口
    pub port: u16,
    started: Instant,
}

impl Instance {
    pub fn new(port: u16) -> Self {
        Self {
            id: random_token(),
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            port,
            started: Instant::now(),
        }
    }

    /// 进程运行时长（秒）
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// 生成短随机令牌（允许碰撞，非加密用途）
fn random_token() -> String {
    let mut rng = rng();
    let mut token = String::with_capacity(TOKEN_LEN);
    for _ in 0..TOKEN_LEN {
        token.push(TOKEN_CHARS[rng.random_range(0..TOKEN_CHARS.len())] as char);
    }
    token
}

/// 当前时刻的 ISO-8601 时间戳（UTC，毫秒精度）
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
