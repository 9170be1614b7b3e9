use std::time::Instant;

/// 合成负载的波形；compute 用 Sin，stress 用 Cos，负载形状相同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sin,
    Cos,
}

/// 模拟 CPU 密集型计算：累加 sqrt(i) * sin(i)（或 cos(i)）
///
/// 确定性、无副作用，耗时与迭代次数成正比。
pub fn cpu_burn(iterations: u64, wave: Waveform) -> f64 {
    let mut result = 0.0_f64;
    match wave {
        Waveform::Sin => {
            for i in 0..iterations {
                let x = i as f64;
                result += x.sqrt() * x.sin();
            }
        }
        Waveform::Cos => {
            for i in 0..iterations {
                let x = i as f64;
                result += x.sqrt() * x.cos();
            }
        }
    }
    result
}

/// 执行负载并测量循环本身的墙钟耗时（毫秒）
pub fn timed_burn(iterations: u64, wave: Waveform) -> (f64, u64) {
    let start = Instant::now();
    let result = cpu_burn(iterations, wave);
    let duration = start.elapsed().as_millis() as u64;
    (result, duration)
}
