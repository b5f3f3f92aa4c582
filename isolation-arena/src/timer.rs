//! 单步计时器

use std::time::Instant;

use isolation_ai::TimeLeft;

/// 单步计时器
///
/// 智能体开始思考时启动，剩余时间可以变为负数，负数即超时
#[derive(Debug, Clone, Copy)]
pub struct MoveTimer {
    /// 单步时限（毫秒）
    limit_ms: u64,
    /// 开始时间
    start: Instant,
}

impl MoveTimer {
    /// 从现在开始计时
    pub fn start(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            start: Instant::now(),
        }
    }

    /// 单步时限（毫秒）
    pub fn limit_ms(&self) -> u64 {
        self.limit_ms
    }

    /// 已用时间（毫秒）
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// 是否已超时
    pub fn is_timeout(&self) -> bool {
        self.time_left() < 0.0
    }
}

impl TimeLeft for MoveTimer {
    fn time_left(&self) -> f64 {
        self.limit_ms as f64 - self.elapsed_ms()
    }
}
