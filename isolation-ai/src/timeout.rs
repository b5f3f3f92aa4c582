//! 超时取消
//!
//! 每个递归节点在做任何工作之前先查询剩余时间，低于阈值时返回
//! `SearchAborted`，由最外层的驱动循环接住。

use std::time::{Duration, Instant};

use thiserror::Error;

/// 搜索因时间耗尽而中止
///
/// 不是正常的搜索结果，只能通过 `?` 一路向上传递
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search aborted: time budget exhausted")]
pub struct SearchAborted;

/// 剩余时间查询（毫秒，可能为负）
///
/// 每个节点都会调用，实现必须足够轻量
pub trait TimeLeft {
    fn time_left(&self) -> f64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> f64,
{
    fn time_left(&self) -> f64 {
        self()
    }
}

/// 基于 `Instant` 的截止时间
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// 从现在开始计时
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// 以毫秒指定预算
    pub fn from_millis(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }
}

impl TimeLeft for Deadline {
    fn time_left(&self) -> f64 {
        let elapsed = self.start.elapsed().as_secs_f64() * 1000.0;
        self.budget.as_secs_f64() * 1000.0 - elapsed
    }
}

/// 剩余时间低于阈值时中止
#[inline]
pub(crate) fn check_time(time_left: &dyn TimeLeft, threshold_ms: f64) -> Result<(), SearchAborted> {
    if time_left.time_left() < threshold_ms {
        Err(SearchAborted)
    } else {
        Ok(())
    }
}
