//! 错误类型定义

use thiserror::Error;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsolationError {
    /// 棋盘尺寸无效
    #[error("Invalid board dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// 非法走法（越界、已封锁或不是马步）
    #[error("Illegal move: ({row}, {col})")]
    IllegalMove { row: i32, col: i32 },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 棋谱格式错误
    #[error("Invalid game record: {reason}")]
    InvalidRecord { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, IsolationError>;
