//! 马步隔离棋 AI 引擎
//!
//! 包含:
//! - 走法前瞻
//! - 三种启发式评估函数
//! - 固定深度 Minimax 搜索
//! - Alpha-Beta 剪枝 + 迭代加深
//! - 基于剩余时间的搜索中止

mod agent;
mod alphabeta;
mod config;
mod heuristics;
mod lookahead;
mod minimax;
mod timeout;

#[cfg(test)]
mod test_util;

pub use agent::{Agent, RandomPlayer};
pub use alphabeta::AlphaBetaPlayer;
pub use config::{ConfigError, SearchConfig, DEFAULT_SEARCH_DEPTH, DEFAULT_TIMEOUT_MS};
pub use heuristics::{Heuristic, LOSS_SCORE, WIN_SCORE};
pub use lookahead::{knight_moves, lookahead_counter, lookahead_two_ply};
pub use minimax::MinimaxPlayer;
pub use timeout::{Deadline, SearchAborted, TimeLeft};
