//! 马步隔离棋规则库
//!
//! 包含:
//! - 玩家、坐标等核心数据结构
//! - 棋盘快照、马步走法生成、预演走法
//! - 胜负判定
//! - 棋谱格式 (JSON)

mod board;
mod constants;
mod error;
mod player;
mod record;

pub use board::Board;
pub use constants::*;
pub use error::{IsolationError, Result};
pub use player::{Move, Player};
pub use record::{GameRecord, GameResult, WinReason, RECORD_VERSION};
