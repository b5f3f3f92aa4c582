//! 棋谱记录格式
//!
//! JSON 格式的对局记录，供对战平台保存和回放

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{IsolationError, Result};
use crate::player::{Move, Player};

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";

/// 胜利原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// 对手无子可走
    NoLegalMoves,
    /// 对手超时
    Timeout,
    /// 对手给出非法走法
    IllegalMove,
}

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub loser: Player,
    pub reason: WinReason,
}

impl GameResult {
    pub fn new(winner: Player, reason: WinReason) -> Self {
        Self {
            winner,
            loser: winner.opponent(),
            reason,
        }
    }
}

/// 完整棋谱
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub version: String,
    pub width: usize,
    pub height: usize,
    /// 先手名称
    pub player_one: String,
    /// 后手名称
    pub player_two: String,
    /// 按顺序记录的走法（包括开局落子）
    pub moves: Vec<Move>,
    pub result: Option<GameResult>,
}

impl GameRecord {
    /// 创建空棋谱
    pub fn new(board: &Board, player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            width: board.width(),
            height: board.height(),
            player_one: player_one.into(),
            player_two: player_two.into(),
            moves: Vec::new(),
            result: None,
        }
    }

    /// 玩家名称
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// 获胜方名称
    pub fn winner_name(&self) -> Option<&str> {
        self.result.map(|r| self.player_name(r.winner))
    }

    /// 按棋谱重放，得到最终局面
    pub fn replay(&self) -> Result<Board> {
        let mut board = Board::new(self.width, self.height)?;
        for &mv in &self.moves {
            board.apply_move(mv)?;
        }
        Ok(board)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IsolationError::InvalidRecord {
            reason: e.to_string(),
        })
    }

    /// 从 JSON 解析
    pub fn from_json(json: &str) -> Result<Self> {
        let record: GameRecord =
            serde_json::from_str(json).map_err(|e| IsolationError::InvalidRecord {
                reason: e.to_string(),
            })?;
        if record.version != RECORD_VERSION {
            return Err(IsolationError::InvalidRecord {
                reason: format!("unsupported version {}", record.version),
            });
        }
        Ok(record)
    }
}
