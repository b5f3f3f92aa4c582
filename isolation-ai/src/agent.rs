//! 智能体接口
//!
//! 对战平台只通过这个接口取走法

use isolation::{Board, Move};
use rand::seq::SliceRandom;

use crate::timeout::TimeLeft;

/// 智能体
pub trait Agent {
    /// 显示名称
    fn name(&self) -> &str;

    /// 在时间预算内为当前走子方选出走法
    ///
    /// 没有合法走法时返回 `Move::NONE`。剩余时间变为负数后才返回视为超时判负，
    /// 由调用方处理。
    fn get_move(&mut self, board: &Board, time_left: &dyn TimeLeft) -> Move;
}

/// 随机走子，作为基准对手
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn get_move(&mut self, board: &Board, _time_left: &dyn TimeLeft) -> Move {
        let moves = board.legal_moves(board.active_player());
        let mut rng = rand::thread_rng();
        moves.choose(&mut rng).copied().unwrap_or(Move::NONE)
    }
}
