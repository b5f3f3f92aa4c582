//! 局面评估函数
//!
//! 三个可互换的启发式评估，都从 `player` 的视角打分

use isolation::{Board, Move, Player};
use serde::{Deserialize, Serialize};

use crate::lookahead::{lookahead_counter, lookahead_two_ply};

/// 已证明的胜局
pub const WIN_SCORE: f64 = f64::INFINITY;

/// 已证明的败局
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;

/// 评估函数
///
/// 有限的分数只在同一父节点的兄弟分支之间有比较意义，不同评估函数之间不可比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Heuristic {
    /// 己方走法数 − 2 × 对手两步前瞻格数
    #[default]
    Lookahead,
    /// 走法数差，再按双方曼哈顿距离偏离 3（一个马步）的程度扣分
    Distance,
    /// 走法数差 + 压制前瞻差 − 随步数衰减的离中心距离
    CounterCenter,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Lookahead,
        Heuristic::Distance,
        Heuristic::CounterCenter,
    ];

    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Lookahead => "Lookahead",
            Heuristic::Distance => "Distance",
            Heuristic::CounterCenter => "CounterCenter",
        }
    }

    /// 从 `player` 的视角评估局面
    ///
    /// 先检查己方无子可走（`LOSS_SCORE`），再检查对手无子可走（`WIN_SCORE`）。
    /// 双方同时无子可走时按这个顺序判为负。
    pub fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own_moves = board.legal_moves(player).len();
        if own_moves == 0 {
            return LOSS_SCORE;
        }

        let opponent = board.opponent_of(player);
        let opp_moves = board.legal_moves(opponent).len();
        if opp_moves == 0 {
            return WIN_SCORE;
        }

        let own_moves = own_moves as f64;
        let opp_moves = opp_moves as f64;
        match self {
            Heuristic::Lookahead => {
                let opp_future = lookahead_two_ply(board, opponent, None).len() as f64;
                own_moves - 2.0 * opp_future
            }
            Heuristic::Distance => {
                own_moves - opp_moves - Self::distance_penalty(board, opponent)
            }
            Heuristic::CounterCenter => {
                // lookahead_counter(board, p) 统计的是 p 的对手的可达格
                let own_future = lookahead_counter(board, opponent) as f64;
                let opp_future = lookahead_counter(board, player) as f64;
                own_moves + own_future - opp_moves - opp_future - Self::center_penalty(board)
            }
        }
    }

    /// 走子方与对手的曼哈顿距离减 3；位置未知时为 0
    fn distance_penalty(board: &Board, opponent: Player) -> f64 {
        let active = board.player_location(board.active_player());
        let other = board.player_location(opponent);
        match (active, other) {
            (Some(a), Some(b)) => (a.manhattan_distance(b) - 3) as f64,
            _ => 0.0,
        }
    }

    /// 4 × 走子方离中心的曼哈顿距离 / 已走步数
    ///
    /// 已走步数为 0 时按 1 处理
    fn center_penalty(board: &Board) -> f64 {
        let Some(Move { row, col }) = board.player_location(board.active_player()) else {
            return 0.0;
        };
        let center_row = board.height() as f64 / 2.0;
        let center_col = board.width() as f64 / 2.0;
        let center_dist = (row as f64 - center_row).abs() + (col as f64 - center_col).abs();
        4.0 * center_dist / board.move_count().max(1) as f64
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{board_after, forecast_board};

    #[test]
    fn test_all_heuristics_finite_midgame() {
        let board = board_after(7, 7, &[(2, 1), (3, 3)]);
        for heuristic in Heuristic::ALL {
            for player in [Player::One, Player::Two] {
                let score = heuristic.evaluate(&board, player);
                assert!(score.is_finite(), "{} 对 {} 的评估应为有限值: {}", heuristic, player, score);
            }
        }
    }

    #[test]
    fn test_distance_score_exact() {
        // 玩家 1 在 (2,1) 有 5 步，玩家 2 在 (3,3) 有 7 步，两者距离 3
        let board = board_after(7, 7, &[(2, 1), (3, 3)]);
        assert_eq!(Heuristic::Distance.evaluate(&board, Player::One), -2.0);
    }

    #[test]
    fn test_lookahead_score_exact() {
        let board = board_after(7, 7, &[(2, 1), (3, 3)]);
        let opp_future = lookahead_two_ply(&board, Player::Two, None).len() as f64;
        assert_eq!(
            Heuristic::Lookahead.evaluate(&board, Player::One),
            5.0 - 2.0 * opp_future
        );
    }

    #[test]
    fn test_terminal_scores() {
        // 3x3：玩家 1 在中心无路可走
        let board = forecast_board(3, 3, &[(1, 1), (0, 0)]);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.evaluate(&board, Player::One), LOSS_SCORE);
            assert_eq!(heuristic.evaluate(&board, Player::Two), WIN_SCORE);
        }
    }

    #[test]
    fn test_double_zero_scores_as_loss() {
        // 双方都无子可走：先检查己方，所以双方都是败局分
        let board = forecast_board(3, 3, &[(1, 2), (2, 1), (1, 1), (0, 0)]);
        assert!(!board.has_legal_moves(Player::One));
        assert!(!board.has_legal_moves(Player::Two));
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.evaluate(&board, Player::One), LOSS_SCORE);
            assert_eq!(heuristic.evaluate(&board, Player::Two), LOSS_SCORE);
        }
    }

    #[test]
    fn test_center_penalty_decays() {
        let early = board_after(7, 7, &[(0, 0), (6, 6)]);
        let later = early
            .forecast_move(Move::new(1, 2))
            .forecast_move(Move::new(5, 4));
        // 离中心越近、步数越多，扣分越少
        assert_eq!(Heuristic::center_penalty(&early), 4.0 * 7.0 / 2.0);
        assert!(Heuristic::center_penalty(&later) < Heuristic::center_penalty(&early));
    }

    #[test]
    fn test_center_penalty_without_moves() {
        let board = board_after(7, 7, &[]);
        assert_eq!(Heuristic::center_penalty(&board), 0.0);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Heuristic::CounterCenter).unwrap();
        assert_eq!(json, "\"CounterCenter\"");
        let parsed: Heuristic = serde_json::from_str("\"Distance\"").unwrap();
        assert_eq!(parsed, Heuristic::Distance);
    }
}
