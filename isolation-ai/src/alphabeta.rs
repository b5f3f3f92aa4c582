//! Alpha-Beta 剪枝 + 迭代加深

use isolation::{Board, Move};
use tracing::debug;

use crate::agent::Agent;
use crate::config::SearchConfig;
use crate::heuristics::{LOSS_SCORE, WIN_SCORE};
use crate::timeout::{check_time, SearchAborted, TimeLeft};

/// 迭代加深 Alpha-Beta 智能体
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer {
    config: SearchConfig,
    nodes_searched: u64,
    completed_depth: u32,
}

impl AlphaBetaPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
            completed_depth: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 上一次搜索访问的节点数（迭代加深时为各层之和）
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 上一次迭代加深完整搜完的最大深度，0 表示一层都没搜完
    pub fn completed_depth(&self) -> u32 {
        self.completed_depth
    }

    /// 迭代加深：深度从 1 开始逐层加深，直到时间耗尽
    ///
    /// 只有完整搜完的一层才会覆盖之前的结果。深度超过空格数之后
    /// 搜索树已经完全展开，再加深不会改变结果，直接停止。
    pub fn iterative_deepening(&mut self, board: &Board, time_left: &dyn TimeLeft) -> Move {
        self.nodes_searched = 0;
        self.completed_depth = 0;

        let max_depth = board.blank_count().max(1) as u32;
        let mut best_move = Move::NONE;

        for depth in 1..=max_depth {
            match self.alphabeta(board, depth, time_left) {
                Ok(mv) => {
                    best_move = mv;
                    self.completed_depth = depth;
                    debug!(
                        "Alpha-beta depth {} complete: best {} ({} nodes)",
                        depth, mv, self.nodes_searched
                    );
                    if mv.is_none() {
                        break;
                    }
                }
                Err(SearchAborted) => {
                    debug!(
                        "Alpha-beta aborted during depth {}, keeping {}",
                        depth, best_move
                    );
                    break;
                }
            }
        }

        best_move
    }

    /// 搜索 `depth` 层，返回根节点的最佳走法
    pub fn alphabeta(
        &mut self,
        board: &Board,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<Move, SearchAborted> {
        self.alphabeta_decision(board, depth, time_left)
            .map(|(mv, _)| mv)
    }

    /// 搜索 `depth` 层，返回根节点的最佳走法及其分值
    ///
    /// 根节点使用全窗口，所以分值与同深度的 Minimax 完全一致
    pub fn alphabeta_decision(
        &mut self,
        board: &Board,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<(Move, f64), SearchAborted> {
        let (value, best) =
            self.alpha_beta_value(board, depth, LOSS_SCORE, WIN_SCORE, true, time_left)?;
        Ok((best.unwrap_or(Move::NONE), value))
    }

    /// 递归节点
    ///
    /// `alpha`/`beta` 从祖先继承，在本节点内随子节点收紧，兄弟之间不重置
    fn alpha_beta_value(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        time_left: &dyn TimeLeft,
    ) -> Result<(f64, Option<Move>), SearchAborted> {
        check_time(time_left, self.config.timeout_ms)?;
        self.nodes_searched += 1;

        let player = board.active_player();
        let scored = if maximizing {
            player
        } else {
            board.inactive_player()
        };
        if depth == 0 || board.is_winner(player) || board.is_loser(player) {
            return Ok((self.config.heuristic.evaluate(board, scored), None));
        }

        let mut best: Option<(f64, Move)> = None;
        for mv in board.legal_moves(player) {
            let child = board.forecast_move(mv);
            let (value, _) =
                self.alpha_beta_value(&child, depth - 1, alpha, beta, !maximizing, time_left)?;
            let improves = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if improves {
                best = Some((value, mv));
            }

            if maximizing {
                alpha = alpha.max(value);
                // 极小层的父节点不会选择这个分支
                if value >= beta {
                    break;
                }
            } else {
                beta = beta.min(value);
                if value <= alpha {
                    break;
                }
            }
        }

        Ok(match best {
            Some((value, mv)) => (value, Some(mv)),
            None => (self.config.heuristic.evaluate(board, scored), None),
        })
    }
}

impl Default for AlphaBetaPlayer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for AlphaBetaPlayer {
    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn get_move(&mut self, board: &Board, time_left: &dyn TimeLeft) -> Move {
        self.iterative_deepening(board, time_left)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::heuristics::Heuristic;
    use crate::minimax::MinimaxPlayer;
    use crate::test_util::{board_after, forecast_board};

    fn unlimited() -> f64 {
        1_000_000.0
    }

    #[test]
    fn test_alphabeta_legal_move() {
        let board = board_after(7, 7, &[(2, 1), (4, 4)]);
        let legal = board.legal_moves(board.active_player());
        for heuristic in Heuristic::ALL {
            let mut agent = AlphaBetaPlayer::new(SearchConfig::new(3, heuristic));
            for depth in 1..=3 {
                let mv = agent.alphabeta(&board, depth, &unlimited).unwrap();
                assert!(legal.contains(&mv), "{} depth {} 返回了非法走法 {}", heuristic, depth, mv);
            }
        }
    }

    #[test]
    fn test_alphabeta_agrees_with_minimax() {
        let positions = [
            board_after(5, 5, &[(0, 0), (4, 4)]),
            board_after(5, 5, &[(2, 2), (0, 1)]),
            board_after(6, 6, &[(2, 1), (3, 3), (0, 0)]),
        ];
        for board in &positions {
            for heuristic in Heuristic::ALL {
                let config = SearchConfig::new(1, heuristic);
                for depth in 1..=3 {
                    let mut minimax = MinimaxPlayer::new(config);
                    let mut alphabeta = AlphaBetaPlayer::new(config);
                    let (_, mm_value) = minimax.minimax_decision(board, depth, &unlimited).unwrap();
                    let (_, ab_value) = alphabeta
                        .alphabeta_decision(board, depth, &unlimited)
                        .unwrap();
                    assert_eq!(mm_value, ab_value, "{} depth {} 分值不一致", heuristic, depth);
                    // 剪枝只会少访问节点
                    assert!(alphabeta.nodes_searched() <= minimax.nodes_searched());
                }
            }
        }
    }

    #[test]
    fn test_alphabeta_finds_immediate_win() {
        let board = forecast_board(
            5,
            5,
            &[(1, 0), (2, 3), (4, 3), (4, 4), (0, 0), (3, 1)],
        );
        let mut agent = AlphaBetaPlayer::default();
        assert_eq!(agent.get_move(&board, &unlimited), Move::new(1, 2));
    }

    #[test]
    fn test_iterative_deepening_stops_when_tree_exhausted() {
        let board = board_after(4, 4, &[(0, 0), (3, 3), (1, 2), (2, 1)]);
        let mut agent = AlphaBetaPlayer::default();
        let mv = agent.get_move(&board, &unlimited);
        assert!(board.legal_moves(board.active_player()).contains(&mv));
        assert_eq!(agent.completed_depth(), board.blank_count() as u32);
    }

    #[test]
    fn test_iterative_deepening_keeps_last_completed_depth() {
        let board = board_after(7, 7, &[(2, 1), (3, 3)]);
        // 深度 1 需要查询 1 + 走法数 次时间，之后时间耗尽
        let budget = 1 + board.legal_moves(board.active_player()).len() as u32;
        let calls = Cell::new(0u32);
        let clock = || {
            calls.set(calls.get() + 1);
            if calls.get() <= budget {
                1000.0
            } else {
                0.0
            }
        };

        let mut agent = AlphaBetaPlayer::default();
        let mv = agent.get_move(&board, &clock);
        assert_eq!(agent.completed_depth(), 1);

        let mut reference = AlphaBetaPlayer::default();
        assert_eq!(mv, reference.alphabeta(&board, 1, &unlimited).unwrap());
    }

    #[test]
    fn test_iterative_deepening_expired_returns_sentinel() {
        let board = board_after(7, 7, &[(2, 1), (3, 3)]);
        let mut agent = AlphaBetaPlayer::default();
        let expired = || 5.0;
        assert_eq!(agent.get_move(&board, &expired), Move::NONE);
        assert_eq!(agent.completed_depth(), 0);
        assert_eq!(agent.nodes_searched(), 0);
    }

    #[test]
    fn test_no_legal_moves_returns_sentinel() {
        let board = forecast_board(3, 3, &[(1, 1), (0, 0)]);
        let mut agent = AlphaBetaPlayer::default();
        assert_eq!(agent.get_move(&board, &unlimited), Move::NONE);
        assert_eq!(agent.completed_depth(), 1);
    }
}
