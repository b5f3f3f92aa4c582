//! 固定深度 Minimax 搜索（无剪枝）

use isolation::{Board, Move};
use tracing::debug;

use crate::agent::Agent;
use crate::config::SearchConfig;
use crate::timeout::{check_time, SearchAborted, TimeLeft};

/// 固定深度 Minimax 智能体
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    config: SearchConfig,
    nodes_searched: u64,
}

impl MinimaxPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 上一次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 搜索 `depth` 层，返回根节点的最佳走法
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<Move, SearchAborted> {
        self.minimax_decision(board, depth, time_left)
            .map(|(mv, _)| mv)
    }

    /// 搜索 `depth` 层，返回根节点的最佳走法及其分值
    ///
    /// 没有合法走法时走法为 `Move::NONE`
    pub fn minimax_decision(
        &mut self,
        board: &Board,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<(Move, f64), SearchAborted> {
        let (value, best) = self.min_max_value(board, depth, true, time_left)?;
        Ok((best.unwrap_or(Move::NONE), value))
    }

    /// 递归节点
    ///
    /// 先检查时间，再做任何走法生成。叶子节点按“该谁走”打分：极大层评估走子方，
    /// 极小层评估走子方的对手，所以整棵树始终是根节点走子方的视角。
    fn min_max_value(
        &mut self,
        board: &Board,
        depth: u32,
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

        // 第一个子节点总是先占位，之后只有严格更优才替换
        let mut best: Option<(f64, Move)> = None;
        for mv in board.legal_moves(player) {
            let child = board.forecast_move(mv);
            let (value, _) = self.min_max_value(&child, depth - 1, !maximizing, time_left)?;
            let improves = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if improves {
                best = Some((value, mv));
            }
        }

        Ok(match best {
            Some((value, mv)) => (value, Some(mv)),
            None => (self.config.heuristic.evaluate(board, scored), None),
        })
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for MinimaxPlayer {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn get_move(&mut self, board: &Board, time_left: &dyn TimeLeft) -> Move {
        self.nodes_searched = 0;
        match self.minimax(board, self.config.search_depth, time_left) {
            Ok(mv) => {
                debug!(
                    "Minimax depth {} chose {} after {} nodes",
                    self.config.search_depth, mv, self.nodes_searched
                );
                mv
            }
            Err(SearchAborted) => {
                debug!("Minimax aborted after {} nodes", self.nodes_searched);
                Move::NONE
            }
        }
    }
}
