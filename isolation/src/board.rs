//! 棋盘状态

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, KNIGHT_OFFSETS, PLAYER_COUNT};
use crate::error::{IsolationError, Result};
use crate::player::{Move, Player};

/// 棋盘快照
///
/// 走过的格子（包括双方当前所在格）永久封锁。`forecast_move` 返回新快照，
/// 不修改原快照，搜索时每个分支各自持有一份。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// 封锁标记，索引为 row * width + col
    blocked: Vec<bool>,
    /// 双方位置，首次落子前为 None
    locations: [Option<Move>; PLAYER_COUNT],
    /// 当前走子方
    active: Player,
    /// 已走步数
    move_count: u32,
}

impl Board {
    /// 创建空棋盘
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(IsolationError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None; PLAYER_COUNT],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 已走步数（双方合计，包括首次落子）
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// 当前走子方
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// 刚走完的一方
    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    /// 获取对手
    pub fn opponent_of(&self, player: Player) -> Player {
        player.opponent()
    }

    /// 玩家当前位置
    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    /// 检查坐标是否在棋盘内
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0
            && mv.col >= 0
            && (mv.row as usize) < self.height
            && (mv.col as usize) < self.width
    }

    /// 检查坐标是否可落子（在棋盘内且未封锁）
    pub fn move_is_legal(&self, mv: Move) -> bool {
        self.in_bounds(mv) && !self.blocked[self.index(mv)]
    }

    /// 所有未封锁的格子
    pub fn blank_spaces(&self) -> Vec<Move> {
        let mut spaces = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row as i32, col as i32);
                if !self.blocked[self.index(mv)] {
                    spaces.push(mv);
                }
            }
        }
        spaces
    }

    /// 未封锁格子数量
    pub fn blank_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    /// 生成指定玩家的合法走法
    ///
    /// 首次落子前可以放在任意空格；之后按 `KNIGHT_OFFSETS` 的顺序生成马步，
    /// 偏移量互不相同，因此结果不含重复项。
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.player_location(player) {
            None => self.blank_spaces(),
            Some(loc) => KNIGHT_OFFSETS
                .iter()
                .map(|&(d_row, d_col)| loc.offset(d_row, d_col))
                .filter(|&mv| self.move_is_legal(mv))
                .collect(),
        }
    }

    /// 是否还有合法走法（不分配内存）
    pub fn has_legal_moves(&self, player: Player) -> bool {
        match self.player_location(player) {
            None => self.blocked.iter().any(|&b| !b),
            Some(loc) => KNIGHT_OFFSETS
                .iter()
                .any(|&(d_row, d_col)| self.move_is_legal(loc.offset(d_row, d_col))),
        }
    }

    /// 玩家已输：轮到该玩家走且无子可走
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active && !self.has_legal_moves(player)
    }

    /// 玩家已赢：轮到对手走且对手无子可走
    pub fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && !self.has_legal_moves(self.active)
    }

    /// 游戏是否结束
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(self.active)
    }

    /// 当前走子方执行走法（校验合法性）
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        if self.is_game_over() {
            return Err(IsolationError::GameOver);
        }
        if !self.legal_moves(self.active).contains(&mv) {
            debug!("Rejected illegal move {} for {}", mv, self.active);
            return Err(IsolationError::IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }
        self.place(mv);
        Ok(())
    }

    /// 预演走法：返回执行后的新快照，不修改自身
    ///
    /// 不做合法性校验，调用方需保证 `mv` 来自 `legal_moves(active_player())`
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.place(mv);
        next
    }

    fn place(&mut self, mv: Move) {
        let idx = self.index(mv);
        self.blocked[idx] = true;
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    #[inline]
    fn index(&self, mv: Move) -> usize {
        mv.row as usize * self.width + mv.col as usize
    }

    /// 文本形式的棋盘（`.` 空格，`#` 封锁，`1`/`2` 玩家）
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width * 2 + 1) * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row as i32, col as i32);
                let c = if self.locations[0] == Some(mv) {
                    Player::One.display_char()
                } else if self.locations[1] == Some(mv) {
                    Player::Two.display_char()
                } else if self.blocked[self.index(mv)] {
                    '#'
                } else {
                    '.'
                };
                if col > 0 {
                    out.push(' ');
                }
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
