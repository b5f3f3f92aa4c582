//! 玩家与坐标定义

use serde::{Deserialize, Serialize};

/// 玩家
///
/// 只是身份标记；“走子方/非走子方”由具体的棋盘快照决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手
    One,
    /// 后手
    Two,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 转换为数组索引
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 棋盘上显示的字符
    pub fn display_char(&self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// 走法：目标格的 (行, 列) 坐标
///
/// 坐标可以为负或越界（例如偏移计算的中间结果），合法性由棋盘判断。
/// `Move::NONE` 表示“无子可走”。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// 无合法走法的哨兵值
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// 创建新走法
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// 是否为哨兵值
    pub fn is_none(&self) -> bool {
        *self == Move::NONE
    }

    /// 获取偏移后的坐标（不检查边界）
    pub fn offset(&self, d_row: i32, d_col: i32) -> Move {
        Move::new(self.row + d_row, self.col + d_col)
    }

    /// 曼哈顿距离
    pub fn manhattan_distance(&self, other: Move) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
