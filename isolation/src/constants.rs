//! 规则常量定义

/// 默认棋盘宽度（列数）
pub const DEFAULT_BOARD_WIDTH: usize = 7;

/// 默认棋盘高度（行数）
pub const DEFAULT_BOARD_HEIGHT: usize = 7;

/// 马步的 8 个偏移量 (行, 列)
///
/// 全局唯一的一份定义，各处走法生成共用
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// 玩家数量
pub const PLAYER_COUNT: usize = 2;
