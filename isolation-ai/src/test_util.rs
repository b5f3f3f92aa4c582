//! 测试用的棋盘构造

use isolation::{Board, Move};

/// 按规则依次落子
pub fn board_after(width: usize, height: usize, moves: &[(i32, i32)]) -> Board {
    let mut board = Board::new(width, height).unwrap();
    for &mv in moves {
        board.apply_move(Move::from(mv)).unwrap();
    }
    board
}

/// 用 `forecast_move` 依次落子，不校验马步，用来摆出任意局面
pub fn forecast_board(width: usize, height: usize, moves: &[(i32, i32)]) -> Board {
    moves
        .iter()
        .fold(Board::new(width, height).unwrap(), |board, &mv| {
            board.forecast_move(Move::from(mv))
        })
}
