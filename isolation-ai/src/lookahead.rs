//! 走法前瞻
//!
//! 在棋盘快照上枚举一步、两步之内可以到达的格子，不修改棋盘

use std::collections::HashSet;

use isolation::{Board, Move, Player, KNIGHT_OFFSETS};

/// 从 `from` 出发一步马步可以落到的格子（在棋盘内且未封锁）
fn knight_targets(board: &Board, from: Move) -> impl Iterator<Item = Move> + '_ {
    KNIGHT_OFFSETS
        .iter()
        .map(move |&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(move |&mv| board.move_is_legal(mv))
}

/// 玩家当前位置的马步走法
///
/// 玩家尚未落子时为空集
pub fn knight_moves(board: &Board, player: Player) -> HashSet<Move> {
    match board.player_location(player) {
        Some(loc) => knight_targets(board, loc).collect(),
        None => HashSet::new(),
    }
}

/// 假设对手不动，两步之后可能到达的格子
///
/// `from` 缺省为玩家当前位置。这是一个上估计：既不考虑第一步腾出的格子
/// （第一步落点仍按空格处理，出发格按当前棋盘判断），也不考虑对手的干扰。
pub fn lookahead_two_ply(board: &Board, player: Player, from: Option<Move>) -> HashSet<Move> {
    let Some(origin) = from.or_else(|| board.player_location(player)) else {
        return HashSet::new();
    };
    knight_targets(board, origin)
        .flat_map(|first| knight_targets(board, first))
        .collect()
}

/// 机动性压制指标：对手两步之内、且无法被 `player` 抢先占据的格子数
///
/// 1. 双方各自的一步走法，对手的集合去掉 `player` 可以先占的格子
/// 2. 从各自的一步落点做两步前瞻，`player` 的集合去掉对手一步可占的格子
/// 3. 对手的前瞻集合再去掉 `player` 的前瞻集合
///
/// 只是一个不对称的启发项，并不是精确的距离或可达性。
pub fn lookahead_counter(board: &Board, player: Player) -> usize {
    let opponent = board.opponent_of(player);

    let own: HashSet<Move> = board.legal_moves(player).into_iter().collect();
    let opp: HashSet<Move> = board
        .legal_moves(opponent)
        .into_iter()
        .filter(|mv| !own.contains(mv))
        .collect();

    let own_future: HashSet<Move> = own
        .iter()
        .flat_map(|&mv| lookahead_two_ply(board, player, Some(mv)))
        .filter(|mv| !opp.contains(mv))
        .collect();
    let opp_future: HashSet<Move> = opp
        .iter()
        .flat_map(|&mv| lookahead_two_ply(board, opponent, Some(mv)))
        .filter(|mv| !own_future.contains(mv))
        .collect();

    opp_future.len()
}
