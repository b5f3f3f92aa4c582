//! 单局对弈

use anyhow::Result;
use isolation::{Board, GameRecord, GameResult, Move, Player, WinReason};
use isolation_ai::{Agent, TimeLeft};
use tracing::{debug, warn};

use crate::timer::MoveTimer;

/// 一名参赛者：显示名称 + 智能体
pub struct Contestant<'a> {
    pub name: &'a str,
    pub agent: &'a mut dyn Agent,
}

impl<'a> Contestant<'a> {
    pub fn new(name: &'a str, agent: &'a mut dyn Agent) -> Self {
        Self { name, agent }
    }
}

/// 对弈一局
///
/// 先按 `opening` 落子（不计时），之后轮流向双方要走法。判负条件：
/// - 轮到自己时无子可走
/// - 返回时剩余时间已为负
/// - 返回非法走法（包括有子可走时返回 `Move::NONE`）
pub fn play_game(
    width: usize,
    height: usize,
    opening: &[Move],
    mut players: [Contestant<'_>; 2],
    time_limit_ms: u64,
) -> Result<GameRecord> {
    let mut board = Board::new(width, height)?;
    let mut record = GameRecord::new(&board, players[0].name, players[1].name);

    for &mv in opening {
        board.apply_move(mv)?;
        record.moves.push(mv);
    }

    let result = loop {
        let active = board.active_player();
        if !board.has_legal_moves(active) {
            break GameResult::new(active.opponent(), WinReason::NoLegalMoves);
        }

        let contestant = &mut players[active.index()];
        let timer = MoveTimer::start(time_limit_ms);
        let mv = contestant.agent.get_move(&board, &timer);
        let time_left = timer.time_left();

        if time_left < 0.0 {
            warn!(
                "{} ({}) exceeded the time limit by {:.1} ms",
                contestant.name, active, -time_left
            );
            break GameResult::new(active.opponent(), WinReason::Timeout);
        }
        if let Err(e) = board.apply_move(mv) {
            warn!("{} ({}) forfeits: {}", contestant.name, active, e);
            break GameResult::new(active.opponent(), WinReason::IllegalMove);
        }
        debug!(
            "{} ({}) plays {} with {:.1} ms left",
            contestant.name, active, mv, time_left
        );
        record.moves.push(mv);
    };

    debug!("Final board:\n{}", board);
    record.result = Some(result);
    Ok(record)
}

/// 获胜方在本局中的执子
pub fn winner_of(record: &GameRecord) -> Option<Player> {
    record.result.map(|r| r.winner)
}
